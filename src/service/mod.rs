//! Storage adapter and request validation.

mod crud;
mod validation;
pub use crud::{SqliteStorage, StudentStorage};
pub use validation::{FieldErrors, RequestValidator};
