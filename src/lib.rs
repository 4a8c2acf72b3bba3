//! Student records over HTTP: validated JSON in, parameterized SQL against SQLite, JSON out.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Confirmation, NewStudent, Student, UpdateStudent};
pub use routes::{ops_routes, router, student_routes};
pub use service::{SqliteStorage, StudentStorage};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_students_table};
