//! Parameterized SQL for the students table: identifiers are constants, values are always bound.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
