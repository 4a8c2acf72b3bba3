//! Student record and request payloads.

use serde::{Deserialize, Serialize};

/// A persisted student row. `id` is assigned by SQLite on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Body of `POST /students`. Missing fields decode to their zero value and are
/// rejected by validation, so every missing field is reported at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Body of `PUT /students`. `None` means the field is left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStudent {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl UpdateStudent {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.age.is_some()
    }
}

/// Outcome of a statement that does not check for the row beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: &'static str,
    pub rows_affected: u64,
}

pub const UPDATED_MESSAGE: &str = "student updated successfully";
pub const DELETED_MESSAGE: &str = "student deleted successfully";
