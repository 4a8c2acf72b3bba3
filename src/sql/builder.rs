//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the students table.

use super::params::BindValue;
use crate::model::UpdateStudent;

pub const STUDENTS_TABLE: &str = "students";

/// Idempotent DDL run at startup.
pub const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        age INTEGER NOT NULL
    )
"#;

const SELECT_COLUMNS: &str = "id, name, email, age";

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) {
        self.params.push(v);
    }
}

pub fn insert(name: &str, email: &str, age: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(BindValue::Text(name.to_string()));
    q.push_param(BindValue::Text(email.to_string()));
    q.push_param(BindValue::Int(age));
    q.sql = format!("INSERT INTO {} (name, email, age) VALUES (?, ?, ?)", STUDENTS_TABLE);
    q
}

pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(BindValue::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE id = ? LIMIT 1", SELECT_COLUMNS, STUDENTS_TABLE);
    q
}

/// No ORDER BY: rows come back in SQLite's iteration order.
pub fn select_list() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", SELECT_COLUMNS, STUDENTS_TABLE);
    q
}

/// UPDATE by id: SET only the fields present in the request, always in the order name, email, age.
/// Returns `None` when the request carries no field to change.
pub fn update(req: &UpdateStudent) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let fields = [
        ("name", req.name.clone().map(BindValue::Text)),
        ("email", req.email.clone().map(BindValue::Text)),
        ("age", req.age.map(BindValue::Int)),
    ];
    let mut sets = Vec::new();
    for (column, value) in fields {
        let Some(value) = value else { continue };
        sets.push(format!("{} = ?", column));
        q.push_param(value);
    }
    if sets.is_empty() {
        return None;
    }
    q.push_param(BindValue::Int(req.id));
    q.sql = format!("UPDATE {} SET {} WHERE id = ?", STUDENTS_TABLE, sets.join(", "));
    Some(q)
}

pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(BindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE id = ?", STUDENTS_TABLE);
    q
}
