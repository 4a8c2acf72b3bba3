//! Request validation: every failing field is reported, keyed by field name.

use crate::error::AppError;
use crate::model::{NewStudent, UpdateStudent};
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to complaint, e.g. `"name": "name is a required field"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn required(&mut self, field: &str) {
        self.0.insert(field.to_string(), format!("{} is a required field", field));
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// All of name, email and age must be non-empty / non-zero.
    pub fn validate_new(body: &NewStudent) -> Result<(), AppError> {
        let mut errors = FieldErrors::default();
        check_text(&mut errors, "name", Some(&body.name));
        check_text(&mut errors, "email", Some(&body.email));
        check_number(&mut errors, "age", Some(body.age));
        errors.into_result()
    }

    /// Id must be set and at least one field present; present fields follow the create rules.
    pub fn validate_update(body: &UpdateStudent) -> Result<(), AppError> {
        if body.id == 0 {
            return Err(AppError::BadRequest("missing student id".into()));
        }
        if !body.has_changes() {
            return Err(AppError::BadRequest("no fields to update".into()));
        }
        let mut errors = FieldErrors::default();
        check_text(&mut errors, "name", body.name.as_deref());
        check_text(&mut errors, "email", body.email.as_deref());
        check_number(&mut errors, "age", body.age);
        errors.into_result()
    }
}

fn check_text(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if let Some(v) = value {
        if v.trim().is_empty() {
            errors.required(field);
        }
    }
}

fn check_number(errors: &mut FieldErrors, field: &str, value: Option<i64>) {
    if value == Some(0) {
        errors.required(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(name: &str, email: &str, age: i64) -> NewStudent {
        NewStudent {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    fn field_errors(result: Result<(), AppError>) -> FieldErrors {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn valid_student_passes() {
        assert!(RequestValidator::validate_new(&new_student("Ada", "ada@x.com", 30)).is_ok());
    }

    #[test]
    fn empty_name_reports_only_name() {
        let errors = field_errors(RequestValidator::validate_new(&new_student("", "ada@x.com", 30)));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(errors.get("name"), Some("name is a required field"));
    }

    #[test]
    fn every_missing_field_is_enumerated() {
        let errors = field_errors(RequestValidator::validate_new(&NewStudent::default()));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["age", "email", "name"]);
    }

    #[test]
    fn update_requires_id() {
        let body = UpdateStudent {
            age: Some(31),
            ..Default::default()
        };
        match RequestValidator::validate_update(&body) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "missing student id"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn update_requires_a_field() {
        let body = UpdateStudent {
            id: 5,
            ..Default::default()
        };
        match RequestValidator::validate_update(&body) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "no fields to update"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn update_rejects_blanking_a_present_field() {
        let body = UpdateStudent {
            id: 5,
            email: Some(String::new()),
            ..Default::default()
        };
        let errors = field_errors(RequestValidator::validate_update(&body));
        assert_eq!(errors.get("email"), Some("email is a required field"));
    }
}
