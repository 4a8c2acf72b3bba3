//! Student handlers: create, read, list, update, delete.

use crate::error::{AppError, StoreError};
use crate::extractors::JsonBody;
use crate::model::{NewStudent, UpdateStudent};
use crate::response::{success_created, success_message, success_ok, Created};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::extract::{Path, State};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid student id: '{}'", id_str)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewStudent>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!("creating student");
    RequestValidator::validate_new(&body)?;
    let id = state
        .storage
        .create(&body.name, &body.email, body.age)
        .await?;
    tracing::info!(id, "student created");
    Ok(success_created(Created { id }))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!(id = %id_str, "getting student");
    let id = parse_id(&id_str)?;
    let student = state.storage.get_by_id(id).await?;
    Ok(success_ok(student))
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!("listing students");
    let students = state.storage.list().await?;
    Ok(success_ok(students))
}

pub async fn update(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UpdateStudent>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!(id = body.id, "updating student");
    RequestValidator::validate_update(&body)?;
    let confirmation = state.storage.update(&body).await?;
    if confirmation.rows_affected == 0 {
        return Err(StoreError::NotFound(body.id).into());
    }
    Ok(success_message(confirmation.message))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!(id = %id_str, "deleting student");
    let id = parse_id(&id_str)?;
    let confirmation = state.storage.delete_by_id(id).await?;
    if confirmation.rows_affected == 0 {
        return Err(StoreError::NotFound(id).into());
    }
    Ok(success_message(confirmation.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id(" 12"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("12 "), Err(AppError::BadRequest(_))));
    }
}
