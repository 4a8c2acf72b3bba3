//! JSON body extractor that separates an empty body from a malformed one.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but rejections are `AppError`s and the content type is not enforced.
/// Bodies over the router's `DefaultBodyLimit` become `AppError::PayloadTooLarge`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;
        decode(&bytes).map(JsonBody)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("empty request body".into()));
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("malformed JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewStudent;

    fn message(result: Result<NewStudent, AppError>) -> String {
        match result {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_has_its_own_message() {
        assert_eq!(message(decode(b"")), "empty request body");
        assert_eq!(message(decode(b"  \n")), "empty request body");
    }

    #[test]
    fn malformed_body_is_bad_request() {
        assert!(message(decode(b"{\"name\":")).starts_with("malformed JSON"));
        assert!(message(decode(b"{\"age\":\"thirty\"}")).starts_with("malformed JSON"));
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let body: NewStudent = decode(b"{\"name\":\"Ada\"}").unwrap();
        assert_eq!(body.name, "Ada");
        assert_eq!(body.email, "");
        assert_eq!(body.age, 0);
    }
}
