use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

use clientes_core::DomainError;

use crate::dto::customer::wire_field_name;
use crate::response::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(errors) => ApiError::Validation(errors),
            e @ DomainError::EmailAlreadyExists(_) => ApiError::Conflict(e.to_string()),
            e @ DomainError::CustomerNotFound => ApiError::NotFound(e.to_string()),
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Field name (as sent on the wire) to its validation messages.
fn validation_fields(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (wire_field_name(&field).to_string(), messages)
        })
        .collect()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, detail, fields) = match self {
            ApiError::Validation(errors) => {
                let fields = validation_fields(&errors);
                tracing::warn!("Validation failed: {:?}", fields);
                let detail = fields.keys().cloned().collect::<Vec<_>>().join(", ");
                (
                    StatusCode::BAD_REQUEST,
                    "ValidationError",
                    format!("Dados inválidos: {}", detail),
                    Some(fields),
                )
            },
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::BAD_REQUEST, "ConflictError", msg, None)
            },
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFoundError", msg, None)
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg, None)
            },
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", "Erro interno do servidor".to_string(), None)
            },
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            detail,
            fields,
        });

        (status, body).into_response()
    }
}
