//! Domain errors

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Cliente não encontrado")]
    CustomerNotFound,

    /// Carries the offending email for logs; the message stays generic.
    #[error("Email já cadastrado")]
    EmailAlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
