//! # Clientes Core
//! 
//! Customer entity, domain errors, the repository port, and the service that
//! guards existence and email uniqueness.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
