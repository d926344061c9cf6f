//! Customer repository trait (port)

use async_trait::async_trait;

use crate::domain::{Customer, NewCustomer};
use crate::error::DomainError;

/// Raw storage access for the `clientes` table.
///
/// Absence is reported as `None`/`false`; turning it into
/// [`DomainError::CustomerNotFound`] is the service's job. Implementations may
/// still return [`DomainError::EmailAlreadyExists`] when the storage-level
/// unique index rejects a write that raced past the service's pre-check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// True when a row other than `exclude_id` already holds `email`.
    async fn email_in_use(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DomainError>;

    /// Rows in primary-key order.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Customer>, DomainError>;

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// Writes the mutable fields and refreshes `updated_at`. `None` if the row is gone.
    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, DomainError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
