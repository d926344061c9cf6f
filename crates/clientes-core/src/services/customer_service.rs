// ============================================================================
// Clientes Core - Customer Service
// File: crates/clientes-core/src/services/customer_service.rs
// ============================================================================
//! Customer CRUD with existence and email-uniqueness guards

use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

use clientes_shared::utils::mask_email;
use clientes_shared::Pagination;

use crate::domain::{normalize_email, Customer, CustomerPatch, NewCustomer};
use crate::error::DomainError;
use crate::repositories::CustomerRepository;

/// Customer service on top of a [`CustomerRepository`].
///
/// Every guard is check-then-write without a surrounding transaction; the
/// storage unique index catches the writer that loses a race.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a customer, rejecting a taken email before inserting
    pub async fn create(&self, mut customer: NewCustomer) -> Result<Customer, DomainError> {
        customer.email = normalize_email(&customer.email);
        customer.validate()?;

        if self.repo.email_in_use(&customer.email, None).await? {
            warn!("Create rejected: email already registered: {}", mask_email(&customer.email));
            return Err(DomainError::EmailAlreadyExists(customer.email));
        }

        let created = self.repo.create(&customer).await?;
        info!("Customer created: {} ({})", created.id, mask_email(&created.email));
        Ok(created)
    }

    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Customer>, DomainError> {
        debug!("Listing customers: skip={} limit={}", pagination.skip, pagination.limit);
        self.repo.list(pagination.skip, pagination.limit).await
    }

    pub async fn get(&self, id: i32) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CustomerNotFound)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Customer, DomainError> {
        self.repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(DomainError::CustomerNotFound)
    }

    /// Apply a partial update.
    ///
    /// Order of checks: payload validation, existence, then email uniqueness
    /// against every other row. Keeping the current email is not a conflict.
    pub async fn update(&self, id: i32, mut patch: CustomerPatch) -> Result<Customer, DomainError> {
        patch.email = patch.email.as_deref().map(normalize_email);
        patch.validate()?;

        let mut customer = self.get(id).await?;

        if let Some(email) = &patch.email {
            if self.repo.email_in_use(email, Some(id)).await? {
                warn!("Update of {} rejected: email already registered: {}", id, mask_email(email));
                return Err(DomainError::EmailAlreadyExists(email.clone()));
            }
        }

        patch.apply_to(&mut customer);

        let updated = self
            .repo
            .update(&customer)
            .await?
            .ok_or(DomainError::CustomerNotFound)?;

        info!("Customer updated: {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::CustomerNotFound);
        }
        info!("Customer deleted: {}", id);
        Ok(())
    }
}
