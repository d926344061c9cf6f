// ============================================================================
// Clientes Core - Customer Entity
// File: crates/clientes-core/src/domain/customer.rs
// Description: Customer record, creation command, and partial update
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Persisted customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The domain must have at least two non-empty dot-separated labels (`x.com`, not `x`).
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let dotted = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.') && domain.split('.').all(|label| !label.is_empty()))
        .unwrap_or(false);

    if dotted {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain").with_message(Cow::Borrowed("Email inválido")))
    }
}

/// Lowercases the domain part; the local part is kept as sent.
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Fields supplied by the caller when creating a customer.
/// `id` and both timestamps are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 3, max = 255, message = "O nome deve ter entre 3 e 255 caracteres"))]
    pub name: String,

    #[validate(
        email(message = "Email inválido"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,

    #[validate(length(max = 20, message = "O telefone deve ter no máximo 20 caracteres"))]
    pub phone: Option<String>,
}

impl NewCustomer {
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let customer = Self { name, email: normalize_email(&email), phone };
        customer.validate()?;
        Ok(customer)
    }
}

/// Partial update: `None` leaves the field untouched.
///
/// `phone` is doubly optional so an explicit `null` can clear it,
/// while an absent key keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CustomerPatch {
    #[validate(length(min = 3, max = 255, message = "O nome deve ter entre 3 e 255 caracteres"))]
    pub name: Option<String>,

    #[validate(
        email(message = "Email inválido"),
        custom(function = "validate_email_domain")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "O telefone deve ter no máximo 20 caracteres"))]
    pub phone: Option<Option<String>>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Copies every present field onto `customer`. Identity and timestamps are never touched.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = phone.clone();
        }
    }
}
