//! Customer wire format (Portuguese field names) and its mapping to the domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use clientes_core::{Customer, CustomerPatch, NewCustomer};
use clientes_shared::Pagination;

/// Domain field name to the name clients send and receive.
pub fn wire_field_name(field: &str) -> &str {
    match field {
        "name" => "nome",
        "phone" => "telefone",
        other => other,
    }
}

/// Body of `POST /clientes`
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", alias = "phone", default)]
    pub phone: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(req: CreateCustomerRequest) -> Self {
        NewCustomer {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Body of `PUT /clientes/{id}`: any subset of the fields.
/// `"telefone": null` clears the phone; an absent key keeps it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(rename = "nome", alias = "name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", alias = "phone", default, deserialize_with = "present")]
    pub phone: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(req: UpdateCustomerRequest) -> Self {
        CustomerPatch {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Query string of `GET /clientes`
#[derive(Debug, Default, Deserialize)]
pub struct ListCustomersQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ListCustomersQuery> for Pagination {
    fn from(query: ListCustomersQuery) -> Self {
        Pagination::new(query.skip, query.limit)
    }
}

/// Customer record as returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            nome: customer.name,
            email: customer.email,
            telefone: customer.phone,
            criado_em: customer.created_at,
            atualizado_em: customer.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_both_spellings() {
        let pt: CreateCustomerRequest =
            serde_json::from_value(json!({"nome": "Ana Silva", "email": "ana@x.com", "telefone": "123"})).unwrap();
        assert_eq!(pt.name, "Ana Silva");
        assert_eq!(pt.phone.as_deref(), Some("123"));

        let en: CreateCustomerRequest =
            serde_json::from_value(json!({"name": "Ana Silva", "email": "ana@x.com"})).unwrap();
        assert_eq!(en.name, "Ana Silva");
        assert_eq!(en.phone, None);
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateCustomerRequest = serde_json::from_value(json!({"nome": "Beatriz"})).unwrap();
        assert_eq!(absent.phone, None);

        let cleared: UpdateCustomerRequest = serde_json::from_value(json!({"telefone": null})).unwrap();
        assert_eq!(cleared.phone, Some(None));

        let set: UpdateCustomerRequest = serde_json::from_value(json!({"telefone": "123"})).unwrap();
        assert_eq!(set.phone, Some(Some("123".to_string())));
    }

    #[test]
    fn test_response_uses_wire_names() {
        let now = Utc::now();
        let response = CustomerResponse::from(Customer {
            id: 1,
            name: "Ana Silva".to_string(),
            email: "ana@x.com".to_string(),
            phone: None,
            created_at: now,
            updated_at: now,
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["nome"], "Ana Silva");
        assert!(value["telefone"].is_null());
        assert!(value.get("criado_em").is_some());
        assert!(value.get("atualizado_em").is_some());
    }
}
