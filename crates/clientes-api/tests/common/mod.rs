//! Shared fixtures for the HTTP integration tests.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use clientes_api::{router, AppState};
use clientes_core::error::DomainError;
use clientes_core::repositories::CustomerRepository;
use clientes_core::{Customer, NewCustomer};
use clientes_shared::config::AppConfig;

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<Customer>,
}

/// Keeps rows in id order and enforces the email unique index like the real table.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    table: Mutex<Table>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|c| c.email == email).cloned())
    }

    async fn email_in_use(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DomainError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .any(|c| c.email == email && Some(c.id) != exclude_id))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Customer>, DomainError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let mut table = self.table.lock().await;
        if table.rows.iter().any(|c| c.email == customer.email) {
            return Err(DomainError::EmailAlreadyExists(customer.email.clone()));
        }
        table.next_id += 1;
        let now = Utc::now();
        let created = Customer {
            id: table.next_id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        let mut table = self.table.lock().await;
        if table
            .rows
            .iter()
            .any(|c| c.email == customer.email && c.id != customer.id)
        {
            return Err(DomainError::EmailAlreadyExists(customer.email.clone()));
        }
        let Some(row) = table.rows.iter_mut().find(|c| c.id == customer.id) else {
            return Ok(None);
        };
        row.name = customer.name.clone();
        row.email = customer.email.clone();
        row.phone = customer.phone.clone();
        row.updated_at = Utc::now().max(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        Ok(table.rows.len() < before)
    }
}

pub fn test_app() -> Router {
    let config = AppConfig::build("test", None).unwrap();
    let state = AppState::new(Arc::new(InMemoryCustomerRepository::default()), config);
    router(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
