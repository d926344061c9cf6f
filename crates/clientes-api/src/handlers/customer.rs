// ============================================================================
// Clientes API - Customer Handlers
// File: crates/clientes-api/src/handlers/customer.rs
// ============================================================================
//! Customer CRUD handlers under `/clientes`

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::dto::customer::{
    CreateCustomerRequest, CustomerResponse, ListCustomersQuery, UpdateCustomerRequest,
};
use crate::error::ApiError;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Create handler - POST /clientes
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let Json(payload) = payload?;
    let created = state.customers.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List handler - GET /clientes?skip=&limit=
pub async fn list_customers(
    State(state): State<AppState>,
    query: Result<Query<ListCustomersQuery>, QueryRejection>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let Query(query) = query?;
    let customers = state.customers.list(query.into()).await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Get handler - GET /clientes/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(id) = id?;
    let customer = state.customers.get(id).await?;
    Ok(Json(customer.into()))
}

/// Update handler - PUT /clientes/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let updated = state.customers.update(id, payload.into()).await?;
    Ok(Json(updated.into()))
}

/// Delete handler - DELETE /clientes/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.customers.delete(id).await?;
    Ok(Json(MessageResponse::new(format!("Cliente {} deletado com sucesso", id))))
}

/// Lookup handler - GET /clientes/buscar/email/{email}
pub async fn get_customer_by_email(
    State(state): State<AppState>,
    email: Result<Path<String>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(email) = email?;
    let customer = state.customers.get_by_email(&email).await?;
    Ok(Json(customer.into()))
}
