//! # Clientes Infrastructure
//! 
//! PostgreSQL adapters for the customer repository port.

pub mod database;

pub use database::{create_pool, ensure_schema, PgCustomerRepository};
