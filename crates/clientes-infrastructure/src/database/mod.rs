//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::{create_pool, ensure_schema};
pub use postgres::PgCustomerRepository;
