//! Domain services (business logic)

pub mod customer_service;

pub use customer_service::CustomerService;
