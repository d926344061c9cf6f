//! # Clientes Core - Domain Module

pub mod customer;

pub use customer::{normalize_email, Customer, CustomerPatch, NewCustomer};
