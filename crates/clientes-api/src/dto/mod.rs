//! Request and response DTOs

pub mod customer;
