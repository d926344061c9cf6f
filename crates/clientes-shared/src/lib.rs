//! # Clientes Shared
//! 
//! Configuration, telemetry, constants, and small utilities shared by every
//! layer of the customer registry.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
