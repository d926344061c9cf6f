//! Common types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Offset pagination over rows in primary-key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.map(i64::from).unwrap_or(DEFAULT_SKIP),
            limit: limit.map(i64::from).unwrap_or(DEFAULT_LIMIT),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: DEFAULT_SKIP, limit: DEFAULT_LIMIT }
    }
}
