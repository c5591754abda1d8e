//! Route modules for the web server
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX partial responses
//! - page.rs: Full page rendering

pub mod accounts;
pub mod customers;
pub mod settings;
pub mod transactions;

use std::collections::HashMap;

/// Zero-based `page` query parameter; absent means the first page
pub(crate) fn page_param(params: &HashMap<String, String>) -> Result<u32, crate::ApiError> {
    match params.get("page").map(|p| p.trim()).filter(|p| !p.is_empty()) {
        None => Ok(0),
        Some(raw) => raw.parse().map_err(|_| crate::ApiError::BadRequest {
            message: format!("page must be a non-negative integer, got '{}'", raw),
        }),
    }
}
