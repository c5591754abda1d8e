//! Customer routes - Customer table, creation and search
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_customers, htmx_customer_delete, htmx_customer_search, htmx_customer_store};
pub use page::{page_customer_new, page_customers, render_customer_form, render_customer_row};
