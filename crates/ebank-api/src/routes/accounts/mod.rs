//! Account routes - Account cards, lookup and history
//!
//! Features:
//! - Account cards with type, balance and owner
//! - Lookup by account id, telling unknown ids apart from backend failures
//! - Paginated history with a description filter on the current page
//! - Full unpaged operation list
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_account_detail, api_account_history, api_accounts, htmx_account_history, htmx_account_lookup,
    htmx_account_operations, htmx_accounts_list,
};
pub use page::{page_accounts, render_account_cards, render_account_detail, render_operation_row};
