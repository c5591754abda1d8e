//! Transaction routes - Credit, debit and transfer forms
//!
//! Structure:
//! - api.rs: HTMX form submissions
//! - page.rs: Full page rendering and the shared form panel

pub mod api;
pub mod page;

pub use api::{htmx_credit, htmx_debit, htmx_transfer};
pub use page::{page_transactions, render_transaction_panel, PanelForm, Tab};
