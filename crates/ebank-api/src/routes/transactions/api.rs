//! Transaction endpoints - HTMX form submissions
//!
//! Each submit re-renders the whole panel. Success clears the form and
//! reloads the account picker so balances are current; failure keeps what
//! the user typed.

use crate::AppState;
use axum::Form;
use ebank_core::{CoreResult, CreditForm, DebitForm, Notice, TransferForm};

use super::page::{render_transaction_panel, PanelForm};

async fn respond(
    state: &AppState,
    headers: &axum::http::HeaderMap,
    submitted: PanelForm,
    outcome: CoreResult<String>,
) -> axum::response::Html<String> {
    let (form, notice) = match outcome {
        Ok(message) => (PanelForm::empty(submitted.tab()), Notice::success(message)),
        Err(e) => (submitted, Notice::error(e.user_message())),
    };
    let accounts = state.bank.accounts().await.ok();
    let panel = render_transaction_panel(&form, accounts.as_deref(), Some(&notice), &state.config.currency);

    if crate::is_htmx_request(headers) {
        axum::response::Html(panel)
    } else {
        let inner_content = format!(r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Transactions</h2></div>{}"#, panel);
        axum::response::Html(crate::page_response(headers, "Transactions", "/transactions", &inner_content))
    }
}

pub async fn htmx_credit(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<CreditForm>,
) -> axum::response::Html<String> {
    let outcome = state.bank.credit(&form).await;
    respond(&state, &headers, PanelForm::Credit(form), outcome).await
}

pub async fn htmx_debit(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<DebitForm>,
) -> axum::response::Html<String> {
    let outcome = state.bank.debit(&form).await;
    respond(&state, &headers, PanelForm::Debit(form), outcome).await
}

pub async fn htmx_transfer(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<TransferForm>,
) -> axum::response::Html<String> {
    let outcome = state.bank.transfer(&form).await;
    respond(&state, &headers, PanelForm::Transfer(form), outcome).await
}
