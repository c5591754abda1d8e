//! Account endpoints - JSON API and HTMX partial responses

use crate::routes::page_param;
use crate::{notice_html, ApiError, AppState};
use axum::extract::{Path, Query};
use axum::Json;
use ebank_client::Account;
use ebank_core::{AccountOverview, HistoryPage, Notice};
use std::collections::HashMap;

use super::page::{render_account_cards, render_account_detail, render_accounts_error, render_operation_row};

pub async fn api_accounts(state: axum::extract::State<AppState>) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(state.bank.accounts().await?))
}

pub async fn api_account_detail(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    Ok(Json(state.bank.find_account(&id).await?))
}

pub async fn api_account_history(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
    params: Query<HashMap<String, String>>,
) -> Result<Json<HistoryPage>, ApiError> {
    let page = page_param(&params)?;
    Ok(Json(state.bank.account_history(&id, page).await?))
}

/// Account cards, used by the Retry link
pub async fn htmx_accounts_list(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    axum::response::Html(match state.bank.accounts().await {
        Ok(accounts) => render_account_cards(&accounts, &state.config.currency),
        Err(e) => render_accounts_error(&e),
    })
}

fn render_overview(result: Result<AccountOverview, ebank_core::CoreError>, query: &str, state: &AppState) -> String {
    match result {
        Ok(overview) => render_account_detail(&overview, query, &state.config.currency),
        Err(e) => notice_html(&Notice::error(e.user_message())),
    }
}

/// Search by account id: details card and first history page
pub async fn htmx_account_lookup(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let raw_id = params.get("account_id").map(String::as_str).unwrap_or("");
    let result = state.bank.account_overview(raw_id, 0).await;
    axum::response::Html(render_overview(result, "", &state))
}

/// One history page, optionally filtered by description
pub async fn htmx_account_history(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let page = page_param(&params).unwrap_or(0);
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let result = state.bank.account_overview(&id, page).await;
    axum::response::Html(render_overview(result, query, &state))
}

/// Every operation on the account, unpaged
pub async fn htmx_account_operations(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Html<String> {
    axum::response::Html(match state.bank.account_operations(&id).await {
        Ok(operations) if operations.is_empty() => {
            "<p class='text-gray-500 py-6 text-center'>No transactions found</p>".to_string()
        }
        Ok(operations) => operations
            .iter()
            .map(|op| render_operation_row(op, &state.config.currency))
            .collect(),
        Err(e) => notice_html(&Notice::error(e.user_message())),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_accounts_page_lists_cards() {
        let (status, body) = send(router_with(Arc::default()), get("/accounts")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("$1,234.50"));
        assert!(body.contains("hx-get='/accounts/ACC-2/history?page=0'"));
        assert!(body.contains("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_accounts_page_failure_has_retry() {
        let stub = Arc::new(StubBackend {
            fail: true,
            ..Default::default()
        });
        let (status, body) = send(router_with(stub), get("/accounts")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to load accounts: "));
        assert!(body.contains("Retry"));
    }

    #[tokio::test]
    async fn test_lookup_messages() {
        let (_, empty) = send(router_with(Arc::default()), htmx_get("/accounts/lookup?account_id=+")).await;
        assert!(empty.contains("Please enter an account ID"));

        let (_, missing) = send(router_with(Arc::default()), htmx_get("/accounts/lookup?account_id=MISSING")).await;
        assert!(missing.contains("Account not found"));

        let down = Arc::new(StubBackend {
            fail: true,
            ..Default::default()
        });
        let (_, broken) = send(router_with(down), htmx_get("/accounts/lookup?account_id=ACC-1")).await;
        assert!(broken.contains("Failed to fetch account"));
    }

    #[tokio::test]
    async fn test_lookup_shows_first_page() {
        let stub = Arc::new(StubBackend::default());
        let (_, body) = send(router_with(stub.clone()), htmx_get("/accounts/lookup?account_id=%20ACC-1%20")).await;
        assert!(body.contains("Showing page 1 of 2 (2 transactions)"));
        assert!(body.contains("+$500.00"));
        assert!(body.contains("<span class='font-semibold text-red-600'>$20.00</span>"));
        assert!(!body.contains("-$20.00"));
        assert!(body.contains("Jan 5, 2025"));
        assert!(stub.calls().contains(&"history ACC-1 0 4".to_string()));
    }

    #[tokio::test]
    async fn test_history_pagination_edges() {
        let (_, first) = send(router_with(Arc::default()), htmx_get("/accounts/ACC-1/history?page=0")).await;
        assert!(first.contains("<button disabled class='px-3 py-1 rounded-lg border text-gray-300 cursor-not-allowed'>Previous</button>"));
        assert!(first.contains("hx-get='/accounts/ACC-1/history?page=1'"));

        let (_, last) = send(router_with(Arc::default()), htmx_get("/accounts/ACC-1/history?page=1")).await;
        assert!(last.contains("Showing page 2 of 2"));
        assert!(last.contains("cursor-not-allowed'>Next</button>"));
        assert!(last.contains("hx-get='/accounts/ACC-1/history?page=0'"));
    }

    #[tokio::test]
    async fn test_history_filter() {
        let (_, body) = send(router_with(Arc::default()), htmx_get("/accounts/ACC-1/history?page=0&q=coffee")).await;
        assert!(body.contains("Coffee"));
        assert!(!body.contains("Salary"));
        assert!(body.contains("page=1&amp;q=coffee"));

        let (_, none) = send(router_with(Arc::default()), htmx_get("/accounts/ACC-1/history?q=rent")).await;
        assert!(none.contains("No transactions found"));
    }

    #[tokio::test]
    async fn test_operations_partial() {
        let (status, body) = send(router_with(Arc::default()), htmx_get("/accounts/ACC-1/operations")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Salary"));
        assert!(body.contains("Coffee"));
    }

    #[tokio::test]
    async fn test_api_account_errors() {
        let (status, body) = send(router_with(Arc::default()), get("/api/accounts/MISSING")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "ACCOUNT_NOT_FOUND");

        let down = Arc::new(StubBackend {
            fail: true,
            ..Default::default()
        });
        let (status, _) = send(router_with(down), get("/api/accounts")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_api_history() {
        let (status, body) = send(router_with(Arc::default()), get("/api/accounts/ACC-1/history?page=1")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["total_pages"], 2);

        let (status, _) = send(router_with(Arc::default()), get("/api/accounts/ACC-1/history?page=x")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
