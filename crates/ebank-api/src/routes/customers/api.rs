//! Customer endpoints - JSON API and HTMX partial responses

use crate::{notice_html, AppState};
use axum::extract::{Path, Query};
use axum::{Form, Json};
use ebank_client::Customer;
use ebank_core::{CoreError, CustomerForm, Notice, MSG_CUSTOMER_CREATED};
use ebank_utils::escape_html;
use std::collections::HashMap;

use super::page::render_customer_form;

pub async fn api_customers(state: axum::extract::State<AppState>) -> Result<Json<Vec<Customer>>, crate::ApiError> {
    Ok(Json(state.bank.customers().await?))
}

/// Create a customer and re-render the form with the outcome
pub async fn htmx_customer_store(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<CustomerForm>,
) -> axum::response::Html<String> {
    let fragment = match state.bank.create_customer(&form).await {
        Ok(_) => render_customer_form(&CustomerForm::default(), Some(&Notice::success(MSG_CUSTOMER_CREATED))),
        // Validation problems keep what the user typed
        Err(e @ CoreError::ValidationError { .. }) => {
            render_customer_form(&form, Some(&Notice::error(e.user_message())))
        }
        Err(e) => render_customer_form(&CustomerForm::default(), Some(&Notice::error(e.user_message()))),
    };

    if crate::is_htmx_request(&headers) {
        return axum::response::Html(fragment);
    }
    let inner_content = format!(r#"<div class='mb-6'><h2 class='text-2xl font-bold'>New Customer</h2></div>{}"#, fragment);
    axum::response::Html(crate::page_response(&headers, "New Customer", "/customers", &inner_content))
}

/// Delete a customer; an empty response removes the table row
pub async fn htmx_customer_delete(
    state: axum::extract::State<AppState>,
    Path(id): Path<i64>,
) -> axum::response::Html<String> {
    match state.bank.delete_customer(id).await {
        Ok(()) => axum::response::Html(String::new()),
        Err(e) => axum::response::Html(format!(
            r#"<tr id='customer-{}'><td colspan='4' class='px-4 py-3'>{}</td></tr>"#,
            id,
            notice_html(&Notice::error(e.user_message()))
        )),
    }
}

/// Navbar search results
pub async fn htmx_customer_search(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let keyword = params.get("q").map(|q| q.trim()).unwrap_or("");
    if keyword.is_empty() {
        return axum::response::Html(String::new());
    }

    let inner = match state.bank.search_customers(keyword).await {
        Ok(customers) if customers.is_empty() => {
            "<li class='px-4 py-2 text-gray-500'>No customers found.</li>".to_string()
        }
        Ok(customers) => customers
            .iter()
            .map(|c| {
                format!(
                    r#"<li class='px-4 py-2 border-b last:border-0 hover:bg-gray-50'>
                    <p class='font-medium'>{}</p>
                    <p class='text-sm text-gray-600'>{}</p>
                    <p class='text-sm text-gray-500'>{}</p>
                </li>"#,
                    escape_html(&c.name),
                    escape_html(&c.email),
                    escape_html(c.phone.as_deref().unwrap_or("-"))
                )
            })
            .collect(),
        Err(e) => format!("<li class='px-4 py-2 text-red-600'>{}</li>", escape_html(&e.user_message())),
    };

    axum::response::Html(format!(
        "<ul class='bg-white text-gray-900 rounded-lg shadow-lg max-h-80 overflow-auto'>{}</ul>",
        inner
    ))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_customers_page_escapes_names() {
        let (status, body) = send(router_with(Arc::default()), get("/customers")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ada &lt;Lovelace&gt;"));
        assert!(body.contains("hx-delete='/customers/1'"));
    }

    #[tokio::test]
    async fn test_customers_page_load_failure() {
        let stub = Arc::new(StubBackend {
            fail: true,
            ..Default::default()
        });
        let (status, body) = send(router_with(stub), get("/customers")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to load customers"));
        assert!(!body.contains("<table"));
    }

    #[tokio::test]
    async fn test_create_customer_resets_form() {
        let stub = Arc::new(StubBackend::default());
        let (status, body) = send(router_with(stub.clone()), form_post("/customers", "name=Grace&email=grace%40example.com")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Customer created successfully!"));
        assert!(body.contains("name='name' type='text' value=''"));
        assert_eq!(stub.calls(), vec!["create_customer Grace"]);
    }

    #[tokio::test]
    async fn test_create_customer_failure_resets_form() {
        let stub = Arc::new(StubBackend {
            reject_body: Some("Email already used"),
            ..Default::default()
        });
        let (_, body) = send(router_with(stub), form_post("/customers", "name=Grace&email=grace%40example.com")).await;
        assert!(body.contains("Failed to create customer."));
        assert!(body.contains("type='email' value=''"));
    }

    #[tokio::test]
    async fn test_create_customer_validation_keeps_input() {
        let stub = Arc::new(StubBackend::default());
        let (_, body) = send(router_with(stub.clone()), form_post("/customers", "name=Grace&email=")).await;
        assert!(body.contains("Please fill in all required fields"));
        assert!(body.contains("value='Grace'"));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_customer_returns_empty_row() {
        let stub = Arc::new(StubBackend::default());
        let request = Request::builder()
            .method("DELETE")
            .uri("/customers/5")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router_with(stub.clone()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(stub.calls(), vec!["delete_customer 5"]);
    }

    #[tokio::test]
    async fn test_search_partial() {
        let stub = Arc::new(StubBackend::default());
        let (_, blank) = send(router_with(stub.clone()), htmx_get("/customers/search?q=%20")).await;
        assert!(blank.is_empty());
        assert!(stub.calls().is_empty());

        let (_, found) = send(router_with(stub.clone()), htmx_get("/customers/search?q=ada")).await;
        assert!(found.contains("ada@example.com"));
        assert!(found.contains("555-0100"));

        let (_, none) = send(router_with(stub), htmx_get("/customers/search?q=nobody")).await;
        assert!(none.contains("No customers found."));
    }

    #[tokio::test]
    async fn test_search_failure() {
        let stub = Arc::new(StubBackend {
            fail: true,
            ..Default::default()
        });
        let (_, body) = send(router_with(stub), htmx_get("/customers/search?q=ada")).await;
        assert!(body.contains("Error fetching data: "));
    }

    #[tokio::test]
    async fn test_api_customers() {
        let (status, body) = send(router_with(Arc::default()), get("/api/customers")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_new_customer_page() {
        let (status, body) = send(router_with(Arc::default()), get("/customers/new")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Enter customer name"));
    }
}
