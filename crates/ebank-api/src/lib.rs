//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::customers: Customer table, creation form, navbar search
//! - routes::accounts: Account cards, lookup by id, paginated history
//! - routes::transactions: Credit, debit and transfer forms
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Datelike;
use ebank_config::Config;
use ebank_core::{Bank, Notice};
use ebank_utils::escape_html;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<Bank>,
    pub config: Config,
}

impl AppState {
    pub fn new(bank: Bank) -> Self {
        Self {
            config: bank.config().clone(),
            bank: Arc::new(bank),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::accounts::{
        api_account_detail, api_account_history, api_accounts, htmx_account_history, htmx_account_lookup,
        htmx_account_operations, htmx_accounts_list, page_accounts,
    };
    use routes::customers::{
        api_customers, htmx_customer_delete, htmx_customer_search, htmx_customer_store, page_customer_new,
        page_customers,
    };
    use routes::settings::{api_settings, page_settings};
    use routes::transactions::{htmx_credit, htmx_debit, htmx_transfer, page_transactions};

    let api = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/accounts", get(api_accounts))
        .route("/api/accounts/:id", get(api_account_detail))
        .route("/api/accounts/:id/history", get(api_account_history))
        .route("/api/customers", get(api_customers))
        .route("/api/settings", get(api_settings))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(api)
        // HTMX page routes
        .route("/", get(index_page))
        .route("/customers", get(page_customers).post(htmx_customer_store))
        .route("/customers/new", get(page_customer_new))
        .route("/accounts", get(page_accounts))
        .route("/transactions", get(page_transactions))
        .route("/settings", get(page_settings))
        // HTMX partial routes
        .route("/customers/search", get(htmx_customer_search))
        .route("/customers/:id", delete(htmx_customer_delete))
        .route("/accounts/list", get(htmx_accounts_list))
        .route("/accounts/lookup", get(htmx_account_lookup))
        .route("/accounts/:id/history", get(htmx_account_history))
        .route("/accounts/:id/operations", get(htmx_account_operations))
        .route("/transactions/credit", post(htmx_credit))
        .route("/transactions/debit", post(htmx_debit))
        .route("/transactions/transfer", post(htmx_transfer))
        .fallback(not_found_page)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - E-Bank</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        escape_html(title),
        content
    )
}

/// Top navigation bar with the customer search box
pub fn nav_bar(current_path: &str) -> String {
    let links = [
        ("/", "Home"),
        ("/customers", "Customers"),
        ("/accounts", "Accounts"),
        ("/transactions", "Transactions"),
        ("/settings", "Settings"),
    ];

    let mut items = String::new();
    for (path, label) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active { "bg-blue-700" } else { "hover:bg-blue-500" };
        items.push_str(&format!(
            r#"<a href='{}' class='px-3 py-2 rounded-lg {}'>{}</a>"#,
            path, active_class, label
        ));
    }

    format!(
        r#"<nav class='w-full bg-blue-600 text-white shadow fixed top-0 left-0 right-0 z-50'>
    <div class='flex items-center justify-between h-16 px-4 gap-4'>
        <a href='/' class='font-bold text-lg'>E-Banking</a>
        <div class='relative flex-1 max-w-xs'>
            <input type='search' name='q' placeholder='Search customers...' autocomplete='off'
                hx-get='/customers/search' hx-trigger='keyup changed delay:300ms, search'
                hx-target='#search-results'
                class='w-full rounded-lg px-3 py-1.5 text-gray-900'>
            <div id='search-results' class='absolute left-0 right-0 mt-1'></div>
        </div>
        <div class='flex items-center gap-1 text-sm'>{}</div>
    </div>
</nav>"#,
        items
    )
}

/// Site footer, shown on the home page
pub fn footer_html() -> String {
    format!(
        r#"<footer class='bg-white text-gray-700 border-t mt-16'>
    <div class='max-w-7xl mx-auto px-6 py-10 grid grid-cols-1 sm:grid-cols-3 gap-8'>
        <div><h2 class='text-xl font-bold mb-4'>eBank</h2>
            <p class='text-sm'>Secure. Reliable. Modern banking built for your future.</p></div>
        <div><h3 class='text-lg font-semibold mb-4'>Quick Links</h3>
            <ul class='space-y-2 text-sm'>
                <li><a href='/' class='hover:underline'>Home</a></li>
                <li><a href='/accounts' class='hover:underline'>Accounts</a></li>
                <li><a href='/transactions' class='hover:underline'>Transactions</a></li>
            </ul></div>
        <div><h3 class='text-lg font-semibold mb-4'>Contact Us</h3>
            <ul class='space-y-2 text-sm'><li>support@ebank.com</li><li>+213 555 123 456</li></ul></div>
    </div>
    <div class='bg-gray-100 py-4 text-center text-sm text-gray-500'>&copy; {} eBank. All rights reserved.</div>
</footer>"#,
        chrono::Local::now().year()
    )
}

/// Inline success or error banner
pub fn notice_html(notice: &Notice) -> String {
    let (box_class, icon) = if notice.is_success() {
        ("bg-green-50 border-green-200 text-green-800", "✓")
    } else {
        ("bg-red-50 border-red-200 text-red-800", "✗")
    };
    format!(
        r#"<div class='border rounded-lg p-4 mb-4 flex items-center gap-2 {}' role='alert'><span>{}</span><span>{}</span></div>"#,
        box_class,
        icon,
        escape_html(&notice.message)
    )
}

/// Check if request is from HTMX (partial page update)
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!(r#"<main class='max-w-7xl mx-auto p-6'>{}</main>"#, inner_content)
    } else {
        base_html(
            title,
            &format!(
                r#"{}
<div class='pt-16 min-h-screen'>
    <main class='max-w-7xl mx-auto p-6'>{}</main>
</div>"#,
                nav_bar(current_path),
                inner_content
            ),
        )
    }
}

/// Home page
async fn index_page(headers: HeaderMap) -> Html<String> {
    let features = [
        ("💸", "Instant Transfers", "Move money between accounts or send to others in seconds."),
        ("🔒", "End-to-End Security", "Multi-layered protection, encryption, and fraud detection."),
        ("💳", "Smart Virtual Cards", "Create virtual cards with spending limits for online safety."),
        ("🌍", "Global Payments", "Transfer funds internationally with great exchange rates."),
        ("🧑‍💼", "24/7 Customer Support", "Get fast help anytime via chat, phone, or email."),
        ("📊", "Financial Insights", "Track expenses, plan budgets, and set saving goals easily."),
        ("📱", "Full Mobile Access", "Manage your accounts, cards, and bills directly from your app."),
        ("🛡️", "Regulatory Compliance", "We are licensed and comply with global financial standards."),
    ];

    let cards: String = features
        .iter()
        .map(|(icon, title, description)| {
            format!(
                r#"<div class='bg-white p-6 rounded-xl shadow hover:shadow-lg transition text-center'>
                <div class='text-4xl mb-4'>{}</div>
                <h3 class='text-xl font-semibold text-blue-900 mb-2'>{}</h3>
                <p class='text-gray-600'>{}</p>
            </div>"#,
                icon, title, description
            )
        })
        .collect();

    let inner_content = format!(
        r#"<section class='text-center mb-20 max-w-4xl mx-auto'>
            <h1 class='text-5xl font-bold text-blue-900 mb-6'>Welcome to <span class='text-blue-600'>E-BANK</span></h1>
            <p class='text-gray-700 text-lg'>Revolutionizing your financial experience with speed, security, and simplicity.</p>
        </section>
        <section class='grid gap-8 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4'>{}</section>
        <section class='mt-24 max-w-4xl mx-auto text-center'>
            <h2 class='text-3xl font-bold text-blue-800 mb-6'>Banking Reimagined for the Digital Age</h2>
            <p class='text-gray-700 text-lg leading-relaxed mb-10'>At E-BANK, we're building a future where you're in full control of your finances, from anywhere in the world. No long queues, no hidden fees.</p>
            <a href='/accounts' class='bg-blue-600 hover:bg-blue-700 text-white text-lg font-semibold px-8 py-3 rounded-xl shadow-md'>Get Started Now</a>
        </section>
        {}"#,
        cards,
        footer_html()
    );

    Html(page_response(&headers, "Home", "/", &inner_content))
}

/// Fallback for unknown routes
async fn not_found_page(headers: HeaderMap) -> impl IntoResponse {
    let inner_content = r#"<div class='flex items-center justify-center py-24'>
        <div class='bg-white p-10 rounded-xl shadow-lg flex flex-col items-center'>
            <h1 class='text-6xl font-extrabold text-blue-500 mb-4'>404</h1>
            <h2 class='text-2xl font-bold text-gray-800 mb-2'>Page Not Found</h2>
            <p class='text-gray-600 mb-4'>The page you are looking for does not exist.</p>
            <p class='text-gray-500 mb-6'>Please check the URL or return to the homepage.</p>
            <a href='/' class='px-6 py-2 bg-blue-500 text-white rounded-lg shadow hover:bg-blue-600'>Go to Homepage</a>
        </div>
    </div>"#;

    (
        StatusCode::NOT_FOUND,
        Html(page_response(&headers, "Page Not Found", "", inner_content)),
    )
}

/// Start the HTTP server
///
/// Binds to `server.host:server.port` from the bank's configuration and
/// serves until the process is stopped.
pub async fn start_server(bank: Bank) -> std::io::Result<()> {
    let state = AppState::new(bank);
    let addr = state.config.bind_address();
    let backend_url = state.config.backend.base_url.clone();

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting E-Bank web server on http://{}", addr);
    log::info!("Banking backend: {}", backend_url);
    log::info!("Available routes:");
    log::info!("  - / (Home)");
    log::info!("  - /customers (Customer management)");
    log::info!("  - /accounts (Accounts and history)");
    log::info!("  - /transactions (Credit, debit, transfer)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router).await?;
    log::info!("Server stopped");
    Ok(())
}

// ==================== Tests ====================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use ebank_client::{
        Account, AccountHistory, BankingBackend, ClientError, ClientResult, CreditRequest, Customer, DebitRequest,
        NewCustomer, Operation, OperationType, Timestamp, TransferRequest,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// In-memory backend recording every call
    #[derive(Default)]
    pub struct StubBackend {
        pub fail: bool,
        pub reject_body: Option<&'static str>,
        pub calls: Mutex<Vec<String>>,
    }

    impl StubBackend {
        fn record(&self, call: String) -> ClientResult<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(ClientError::Transport {
                    message: "connection refused".to_string(),
                });
            }
            Ok(())
        }

        fn reject(&self) -> ClientResult<()> {
            match self.reject_body {
                Some(body) => Err(ClientError::Status {
                    status: 400,
                    body: body.to_string(),
                }),
                None => Ok(()),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    pub fn account(id: &str, balance: &str) -> Account {
        Account {
            account_id: id.to_string(),
            account_type: Some("CurrentAccount".to_string()),
            balance: Decimal::from_str(balance).unwrap(),
            status: Some("ACTIVATED".to_string()),
            created_at: None,
            customer: Some(Customer {
                id: 1,
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            }),
        }
    }

    #[async_trait]
    impl BankingBackend for StubBackend {
        async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
            self.record("list_accounts".to_string())?;
            Ok(vec![account("ACC-1", "1234.5"), account("ACC-2", "10")])
        }

        async fn get_account(&self, account_id: &str) -> ClientResult<Account> {
            self.record(format!("get_account {}", account_id))?;
            if account_id == "MISSING" {
                return Err(ClientError::NotFound {
                    resource: account_id.to_string(),
                });
            }
            Ok(account(account_id, "1234.5"))
        }

        async fn account_operations(&self, account_id: &str) -> ClientResult<Vec<Operation>> {
            self.record(format!("operations {}", account_id))?;
            Ok(vec![
                Operation {
                    id: 1,
                    operation_type: OperationType::Credit,
                    amount: Decimal::from(500),
                    description: "Salary".to_string(),
                    operation_date: Timestamp::Text("2025-01-05T10:00:00".to_string()),
                },
                Operation {
                    id: 2,
                    operation_type: OperationType::Debit,
                    amount: Decimal::from(20),
                    description: "Coffee".to_string(),
                    operation_date: Timestamp::Text("2025-01-06T08:00:00".to_string()),
                },
            ])
        }

        async fn account_history(&self, account_id: &str, page: u32, size: u32) -> ClientResult<AccountHistory> {
            self.record(format!("history {} {} {}", account_id, page, size))?;
            let operations = self.account_operations(account_id).await?;
            Ok(AccountHistory {
                account_id: Some(account_id.to_string()),
                balance: None,
                current_page: page,
                total_page: 2,
                page_size: Some(size),
                operations,
            })
        }

        async fn credit(&self, request: &CreditRequest) -> ClientResult<()> {
            self.record(format!("credit {} {}", request.account_id, request.amount))?;
            self.reject()
        }

        async fn debit(&self, request: &DebitRequest) -> ClientResult<()> {
            self.record(format!("debit {} {}", request.account_id, request.amount))?;
            self.reject()
        }

        async fn transfer(&self, request: &TransferRequest) -> ClientResult<()> {
            self.record(format!(
                "transfer {} {} {}",
                request.account_source, request.account_destination, request.amount
            ))?;
            self.reject()
        }

        async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
            self.record("list_customers".to_string())?;
            Ok(vec![Customer {
                id: 1,
                name: "Ada <Lovelace>".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            }])
        }

        async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Option<Customer>> {
            self.record(format!("create_customer {}", customer.name))?;
            if let Some(body) = self.reject_body {
                return Err(ClientError::Status {
                    status: 400,
                    body: body.to_string(),
                });
            }
            Ok(Some(Customer {
                id: 7,
                name: customer.name.clone(),
                email: customer.email.clone(),
                phone: None,
            }))
        }

        async fn delete_customer(&self, customer_id: i64) -> ClientResult<()> {
            self.record(format!("delete_customer {}", customer_id))
        }

        async fn search_customers(&self, keyword: &str) -> ClientResult<Vec<Customer>> {
            self.record(format!("search {}", keyword))?;
            if keyword == "nobody" {
                return Ok(vec![]);
            }
            Ok(vec![Customer {
                id: 1,
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: Some("555-0100".to_string()),
            }])
        }
    }

    pub fn router_with(stub: Arc<StubBackend>) -> Router {
        create_router(AppState::new(Bank::new(Config::default(), stub)))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Issue a request and return status plus body text
    pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_text(response).await)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn htmx_get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("hx-request", "true")
            .body(Body::empty())
            .unwrap()
    }

    pub fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .header("hx-request", "true")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}
