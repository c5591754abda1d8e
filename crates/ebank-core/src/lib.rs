//! Banking operations and business rules
//!
//! [`Bank`] is the single entry point used by the web layer. It validates
//! submitted forms, calls the backend through a [`BackendRef`] and turns
//! backend failures into the messages the user sees.

pub mod error;
pub mod format;
pub mod forms;
pub mod models;

use ebank_client::{Account, BackendRef, ClientError, Customer, Operation, RestBackend};
use ebank_config::Config;
use std::sync::Arc;
use std::time::Duration;

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use forms::{CreditForm, CustomerForm, DebitForm, TransferForm};
pub use models::{AccountOverview, HistoryPage, Notice, NoticeKind};

use error::{load_reason, submission_reason};

pub const MSG_ENTER_ACCOUNT_ID: &str = "Please enter an account ID";
pub const MSG_FETCH_ACCOUNT_FAILED: &str = "Failed to fetch account";
pub const MSG_CUSTOMER_CREATED: &str = "Customer created successfully!";
pub const MSG_CUSTOMER_CREATE_FAILED: &str = "Failed to create customer.";
pub const MSG_CUSTOMER_DELETE_FAILED: &str = "Failed to delete customer.";

/// Banking facade over the backend
pub struct Bank {
    config: Config,
    backend: BackendRef,
    logger: DefaultErrorLogger,
}

impl Bank {
    pub fn new(config: Config, backend: BackendRef) -> Self {
        Self {
            config,
            backend,
            logger: DefaultErrorLogger,
        }
    }

    /// Build a bank talking to the REST backend named in `config`
    pub fn from_config(config: Config) -> CoreResult<Self> {
        let backend = RestBackend::new(
            &config.backend.base_url,
            Duration::from_secs(config.backend.timeout_secs),
        )
        .map_err(|e| CoreError::ConfigError {
            message: e.to_string(),
        })?;
        Ok(Self::new(config, Arc::new(backend)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn page_size(&self) -> u32 {
        self.config.pagination.page_size
    }

    fn fail(&self, error: CoreError, context: ErrorContext) -> CoreError {
        self.logger.log_error(&error, &context);
        error
    }

    fn load_failed(&self, what: &str, fallback: &str, source: ClientError) -> CoreError {
        let message = format!("Failed to load {}: {}", what, load_reason(&source, fallback));
        self.fail(CoreError::backend(message, source), ErrorContext::new(format!("load {}", what)))
    }

    // ==================== Customers ====================

    pub async fn customers(&self) -> CoreResult<Vec<Customer>> {
        self.backend
            .list_customers()
            .await
            .map_err(|e| self.load_failed("customers", "Failed to fetch customers", e))
    }

    /// Customers matching `keyword`; a blank keyword matches nothing.
    pub async fn search_customers(&self, keyword: &str) -> CoreResult<Vec<Customer>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(vec![]);
        }
        self.backend.search_customers(keyword).await.map_err(|e| {
            let message = format!("Error fetching data: {}", load_reason(&e, "Failed to fetch customers"));
            self.fail(
                CoreError::backend(message, e),
                ErrorContext::new("search customers").with_data("keyword", serde_json::json!(keyword)),
            )
        })
    }

    /// Create a customer; `None` when the backend accepted it without echoing it back.
    pub async fn create_customer(&self, form: &CustomerForm) -> CoreResult<Option<Customer>> {
        let request = form.validate()?;
        let customer = self.backend.create_customer(&request).await.map_err(|e| {
            self.fail(
                CoreError::backend(MSG_CUSTOMER_CREATE_FAILED, e),
                ErrorContext::new("create customer").with_data("email", serde_json::json!(request.email)),
            )
        })?;
        match &customer {
            Some(created) => log::info!(target: "ebank::bank", "Created customer {} ({})", created.id, created.email),
            None => log::info!(target: "ebank::bank", "Created customer {}", request.email),
        }
        Ok(customer)
    }

    pub async fn delete_customer(&self, id: i64) -> CoreResult<()> {
        self.backend.delete_customer(id).await.map_err(|e| {
            self.fail(
                CoreError::backend(MSG_CUSTOMER_DELETE_FAILED, e),
                ErrorContext::new("delete customer").with_data("id", serde_json::json!(id)),
            )
        })?;
        log::info!(target: "ebank::bank", "Deleted customer {}", id);
        Ok(())
    }

    // ==================== Accounts ====================

    pub async fn accounts(&self) -> CoreResult<Vec<Account>> {
        self.backend
            .list_accounts()
            .await
            .map_err(|e| self.load_failed("accounts", "Failed to fetch accounts", e))
    }

    /// Look an account up by the id the user typed.
    pub async fn find_account(&self, raw_id: &str) -> CoreResult<Account> {
        let id = raw_id.trim();
        if id.is_empty() {
            return Err(CoreError::validation(MSG_ENTER_ACCOUNT_ID));
        }
        let context = || ErrorContext::new("find account").with_data("account_id", serde_json::json!(id));
        match self.backend.get_account(id).await {
            Ok(account) => Ok(account),
            Err(e) if e.is_not_found() => Err(self.fail(
                CoreError::AccountNotFound { id: id.to_string() },
                context(),
            )),
            Err(e) => Err(self.fail(CoreError::backend(MSG_FETCH_ACCOUNT_FAILED, e), context())),
        }
    }

    /// Every operation on the account, unpaged
    pub async fn account_operations(&self, id: &str) -> CoreResult<Vec<Operation>> {
        self.backend
            .account_operations(id)
            .await
            .map_err(|e| self.load_failed("operations", "Failed to fetch operations", e))
    }

    /// Page `page` (zero-based) of the account's history
    pub async fn account_history(&self, id: &str, page: u32) -> CoreResult<HistoryPage> {
        let history = self
            .backend
            .account_history(id, page, self.page_size())
            .await
            .map_err(|e| self.load_failed("account history", "Failed to fetch account history", e))?;
        Ok(HistoryPage::from_history(id, history))
    }

    /// Account details plus one page of history
    pub async fn account_overview(&self, raw_id: &str, page: u32) -> CoreResult<AccountOverview> {
        let account = self.find_account(raw_id).await?;
        let history = self.account_history(&account.account_id, page).await?;
        Ok(AccountOverview { account, history })
    }

    // ==================== Transactions ====================

    /// Credit an account; returns the success message.
    pub async fn credit(&self, form: &CreditForm) -> CoreResult<String> {
        let request = form.validate()?;
        if let Err(e) = self.backend.credit(&request).await {
            let message = format!("Credit failed: {}", submission_reason(&e, "Credit transaction failed"));
            return Err(self.fail(
                CoreError::backend(message, e),
                ErrorContext::new("credit").with_data("account_id", serde_json::json!(request.account_id)),
            ));
        }
        log::info!(target: "ebank::bank", "Credited {} to {}", request.amount, request.account_id);
        Ok(format!(
            "Successfully credited {}{} to account {}",
            self.config.currency.symbol,
            form.amount.trim(),
            request.account_id
        ))
    }

    /// Debit an account; returns the success message.
    pub async fn debit(&self, form: &DebitForm) -> CoreResult<String> {
        let request = form.validate()?;
        if let Err(e) = self.backend.debit(&request).await {
            let message = format!("Debit failed: {}", submission_reason(&e, "Debit transaction failed"));
            return Err(self.fail(
                CoreError::backend(message, e),
                ErrorContext::new("debit").with_data("account_id", serde_json::json!(request.account_id)),
            ));
        }
        log::info!(target: "ebank::bank", "Debited {} from {}", request.amount, request.account_id);
        Ok(format!(
            "Successfully debited {}{} from account {}",
            self.config.currency.symbol,
            form.amount.trim(),
            request.account_id
        ))
    }

    /// Move money between two accounts; returns the success message.
    pub async fn transfer(&self, form: &TransferForm) -> CoreResult<String> {
        let request = form.validate()?;
        if let Err(e) = self.backend.transfer(&request).await {
            let message = format!("Transfer failed: {}", submission_reason(&e, "Transfer failed"));
            return Err(self.fail(
                CoreError::backend(message, e),
                ErrorContext::new("transfer")
                    .with_data("source", serde_json::json!(request.account_source))
                    .with_data("destination", serde_json::json!(request.account_destination)),
            ));
        }
        log::info!(
            target: "ebank::bank",
            "Transferred {} from {} to {}",
            request.amount,
            request.account_source,
            request.account_destination
        );
        Ok(format!(
            "Successfully transferred {}{} from {} to {}",
            self.config.currency.symbol,
            form.amount.trim(),
            request.account_source,
            request.account_destination
        ))
    }
}

// ==================== Tests ====================
