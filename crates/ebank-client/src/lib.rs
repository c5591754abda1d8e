//! Client for the E-Bank REST backend
//!
//! The backend owns customers, accounts and the ledger. This crate only
//! knows its HTTP contract: the wire types in [`types`] and one method per
//! endpoint on [`BankingBackend`].

use async_trait::async_trait;
use std::sync::Arc;

pub mod error;
pub mod rest;
pub mod types;

pub use error::ClientError;
pub use rest::RestBackend;

// Re-export commonly used types
pub use types::{
    Account, AccountHistory, CreditRequest, Customer, DebitRequest, NewCustomer, Operation,
    OperationType, Timestamp, TransferRequest,
};

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

// ==================== Backend Trait ====================

/// Backend reference type
pub type BackendRef = Arc<dyn BankingBackend>;

/// The banking backend's REST contract
#[async_trait]
pub trait BankingBackend: Send + Sync {
    /// `GET /accounts`
    async fn list_accounts(&self) -> ClientResult<Vec<Account>>;

    /// `GET /accounts/{id}`
    async fn get_account(&self, account_id: &str) -> ClientResult<Account>;

    /// `GET /accounts/{id}/operations`
    async fn account_operations(&self, account_id: &str) -> ClientResult<Vec<Operation>>;

    /// `GET /accounts/{id}/pageOperations?page&size`
    async fn account_history(&self, account_id: &str, page: u32, size: u32) -> ClientResult<AccountHistory>;

    /// `POST /accounts/credit`
    async fn credit(&self, request: &CreditRequest) -> ClientResult<()>;

    /// `POST /accounts/debit`
    async fn debit(&self, request: &DebitRequest) -> ClientResult<()>;

    /// `POST /accounts/transfer`
    async fn transfer(&self, request: &TransferRequest) -> ClientResult<()>;

    /// `GET /customers`
    async fn list_customers(&self) -> ClientResult<Vec<Customer>>;

    /// `POST /customers`; the created customer when the backend echoes it back
    async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Option<Customer>>;

    /// `DELETE /customers/{id}`
    async fn delete_customer(&self, customer_id: i64) -> ClientResult<()>;

    /// `GET /customers/search?Keyword=`
    async fn search_customers(&self, keyword: &str) -> ClientResult<Vec<Customer>>;
}
