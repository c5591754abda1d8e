//! `BankingBackend` over plain HTTP with reqwest

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::types::{
    Account, AccountHistory, CreditRequest, Customer, DebitRequest, NewCustomer, Operation,
    TransferRequest,
};
use crate::{BankingBackend, ClientResult};

/// REST implementation of the backend contract.
///
/// One `reqwest::Client` is shared by every request so connections are pooled.
#[derive(Debug, Clone)]
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RestBackend {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8080`)
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl { url: base_url });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ClientError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn account_path(account_id: &str, suffix: &str) -> String {
        format!("/accounts/{}{}", urlencoding::encode(account_id), suffix)
    }

    /// Send a request and turn non-2xx statuses into errors
    async fn send(&self, request: reqwest::RequestBuilder, resource: &str) -> ClientResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            log::debug!(target: "ebank::client", "{} not found", resource);
            return Err(ClientError::NotFound {
                resource: resource.to_string(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!(target: "ebank::client", "{} failed with status {}: {}", resource, status, body);
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> ClientResult<T> {
        let url = self.url(path);
        log::debug!(target: "ebank::client", "GET {}", url);
        let response = self.send(self.client.get(&url), resource).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B, resource: &str) -> ClientResult<reqwest::Response> {
        let url = self.url(path);
        log::debug!(target: "ebank::client", "POST {}", url);
        self.send(self.client.post(&url).json(body), resource).await
    }
}

#[async_trait]
impl BankingBackend for RestBackend {
    async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
        self.get_json("/accounts", "accounts").await
    }

    async fn get_account(&self, account_id: &str) -> ClientResult<Account> {
        let resource = format!("account {}", account_id);
        self.get_json(&Self::account_path(account_id, ""), &resource).await
    }

    async fn account_operations(&self, account_id: &str) -> ClientResult<Vec<Operation>> {
        let resource = format!("operations of account {}", account_id);
        self.get_json(&Self::account_path(account_id, "/operations"), &resource).await
    }

    async fn account_history(&self, account_id: &str, page: u32, size: u32) -> ClientResult<AccountHistory> {
        let url = self.url(&Self::account_path(account_id, "/pageOperations"));
        log::debug!(target: "ebank::client", "GET {} page={} size={}", url, page, size);
        let request = self.client.get(&url).query(&[("page", page), ("size", size)]);
        let resource = format!("history of account {}", account_id);
        let response = self.send(request, &resource).await?;
        Ok(response.json().await?)
    }

    async fn credit(&self, request: &CreditRequest) -> ClientResult<()> {
        self.post_json("/accounts/credit", request, "credit").await?;
        Ok(())
    }

    async fn debit(&self, request: &DebitRequest) -> ClientResult<()> {
        self.post_json("/accounts/debit", request, "debit").await?;
        Ok(())
    }

    async fn transfer(&self, request: &TransferRequest) -> ClientResult<()> {
        self.post_json("/accounts/transfer", request, "transfer").await?;
        Ok(())
    }

    async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.get_json("/customers", "customers").await
    }

    async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Option<Customer>> {
        let response = self.post_json("/customers", customer, "customer").await?;
        match response.json::<Customer>().await {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                log::debug!(target: "ebank::client", "Customer created, response body ignored: {}", e);
                Ok(None)
            }
        }
    }

    async fn delete_customer(&self, customer_id: i64) -> ClientResult<()> {
        let url = self.url(&format!("/customers/{}", customer_id));
        log::debug!(target: "ebank::client", "DELETE {}", url);
        let resource = format!("customer {}", customer_id);
        self.send(self.client.delete(&url), &resource).await?;
        Ok(())
    }

    async fn search_customers(&self, keyword: &str) -> ClientResult<Vec<Customer>> {
        let url = self.url("/customers/search");
        log::debug!(target: "ebank::client", "GET {} Keyword={}", url, keyword);
        let request = self.client.get(&url).query(&[("Keyword", keyword)]);
        let response = self.send(request, "customer search").await?;
        Ok(response.json().await?)
    }
}
