//! Wire types exchanged with the banking backend
//!
//! Field names follow the backend's camelCase JSON. Nothing here is validated
//! beyond its shape; the backend owns every invariant.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bank customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Bank account as listed by `/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Some backend versions send `id` instead of `accountId`
    #[serde(alias = "id")]
    pub account_id: String,
    /// Account kind, e.g. "CurrentAccount" or "SavingAccount"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, rename = "customerDTO", skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl Account {
    /// Label shown for the account kind
    pub fn type_label(&self) -> &str {
        match self.account_type.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "Account",
        }
    }
}

/// Operation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Credit,
    Debit,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Credit => write!(f, "CREDIT"),
            OperationType::Debit => write!(f, "DEBIT"),
        }
    }
}

/// A single credit or debit against an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: i64,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub operation_date: Timestamp,
}

impl Operation {
    pub fn is_credit(&self) -> bool {
        self.operation_type == OperationType::Credit
    }
}

/// One page of an account's operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default, alias = "totalPages")]
    pub total_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, rename = "accountOperationDTOS")]
    pub operations: Vec<Operation>,
}

/// Backend timestamps arrive either as ISO-8601 text or as epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Best-effort conversion to a wall-clock datetime
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        match self {
            Timestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms).map(|d| d.naive_utc()),
            Timestamp::Text(text) => {
                let text = text.trim();
                if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                    return Some(dt.naive_local());
                }
                for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
                    if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
                        return Some(dt);
                    }
                }
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            }
        }
    }

    /// Raw textual form, used when the value cannot be parsed
    pub fn raw(&self) -> String {
        match self {
            Timestamp::Millis(ms) => ms.to_string(),
            Timestamp::Text(text) => text.clone(),
        }
    }
}

/// Body of `POST /customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Body of `POST /accounts/credit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    pub account_id: String,
    pub amount: Decimal,
    pub description: String,
}

/// Body of `POST /accounts/debit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitRequest {
    pub account_id: String,
    pub amount: Decimal,
    pub description: String,
}

/// Body of `POST /accounts/transfer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub account_source: String,
    pub account_destination: String,
    pub amount: Decimal,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::str::FromStr;

    #[test]
    fn test_account_accepts_id_alias() {
        let account: Account = serde_json::from_value(serde_json::json!({
            "id": "ACC-9",
            "type": "SavingAccount",
            "balance": 1520.75
        }))
        .unwrap();
        assert_eq!(account.account_id, "ACC-9");
        assert_eq!(account.type_label(), "SavingAccount");
        assert_eq!(account.balance, Decimal::from_str("1520.75").unwrap());
    }

    #[test]
    fn test_account_type_label_fallback() {
        let account: Account =
            serde_json::from_value(serde_json::json!({"accountId": "A1", "balance": 0})).unwrap();
        assert_eq!(account.type_label(), "Account");
    }

    #[test]
    fn test_history_page_shape() {
        let history: AccountHistory = serde_json::from_value(serde_json::json!({
            "accountId": "A1",
            "balance": 250.0,
            "currentPage": 1,
            "totalPages": 3,
            "pageSize": 4,
            "accountOperationDTOS": [
                {"id": 7, "type": "DEBIT", "amount": 20, "description": "Coffee", "operationDate": "2025-01-05T10:20:30.000+00:00"}
            ]
        }))
        .unwrap();
        assert_eq!(history.current_page, 1);
        assert_eq!(history.total_page, 3);
        assert_eq!(history.operations.len(), 1);
        assert!(!history.operations[0].is_credit());
    }

    #[test]
    fn test_timestamp_forms() {
        let iso = Timestamp::Text("2025-01-05T10:20:30.000+00:00".to_string());
        let dt = iso.to_naive().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2025, 1, 5, 10));

        let local = Timestamp::Text("2024-11-30T08:00:00".to_string());
        assert_eq!(local.to_naive().unwrap().day(), 30);

        let date_only = Timestamp::Text("2024-02-29".to_string());
        assert_eq!(date_only.to_naive().unwrap().month(), 2);

        let millis = Timestamp::Millis(1_736_072_430_000);
        assert_eq!(millis.to_naive().unwrap().year(), 2025);

        let junk = Timestamp::Text("yesterday".to_string());
        assert!(junk.to_naive().is_none());
        assert_eq!(junk.raw(), "yesterday");
    }

    #[test]
    fn test_transfer_request_wire_names() {
        let req = TransferRequest {
            account_source: "A1".to_string(),
            account_destination: "A2".to_string(),
            amount: Decimal::from_str("12.5").unwrap(),
            description: "Rent".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["accountSource"], "A1");
        assert_eq!(json["accountDestination"], "A2");
        assert_eq!(json["amount"], serde_json::json!(12.5));
        assert_eq!(json["description"], "Rent");
    }
}
