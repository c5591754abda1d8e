//! View models shared by the pages and the JSON API

use ebank_client::{Account, AccountHistory, Operation};
use serde::{Deserialize, Serialize};

/// One page of an account's history, with pagination state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub account_id: String,
    /// Zero-based page index
    pub current_page: u32,
    pub total_pages: u32,
    pub operations: Vec<Operation>,
}

impl HistoryPage {
    pub fn from_history(account_id: &str, history: AccountHistory) -> Self {
        Self {
            account_id: history.account_id.unwrap_or_else(|| account_id.to_string()),
            current_page: history.current_page,
            total_pages: history.total_page,
            operations: history.operations,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.next_page().is_some()
    }

    /// One-based page number for display
    pub fn display_page(&self) -> u32 {
        self.current_page.saturating_add(1)
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.current_page
            .checked_add(1)
            .filter(|next| *next < self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operations on this page whose description contains `query`, ignoring case.
    pub fn matching(&self, query: &str) -> Vec<&Operation> {
        let query = query.trim().to_lowercase();
        self.operations
            .iter()
            .filter(|op| query.is_empty() || op.description.to_lowercase().contains(&query))
            .collect()
    }
}

/// An account together with a page of its history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountOverview {
    pub account: Account,
    pub history: HistoryPage,
}

/// Outcome banner shown above a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebank_client::{OperationType, Timestamp};
    use rust_decimal::Decimal;

    fn op(id: i64, description: &str) -> Operation {
        Operation {
            id,
            operation_type: OperationType::Credit,
            amount: Decimal::from(10),
            description: description.to_string(),
            operation_date: Timestamp::Text("2025-01-05".to_string()),
        }
    }

    fn page(current: u32, total: u32) -> HistoryPage {
        HistoryPage {
            account_id: "ACC-1".to_string(),
            current_page: current,
            total_pages: total,
            operations: vec![],
        }
    }

    #[test]
    fn test_first_page_flags() {
        let p = page(0, 3);
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.display_page(), 1);
        assert_eq!(p.previous_page(), None);
        assert_eq!(p.next_page(), Some(1));
    }

    #[test]
    fn test_middle_page_flags() {
        let p = page(1, 3);
        assert!(p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.previous_page(), Some(0));
    }

    #[test]
    fn test_last_page_flags() {
        let p = page(2, 3);
        assert!(p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.display_page(), 3);
    }

    #[test]
    fn test_zero_pages() {
        let p = page(0, 0);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert!(p.is_empty());
    }

    #[test]
    fn test_last_representable_page() {
        let p = page(u32::MAX, u32::MAX);
        assert!(!p.has_next());
        assert_eq!(p.next_page(), None);
        assert_eq!(p.display_page(), u32::MAX);
        assert_eq!(p.previous_page(), Some(u32::MAX - 1));
    }

    #[test]
    fn test_from_history_keeps_requested_id_when_missing() {
        let history = AccountHistory {
            account_id: None,
            balance: None,
            current_page: 0,
            total_page: 1,
            page_size: Some(4),
            operations: vec![op(1, "Salary")],
        };
        let p = HistoryPage::from_history("ACC-7", history);
        assert_eq!(p.account_id, "ACC-7");
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn test_matching_filters_by_description() {
        let mut p = page(0, 1);
        p.operations = vec![op(1, "Salary January"), op(2, "Coffee"), op(3, "salary bonus")];
        let ids: Vec<i64> = p.matching("SALARY").iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(p.matching("  ").len(), 3);
    }

    #[test]
    fn test_notice() {
        assert!(Notice::success("ok").is_success());
        assert_eq!(Notice::error("bad").kind, NoticeKind::Error);
    }
}
