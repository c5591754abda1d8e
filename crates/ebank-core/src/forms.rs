//! Submitted forms and their validation
//!
//! Every field arrives as text exactly as the browser posted it. `validate`
//! turns a form into the backend request or a `ValidationError` carrying the
//! message shown next to the form.

use ebank_client::{CreditRequest, DebitRequest, NewCustomer, TransferRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const MSG_POSITIVE_AMOUNT: &str = "Amount must be a positive number";
pub const MSG_SAME_ACCOUNT: &str = "Source and destination accounts cannot be the same";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";

fn require(fields: &[&str]) -> CoreResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(CoreError::validation(MSG_REQUIRED_FIELDS));
    }
    Ok(())
}

fn parse_amount(raw: &str) -> CoreResult<Decimal> {
    match Decimal::from_str(raw.trim()) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(CoreError::validation(MSG_POSITIVE_AMOUNT)),
    }
}

/// New customer form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl CustomerForm {
    pub fn validate(&self) -> CoreResult<NewCustomer> {
        require(&[&self.name, &self.email])?;
        if !self.email.contains('@') {
            return Err(CoreError::validation(MSG_INVALID_EMAIL));
        }
        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

/// Credit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditForm {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

impl CreditForm {
    pub fn validate(&self) -> CoreResult<CreditRequest> {
        require(&[&self.account_id, &self.amount, &self.description])?;
        Ok(CreditRequest {
            account_id: self.account_id.trim().to_string(),
            amount: parse_amount(&self.amount)?,
            description: self.description.trim().to_string(),
        })
    }
}

/// Debit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebitForm {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

impl DebitForm {
    pub fn validate(&self) -> CoreResult<DebitRequest> {
        require(&[&self.account_id, &self.amount, &self.description])?;
        Ok(DebitRequest {
            account_id: self.account_id.trim().to_string(),
            amount: parse_amount(&self.amount)?,
            description: self.description.trim().to_string(),
        })
    }
}

/// Transfer form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferForm {
    #[serde(default)]
    pub account_source: String,
    #[serde(default)]
    pub account_destination: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

impl TransferForm {
    pub fn validate(&self) -> CoreResult<TransferRequest> {
        require(&[
            &self.account_source,
            &self.account_destination,
            &self.amount,
            &self.description,
        ])?;
        let source = self.account_source.trim();
        let destination = self.account_destination.trim();
        if source == destination {
            return Err(CoreError::validation(MSG_SAME_ACCOUNT));
        }
        Ok(TransferRequest {
            account_source: source.to_string(),
            account_destination: destination.to_string(),
            amount: parse_amount(&self.amount)?,
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit(account_id: &str, amount: &str, description: &str) -> CreditForm {
        CreditForm {
            account_id: account_id.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_credit_form_valid() {
        let req = credit(" ACC-1 ", "250", "Salary").validate().unwrap();
        assert_eq!(req.account_id, "ACC-1");
        assert_eq!(req.amount, Decimal::from(250));
        assert_eq!(req.description, "Salary");
    }

    #[test]
    fn test_missing_field_message() {
        let err = credit("ACC-1", "", "Salary").validate().unwrap_err();
        assert_eq!(err.to_string(), MSG_REQUIRED_FIELDS);
        let err = credit("ACC-1", "10", "   ").validate().unwrap_err();
        assert_eq!(err.to_string(), MSG_REQUIRED_FIELDS);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in ["0", "-5", "abc", "1e"] {
            let err = credit("ACC-1", amount, "x").validate().unwrap_err();
            assert_eq!(err.to_string(), MSG_POSITIVE_AMOUNT, "amount {amount}");
        }
        assert!(credit("ACC-1", "0.01", "x").validate().is_ok());
    }

    #[test]
    fn test_debit_form() {
        let form = DebitForm {
            account_id: "ACC-2".to_string(),
            amount: "12.50".to_string(),
            description: "Coffee".to_string(),
        };
        let req = form.validate().unwrap();
        assert_eq!(req.amount.to_string(), "12.50");
    }

    #[test]
    fn test_transfer_same_account_rejected() {
        let form = TransferForm {
            account_source: "ACC-1".to_string(),
            account_destination: "ACC-1".to_string(),
            amount: "10".to_string(),
            description: "Self".to_string(),
        };
        assert_eq!(form.validate().unwrap_err().to_string(), MSG_SAME_ACCOUNT);
    }

    #[test]
    fn test_transfer_missing_destination() {
        let form = TransferForm {
            account_source: "ACC-1".to_string(),
            amount: "10".to_string(),
            description: "Rent".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err().to_string(), MSG_REQUIRED_FIELDS);
    }

    #[test]
    fn test_customer_form() {
        let ok = CustomerForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(ok.validate().unwrap().email, "ada@example.com");

        let missing = CustomerForm {
            name: "Ada".to_string(),
            email: String::new(),
        };
        assert_eq!(missing.validate().unwrap_err().to_string(), MSG_REQUIRED_FIELDS);

        let bad = CustomerForm {
            name: "Ada".to_string(),
            email: "ada.example.com".to_string(),
        };
        assert_eq!(bad.validate().unwrap_err().to_string(), MSG_INVALID_EMAIL);
    }
}
