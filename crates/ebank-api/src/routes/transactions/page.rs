//! Transactions page rendering - Full page endpoints

use crate::{notice_html, AppState};
use axum::extract::Query;
use ebank_client::Account;
use ebank_config::CurrencyConfig;
use ebank_core::format::format_currency;
use ebank_core::{CreditForm, DebitForm, Notice, TransferForm};
use ebank_utils::escape_html;
use std::collections::HashMap;

/// Transaction kind selected in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Credit,
    Debit,
    Transfer,
}

impl Tab {
    /// Unknown or missing values select the credit tab
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("debit") => Tab::Debit,
            Some("transfer") => Tab::Transfer,
            _ => Tab::Credit,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Credit => "credit",
            Tab::Debit => "debit",
            Tab::Transfer => "transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Credit => "Credit",
            Tab::Debit => "Debit",
            Tab::Transfer => "Transfer",
        }
    }
}

/// Values shown in the active form
pub enum PanelForm {
    Credit(CreditForm),
    Debit(DebitForm),
    Transfer(TransferForm),
}

impl PanelForm {
    pub fn empty(tab: Tab) -> Self {
        match tab {
            Tab::Credit => PanelForm::Credit(CreditForm::default()),
            Tab::Debit => PanelForm::Debit(DebitForm::default()),
            Tab::Transfer => PanelForm::Transfer(TransferForm::default()),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            PanelForm::Credit(_) => Tab::Credit,
            PanelForm::Debit(_) => Tab::Debit,
            PanelForm::Transfer(_) => Tab::Transfer,
        }
    }
}

/// Account picker; falls back to a text box when the account list is unavailable
fn account_field(name: &str, label: &str, selected: &str, accounts: Option<&[Account]>, currency: &CurrencyConfig) -> String {
    let control = match accounts {
        Some(accounts) => {
            let mut options = String::from("<option value=''>Select account</option>");
            for account in accounts {
                options.push_str(&format!(
                    "<option value='{}'{}>{} - {} ({})</option>",
                    escape_html(&account.account_id),
                    if account.account_id == selected.trim() { " selected" } else { "" },
                    escape_html(&account.account_id),
                    escape_html(account.type_label()),
                    escape_html(&format_currency(account.balance, currency))
                ));
            }
            format!(
                "<select id='{name}' name='{name}' required class='w-full border rounded-lg px-3 py-2'>{options}</select>"
            )
        }
        None => format!(
            "<input id='{}' name='{}' type='text' value='{}' placeholder='Account ID' required class='w-full border rounded-lg px-3 py-2'>",
            name,
            name,
            escape_html(selected)
        ),
    };
    format!(
        "<div><label class='block text-sm font-medium text-gray-700 mb-1' for='{}'>{}</label>{}</div>",
        name, label, control
    )
}

fn amount_and_description(amount: &str, description: &str, placeholder: &str) -> String {
    format!(
        r#"<div>
            <label class='block text-sm font-medium text-gray-700 mb-1' for='amount'>Amount</label>
            <input id='amount' name='amount' type='number' step='0.01' min='0.01' value='{}' placeholder='0.00' required
                class='w-full border rounded-lg px-3 py-2'>
        </div>
        <div>
            <label class='block text-sm font-medium text-gray-700 mb-1' for='description'>Description</label>
            <input id='description' name='description' type='text' value='{}' placeholder='{}' required
                class='w-full border rounded-lg px-3 py-2'>
        </div>"#,
        escape_html(amount),
        escape_html(description),
        placeholder
    )
}

fn form_fields(form: &PanelForm, accounts: Option<&[Account]>, currency: &CurrencyConfig) -> String {
    match form {
        PanelForm::Credit(f) => format!(
            "{}{}",
            account_field("account_id", "Account", &f.account_id, accounts, currency),
            amount_and_description(&f.amount, &f.description, "Enter transaction description")
        ),
        PanelForm::Debit(f) => format!(
            "{}{}",
            account_field("account_id", "Account", &f.account_id, accounts, currency),
            amount_and_description(&f.amount, &f.description, "Enter transaction description")
        ),
        PanelForm::Transfer(f) => format!(
            "{}{}{}",
            account_field("account_source", "From account", &f.account_source, accounts, currency),
            account_field("account_destination", "To account", &f.account_destination, accounts, currency),
            amount_and_description(&f.amount, &f.description, "Enter transfer description")
        ),
    }
}

/// Tab bar, outcome banner and the active form
pub fn render_transaction_panel(
    form: &PanelForm,
    accounts: Option<&[Account]>,
    notice: Option<&Notice>,
    currency: &CurrencyConfig,
) -> String {
    let active = form.tab();
    let tabs: String = [Tab::Credit, Tab::Debit, Tab::Transfer]
        .iter()
        .map(|tab| {
            let class = if *tab == active {
                "border-blue-600 text-blue-600"
            } else {
                "border-transparent text-gray-500 hover:text-gray-700"
            };
            format!(
                "<a href='/transactions?tab={}' class='px-4 py-2 border-b-2 font-medium {}'>{}</a>",
                tab.slug(),
                class,
                tab.label()
            )
        })
        .collect();

    format!(
        r#"<div id='transaction-panel' class='bg-white rounded-xl shadow-sm p-6 max-w-xl'>
            <div class='flex gap-2 border-b mb-6'>{}</div>
            {}
            <form hx-post='/transactions/{slug}' hx-target='#transaction-panel' hx-swap='outerHTML'
                method='post' action='/transactions/{slug}' class='space-y-4'>
                {}
                <button type='submit' class='w-full px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>{label}</button>
            </form>
        </div>"#,
        tabs,
        notice.map(notice_html).unwrap_or_default(),
        form_fields(form, accounts, currency),
        slug = active.slug(),
        label = active.label(),
    )
}

pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let tab = Tab::from_param(params.get("tab").map(String::as_str));
    let (accounts, load_error) = match state.bank.accounts().await {
        Ok(accounts) => (Some(accounts), None),
        Err(e) => (None, Some(Notice::error(e.user_message()))),
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Transactions</h2></div>{}"#,
        render_transaction_panel(
            &PanelForm::empty(tab),
            accounts.as_deref(),
            load_error.as_ref(),
            &state.config.currency
        )
    );

    axum::response::Html(crate::page_response(&headers, "Transactions", "/transactions", &inner_content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_param() {
        assert_eq!(Tab::from_param(None), Tab::Credit);
        assert_eq!(Tab::from_param(Some("DEBIT")), Tab::Debit);
        assert_eq!(Tab::from_param(Some("transfer")), Tab::Transfer);
        assert_eq!(Tab::from_param(Some("bogus")), Tab::Credit);
    }

    #[test]
    fn test_panel_falls_back_to_text_inputs() {
        let html = render_transaction_panel(
            &PanelForm::empty(Tab::Transfer),
            None,
            None,
            &CurrencyConfig::default(),
        );
        assert!(html.contains("name='account_source' type='text'"));
        assert!(html.contains("hx-post='/transactions/transfer'"));
    }
}
