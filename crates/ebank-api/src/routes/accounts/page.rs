//! Account page rendering - Full page endpoints and shared fragments

use crate::{notice_html, AppState};
use ebank_client::{Account, Operation};
use ebank_config::CurrencyConfig;
use ebank_core::format::{format_currency, format_date, format_datetime};
use ebank_core::{AccountOverview, CoreError, Notice};
use ebank_utils::escape_html;

fn account_card(account: &Account, currency: &CurrencyConfig) -> String {
    let owner = account
        .customer
        .as_ref()
        .map(|c| escape_html(&c.name))
        .unwrap_or_else(|| "-".to_string());
    let opened = account
        .created_at
        .as_ref()
        .map(format_date)
        .map(|d| format!("<p class='text-xs text-gray-400 mt-1'>Opened {}</p>", escape_html(&d)))
        .unwrap_or_default();

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-5 cursor-pointer hover:shadow-md transition border border-transparent hover:border-blue-200'
            hx-get='/accounts/{}/history?page=0' hx-target='#account-detail'>
            <div class='flex items-center justify-between mb-2'>
                <span class='text-sm font-medium text-blue-600'>{}</span>
                <span class='text-xs text-gray-500'>{}</span>
            </div>
            <p class='font-mono text-sm text-gray-700 truncate'>{}</p>
            <p class='text-2xl font-bold mt-2'>{}</p>
            <p class='text-sm text-gray-500 mt-1'>{}</p>
            {}
        </div>"#,
        urlencoding::encode(&account.account_id),
        escape_html(account.type_label()),
        escape_html(account.status.as_deref().unwrap_or("")),
        escape_html(&account.account_id),
        escape_html(&format_currency(account.balance, currency)),
        owner,
        opened
    )
}

/// Card grid for the account list
pub fn render_account_cards(accounts: &[Account], currency: &CurrencyConfig) -> String {
    if accounts.is_empty() {
        return "<p class='text-gray-500'>No accounts found.</p>".to_string();
    }
    let cards: String = accounts.iter().map(|a| account_card(a, currency)).collect();
    format!("<div class='grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4'>{}</div>", cards)
}

/// Load failure for the account list, with a way to try again
pub fn render_accounts_error(error: &CoreError) -> String {
    format!(
        r#"{}<a href='/accounts' hx-get='/accounts/list' hx-target='#account-list'
            class='inline-block px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>Retry</a>"#,
        notice_html(&Notice::error(error.user_message()))
    )
}

/// One history line: credits green with `+`, debits red and unsigned
pub fn render_operation_row(operation: &Operation, currency: &CurrencyConfig) -> String {
    let (sign, color, badge) = if operation.is_credit() {
        ("+", "text-green-600", "bg-green-100 text-green-700")
    } else {
        ("", "text-red-600", "bg-red-100 text-red-700")
    };
    format!(
        r#"<div class='flex items-center justify-between py-3 border-b last:border-0'>
            <div>
                <p class='font-medium'>{}</p>
                <p class='text-sm text-gray-500'><span class='px-2 py-0.5 rounded text-xs {}'>{}</span> {}</p>
            </div>
            <span class='font-semibold {}'>{}{}</span>
        </div>"#,
        escape_html(&operation.description),
        badge,
        operation.operation_type,
        escape_html(&format_datetime(&operation.operation_date)),
        color,
        sign,
        escape_html(&format_currency(operation.amount.abs(), currency))
    )
}

/// Selected account header, history page and pagination footer
pub fn render_account_detail(overview: &AccountOverview, query: &str, currency: &CurrencyConfig) -> String {
    let account = &overview.account;
    let history = &overview.history;
    let id = urlencoding::encode(&account.account_id).into_owned();
    let query_suffix = if query.trim().is_empty() {
        String::new()
    } else {
        format!("&amp;q={}", urlencoding::encode(query.trim()))
    };

    let matching = history.matching(query);
    let operations = if matching.is_empty() {
        "<p class='text-gray-500 py-6 text-center'>No transactions found</p>".to_string()
    } else {
        matching.iter().map(|op| render_operation_row(op, currency)).collect()
    };

    let nav_button = |label: &str, target: Option<u32>| match target {
        Some(page) => format!(
            r#"<button hx-get='/accounts/{}/history?page={}{}' hx-target='#account-detail'
                class='px-3 py-1 rounded-lg border hover:bg-gray-50'>{}</button>"#,
            id, page, query_suffix, label
        ),
        None => format!(
            "<button disabled class='px-3 py-1 rounded-lg border text-gray-300 cursor-not-allowed'>{}</button>",
            label
        ),
    };

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-6'>
            <div class='flex items-start justify-between mb-6'>
                <div>
                    <p class='text-sm text-blue-600 font-medium'>{}</p>
                    <h3 class='font-mono text-lg font-semibold'>{}</h3>
                </div>
                <div class='text-right'>
                    <p class='text-sm text-gray-500'>Balance</p>
                    <p class='text-2xl font-bold'>{}</p>
                </div>
            </div>
            <input type='search' name='q' value='{}' placeholder='Search transactions...'
                hx-get='/accounts/{}/history?page={}' hx-trigger='keyup changed delay:300ms, search'
                hx-target='#account-detail'
                class='w-full border rounded-lg px-3 py-2 mb-4'>
            <div>{}</div>
            <div class='flex items-center justify-between mt-6 pt-6 border-t border-gray-100'>
                <p class='text-sm text-gray-600'>Showing page {} of {} ({} transactions)</p>
                <div class='flex gap-2'>{}{}</div>
            </div>
            <div class='mt-4'>
                <button hx-get='/accounts/{}/operations' hx-target='#all-operations'
                    class='text-sm text-blue-600 hover:underline'>Show all operations</button>
                <div id='all-operations' class='mt-2'></div>
            </div>
        </div>"#,
        escape_html(account.type_label()),
        escape_html(&account.account_id),
        escape_html(&format_currency(account.balance, currency)),
        escape_html(query),
        id,
        history.current_page,
        operations,
        history.display_page(),
        history.total_pages,
        history.operations.len(),
        nav_button("Previous", history.previous_page()),
        nav_button("Next", history.next_page()),
        id
    )
}

pub async fn page_accounts(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let list = match state.bank.accounts().await {
        Ok(accounts) => render_account_cards(&accounts, &state.config.currency),
        Err(e) => render_accounts_error(&e),
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Accounts</h2></div>
        <form hx-get='/accounts/lookup' hx-target='#account-detail' class='flex gap-2 mb-6'>
            <input type='text' name='account_id' placeholder='Enter account ID (e.g., ACC123456)'
                class='flex-1 border rounded-lg px-3 py-2'>
            <button type='submit' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>Search</button>
        </form>
        <div class='grid grid-cols-1 xl:grid-cols-2 gap-6'>
            <div id='account-list'>{}</div>
            <div id='account-detail'>
                <div class='bg-white rounded-xl shadow-sm p-6 text-gray-500 text-center'>
                    Select an account or search by Account ID to view its history
                </div>
            </div>
        </div>"#,
        list
    );

    axum::response::Html(crate::page_response(&headers, "Accounts", "/accounts", &inner_content))
}
