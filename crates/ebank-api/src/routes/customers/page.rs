//! Customer page rendering - Full page endpoints

use crate::{notice_html, AppState};
use ebank_client::Customer;
use ebank_core::{CustomerForm, Notice};
use ebank_utils::{escape_html, format_number};

/// One table row; its id lets HTMX remove it after a delete
pub fn render_customer_row(customer: &Customer) -> String {
    format!(
        r#"<tr id='customer-{id}' class='border-b hover:bg-gray-50'>
            <td class='px-4 py-3 font-mono text-sm'>{id}</td>
            <td class='px-4 py-3'>{name}</td>
            <td class='px-4 py-3 text-gray-600'>{email}</td>
            <td class='px-4 py-3 text-right'>
                <button hx-delete='/customers/{id}' hx-target='closest tr' hx-swap='outerHTML'
                    hx-confirm='Delete customer {name}?'
                    class='px-3 py-1 text-sm bg-red-50 text-red-600 rounded-lg hover:bg-red-100'>Delete</button>
            </td>
        </tr>"#,
        id = customer.id,
        name = escape_html(&customer.name),
        email = escape_html(&customer.email),
    )
}

fn render_customer_table(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "<div class='bg-white rounded-xl shadow-sm p-6 text-gray-500'>No customers yet.</div>".to_string();
    }
    let rows: String = customers.iter().map(render_customer_row).collect();
    format!(
        r#"<p class='text-sm text-gray-500 mb-2'>{} customers</p>
        <div class='bg-white rounded-xl shadow-sm overflow-hidden'>
            <table class='w-full text-left'>
                <thead class='bg-gray-50 text-sm text-gray-500'>
                    <tr><th class='px-4 py-3'>ID</th><th class='px-4 py-3'>Name</th><th class='px-4 py-3'>Email</th><th class='px-4 py-3'></th></tr>
                </thead>
                <tbody>{}</tbody>
            </table>
        </div>"#,
        format_number(customers.len()),
        rows
    )
}

/// New customer form, optionally topped by the outcome of the last submit
pub fn render_customer_form(form: &CustomerForm, notice: Option<&Notice>) -> String {
    format!(
        r#"<div id='customer-form' class='bg-white rounded-xl shadow-sm p-6 max-w-lg'>
            {}
            <form hx-post='/customers' hx-target='#customer-form' hx-swap='outerHTML' method='post' action='/customers' class='space-y-4'>
                <div>
                    <label class='block text-sm font-medium text-gray-700 mb-1' for='name'>Name</label>
                    <input id='name' name='name' type='text' value='{}' placeholder='Enter customer name' required
                        class='w-full border rounded-lg px-3 py-2'>
                </div>
                <div>
                    <label class='block text-sm font-medium text-gray-700 mb-1' for='email'>Email</label>
                    <input id='email' name='email' type='email' value='{}' placeholder='Enter customer email' required
                        class='w-full border rounded-lg px-3 py-2'>
                </div>
                <button type='submit' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>Save</button>
            </form>
        </div>"#,
        notice.map(notice_html).unwrap_or_default(),
        escape_html(&form.name),
        escape_html(&form.email)
    )
}

pub async fn page_customers(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let content = match state.bank.customers().await {
        Ok(customers) => render_customer_table(&customers),
        Err(e) => notice_html(&Notice::error(e.user_message())),
    };

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-6'>
            <h2 class='text-2xl font-bold'>Customers</h2>
            <a href='/customers/new' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>New Customer</a>
        </div>
        {}"#,
        content
    );

    axum::response::Html(crate::page_response(&headers, "Customers", "/customers", &inner_content))
}

pub async fn page_customer_new(headers: axum::http::HeaderMap) -> axum::response::Html<String> {
    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>New Customer</h2></div>{}"#,
        render_customer_form(&CustomerForm::default(), None)
    );
    axum::response::Html(crate::page_response(&headers, "New Customer", "/customers", &inner_content))
}
