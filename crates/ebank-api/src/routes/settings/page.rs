//! Settings page rendering - Full page endpoints

use crate::AppState;
use ebank_core::format::format_currency;
use ebank_utils::escape_html;
use rust_decimal::Decimal;

pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;
    let sample = format_currency(Decimal::new(-123456789, 2), &config.currency);

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2>
            <p class='text-sm text-gray-500'>Read-only view of the running configuration.</p></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Server</h3>
            <div class='grid grid-cols-2 gap-4'>
                <div><p class='text-sm text-gray-500'>Host</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Port</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Banking Backend</h3>
            <div class='grid grid-cols-2 gap-4'>
                <div><p class='text-sm text-gray-500'>Base URL</p><p class='font-medium font-mono'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Request timeout</p><p class='font-medium'>{}s</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Display</h3>
            <div class='grid grid-cols-2 gap-4'>
                <div><p class='text-sm text-gray-500'>History page size</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Currency symbol</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Decimal places</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Sample amount</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Logging</h3>
            <div><p class='text-sm text-gray-500'>Level</p><p class='font-medium'>{}</p></div>
        </div>"#,
        escape_html(&config.server.host),
        config.server.port,
        escape_html(&config.backend.base_url),
        config.backend.timeout_secs,
        config.pagination.page_size,
        escape_html(&config.currency.symbol),
        config.currency.decimal_places,
        escape_html(&sample),
        escape_html(&config.logging.level)
    );

    axum::response::Html(crate::page_response(&headers, "Settings", "/settings", &inner_content))
}
