//! Display formatting for money and dates

use ebank_client::Timestamp;
use ebank_config::CurrencyConfig;
use ebank_utils::group_digits;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount the en-US way: `$1,234.50`, `-$12.00`.
pub fn format_currency(amount: Decimal, currency: &CurrencyConfig) -> String {
    let mut magnitude = amount
        .abs()
        .round_dp_with_strategy(currency.decimal_places, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(currency.decimal_places);

    let sign = if amount.is_sign_negative() && !magnitude.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{}{}{}",
        sign,
        currency.symbol,
        group_digits(&magnitude.to_string(), &currency.thousands_separator)
    )
}

/// Format a backend timestamp as `Jan 5, 2025`; unparseable values are shown raw.
pub fn format_date(timestamp: &Timestamp) -> String {
    match timestamp.to_naive() {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => timestamp.raw(),
    }
}

/// Like [`format_date`] with the time of day appended.
pub fn format_datetime(timestamp: &Timestamp) -> String {
    match timestamp.to_naive() {
        Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        None => timestamp.raw(),
    }
}
