//! Utility functions and helpers

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    group_digits(&n.to_string(), ",")
}

/// Insert `separator` between every group of three integer digits.
///
/// Works on the textual form so decimal and sign parts pass through untouched:
/// `group_digits("-1234567.5", ",")` gives `-1,234,567.5`.
pub fn group_digits(number: &str, separator: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], &unsigned[pos..]),
        None => (unsigned, ""),
    };

    let mut grouped = String::new();
    let mut count = 0;
    for c in int_part.chars().rev() {
        if count == 3 {
            grouped.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        grouped.push(c);
        count += 1;
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!("{}{}{}", sign, int_grouped, frac_part)
}

/// Escape text for safe inclusion in HTML bodies and quoted attributes
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
