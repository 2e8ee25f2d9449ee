//! Number formatting for amounts shown in the cart

/// Formats a number with a thousands separator (comma) and the given decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Group integer digits in threes from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Two decimals, no currency: used for editable amounts
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Amount with its currency symbol, e.g. `S/ 1,234.50`
pub fn format_money(currency: &str, value: f64) -> String {
    format!("{} {}", currency, format_number_with_decimals(value, 2))
}
