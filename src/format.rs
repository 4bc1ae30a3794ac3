//! Presentation filters for report values
//!
//! Stateless functions over typed numbers; separators and the currency
//! prefix come from the `[report]` configuration section.

use crate::config::ReportConfig;

/// Separators and prefix used when rendering money
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub prefix: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            prefix: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl From<&ReportConfig> for CurrencyFormat {
    fn from(cfg: &ReportConfig) -> Self {
        let defaults = Self::default();
        Self {
            prefix: cfg.currency_prefix.clone(),
            thousands_separator: single_char(&cfg.thousands_separator)
                .unwrap_or(defaults.thousands_separator),
            decimal_separator: single_char(&cfg.decimal_separator)
                .unwrap_or(defaults.decimal_separator),
        }
    }
}

/// Returns the only character of `s`, or None if `s` is not exactly one char
pub fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Format a money amount with two decimals
///
/// ```
/// use cost_compare::format::{format_currency, CurrencyFormat};
///
/// let fmt = CurrencyFormat::default();
/// assert_eq!(format_currency(1234567.891, &fmt), "R$ 1.234.567,89");
/// ```
pub fn format_currency(value: f64, fmt: &CurrencyFormat) -> String {
    let fixed = format!("{:.2}", value);
    let unsigned = fixed.strip_prefix('-').unwrap_or(&fixed);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!(
        "{} {}{}{}{}",
        fmt.prefix,
        sign_of(&fixed),
        group_thousands(int_part, fmt.thousands_separator),
        fmt.decimal_separator,
        frac_part
    )
}

/// Format a count: truncated toward zero, grouped, no decimals
pub fn format_number(value: f64, thousands_separator: char) -> String {
    let truncated = format!("{:.0}", value.trunc());
    let unsigned = truncated.strip_prefix('-').unwrap_or(&truncated);
    format!("{}{}", sign_of(&truncated), group_thousands(unsigned, thousands_separator))
}

/// Format a percentage with one decimal
pub fn format_percent(value: f64, decimal_separator: char) -> String {
    let fixed = format!("{:.1}", value);
    format!("{}%", fixed.replace('.', &decimal_separator.to_string()))
}

/// Minus sign for a rendered number, dropped when every digit is zero ("-0.00")
fn sign_of(rendered: &str) -> &'static str {
    let nonzero = rendered.chars().any(|c| c.is_ascii_digit() && c != '0');
    if rendered.starts_with('-') && nonzero {
        "-"
    } else {
        ""
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
