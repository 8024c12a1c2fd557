use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::TransactionKind;

/// Every amount is displayed with this many fractional digits.
pub const DISPLAY_PRECISION: u32 = 2;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormatStyle {
    /// `2024-03-05`
    Short,
    /// `Mar 5, 2024`
    #[default]
    Medium,
    /// `Tuesday, March 5, 2024`
    Long,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    #[serde(default)]
    pub grouping_separator: Option<char>,
    #[serde(default)]
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: None,
            date_format: DateFormatStyle::Medium,
        }
    }
}

impl LocaleConfig {
    /// Separators conventional for a BCP 47 tag such as `de-DE`. Only the
    /// language subtag matters; unknown languages keep the `en-US` layout.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => (',', Some('.')),
            "fr" | "pl" | "cs" | "sv" | "nb" | "fi" | "ru" | "uk" => (',', Some(' ')),
            _ => ('.', None),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            ..Self::default()
        }
    }
}

pub fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "AUD" => Some("A$"),
        _ => None,
    }
}

/// Rounds half away from zero to the display precision. Intermediate sums
/// are never rounded; only values headed for the screen go through here.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_PRECISION);
    rounded
}

pub fn format_number(locale: &LocaleConfig, value: Decimal) -> String {
    let rounded = round_for_display(value.abs());
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };
    let int_part = match locale.grouping_separator {
        Some(separator) => group_digits(&int_part, separator),
        None => int_part,
    };
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{}{}{}", int_part, locale.decimal_separator, frac_part)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let len = digits.chars().count();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn with_symbol(code: &CurrencyCode, body: &str) -> String {
    match symbol_for(code.as_str()) {
        Some(symbol) => format!("{symbol}{body}"),
        None => format!("{} {body}", code.as_str()),
    }
}

/// Formats a totals figure: `$750.00`, `$-4.50`. The sign sits after the
/// symbol, the way the tracker has always shown its balance.
pub fn format_currency_value(amount: Decimal, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let mut body = format_number(locale, amount);
    if round_for_display(amount).is_sign_negative() && !round_for_display(amount).is_zero() {
        body = format!("-{body}");
    }
    with_symbol(code, &body)
}

/// Formats a row amount with an explicit direction prefix: `+$12.50`,
/// `-$4.50`.
pub fn format_signed_amount(
    amount: Decimal,
    kind: TransactionKind,
    code: &CurrencyCode,
    locale: &LocaleConfig,
) -> String {
    let body = format_number(locale, amount);
    format!("{}{}", kind.sign(), with_symbol(code, &body))
}

pub fn format_date(date: NaiveDate, style: DateFormatStyle) -> String {
    match style {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => date.format("%b %-d, %Y").to_string(),
        DateFormatStyle::Long => date.format("%A, %B %-d, %Y").to_string(),
    }
}

/// Reads a display string produced by [`format_currency_value`] or
/// [`format_signed_amount`] back into a number.
pub fn parse_display_amount(text: &str, code: &CurrencyCode, locale: &LocaleConfig) -> Option<Decimal> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.chars().next()? {
        '+' => (false, &trimmed[1..]),
        '-' => (true, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let rest = match symbol_for(code.as_str()) {
        Some(symbol) => rest.strip_prefix(symbol)?,
        None => rest.strip_prefix(code.as_str())?.trim_start(),
    };
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(inner) => (!negative, inner),
        None => (negative, rest),
    };
    let mut normalized: String = rest
        .chars()
        .filter(|ch| Some(*ch) != locale.grouping_separator)
        .collect();
    if locale.decimal_separator != '.' {
        normalized = normalized.replace(locale.decimal_separator, ".");
    }
    let value: Decimal = normalized.parse().ok()?;
    Some(if negative { -value } else { value })
}
