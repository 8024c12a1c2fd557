use chrono::NaiveDate;
use expense_tracker::currency::{
    format_currency_value, format_date, format_signed_amount, parse_display_amount, CurrencyCode,
    DateFormatStyle, LocaleConfig,
};
use expense_tracker::domain::TransactionKind;
use rust_decimal::Decimal;

#[test]
fn formats_currency_with_locale() {
    let locale = LocaleConfig {
        decimal_separator: ',',
        grouping_separator: Some(' '),
        ..LocaleConfig::default()
    };
    let code = CurrencyCode::new("EUR");
    assert_eq!(
        format_currency_value(Decimal::new(-123_450, 2), &code, &locale),
        "€-1 234,50"
    );
    assert_eq!(
        format_signed_amount(Decimal::new(123_450, 2), TransactionKind::Income, &code, &locale),
        "+€1 234,50"
    );
    assert_eq!(
        parse_display_amount("€-1 234,50", &code, &locale),
        Some(Decimal::new(-123_450, 2))
    );
}

#[test]
fn amounts_always_show_two_decimals() {
    let locale = LocaleConfig::default();
    let usd = CurrencyCode::default();
    assert_eq!(format_currency_value(Decimal::from(5), &usd, &locale), "$5.00");
    assert_eq!(format_currency_value(Decimal::new(12_345, 3), &usd, &locale), "$12.35");
    assert_eq!(
        format_signed_amount(Decimal::new(1, 3), TransactionKind::Expense, &usd, &locale),
        "-$0.00"
    );
}

#[test]
fn medium_dates_match_the_entry_form() {
    let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(format_date(date, DateFormatStyle::Medium), "Dec 31, 2025");
    assert_eq!(format_date(date, DateFormatStyle::Short), "2025-12-31");
}

#[test]
fn parse_rejects_foreign_symbols() {
    let locale = LocaleConfig::default();
    assert_eq!(parse_display_amount("€4.50", &CurrencyCode::default(), &locale), None);
    assert_eq!(parse_display_amount("", &CurrencyCode::default(), &locale), None);
}
