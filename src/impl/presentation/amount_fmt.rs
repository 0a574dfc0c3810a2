use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a money amount with currency symbol, correct number of decimal
/// places and thousands separators. Negative dues keep a single leading
/// minus sign.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    let decimal_places = decimal_places(currency);
    if decimal_places == 0 {
        let amount_rounded = (magnitude.round() as i64).to_formatted_string(&Locale::en);
        return format!("{}{} {}", sign, amount_rounded, currency.symbol());
    }
    let amount_integer_part = (magnitude.trunc() as i64).to_formatted_string(&Locale::en);
    let amount_fractional_part = format!("{:.decimal_places$}", magnitude.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}{}.{:0decimal_places$} {}",
        sign,
        amount_integer_part,
        amount_fractional_part,
        currency.symbol(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_separators_and_exponent() {
        assert_eq!(format_amount(1200.5, Currency::USD), "1,200.50 $");
        assert_eq!(format_amount(0.0, Currency::USD), "0.00 $");
    }

    #[test]
    fn negative_amounts_keep_one_leading_sign() {
        assert_eq!(format_amount(-30.0, Currency::USD), "-30.00 $");
        assert_eq!(format_amount(-0.5, Currency::USD), "-0.50 $");
    }

    #[test]
    fn zero_exponent_currencies_round_to_whole_units() {
        assert_eq!(format_amount(1200.4, Currency::JPY), "1,200 ¥");
    }
}
