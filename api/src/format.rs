//! Text formatting for the numbers shown in the coin table.

/// Inserts a `,` between every group of three digits left of the decimal point.
///
/// The input is expected to be an already rendered number such as `"1234567.89"`.
/// A leading `-` and the fractional part pass through unchanged. Input whose
/// integer part is not all ASCII digits is returned as-is.
///
/// # Examples
/// ```
/// use api::format::number_with_commas;
/// assert_eq!(number_with_commas("1234567.89"), "1,234,567.89");
/// ```
pub fn number_with_commas(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_string();
    }

    let len = int_part.len();
    let mut out = String::with_capacity(s.len() + len / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac_part);
    out
}

/// Renders a price with two decimals and grouped thousands.
pub fn format_price(value: f64) -> String {
    number_with_commas(&format!("{:.2}", value))
}

/// Drops the last six characters of the market cap's decimal rendering.
///
/// This is a plain truncation, not a rounded division: `123456789000`
/// becomes `"123456"`, and anything under a million becomes `""`.
pub fn truncate_millions(market_cap: f64) -> String {
    let rendered = market_cap.to_string();
    let keep = rendered.chars().count().saturating_sub(6);
    rendered.chars().take(keep).collect()
}

/// Market cap in millions with grouped thousands and an `M` suffix.
pub fn format_market_cap(market_cap: f64) -> String {
    format!("{}M", number_with_commas(&truncate_millions(market_cap)))
}

/// 24h change as a percentage with two decimals; gains get a `+` prefix.
pub fn format_change(change: Option<f64>) -> String {
    let change = change.unwrap_or_default();
    if change > 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(number_with_commas("1234567.89"), "1,234,567.89");
        assert_eq!(number_with_commas("123"), "123");
        assert_eq!(number_with_commas("1234"), "1,234");
        assert_eq!(number_with_commas("123456"), "123,456");
        assert_eq!(number_with_commas("-9876543.21"), "-9,876,543.21");
        assert_eq!(number_with_commas(""), "");
    }

    #[test]
    fn leaves_non_numeric_input_alone() {
        assert_eq!(number_with_commas("NaN"), "NaN");
        assert_eq!(number_with_commas("inf"), "inf");
    }

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(1234567.89), "1,234,567.89");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(50000.0), "50,000.00");
        assert_eq!(format_price(0.004567), "0.00");
    }

    #[test]
    fn truncates_market_cap_to_millions() {
        assert_eq!(truncate_millions(123456789000.0), "123456");
        assert_eq!(format_market_cap(123456789000.0), "123,456M");
        assert_eq!(format_market_cap(900000000000.0), "900,000M");
    }

    #[test]
    fn small_market_cap_keeps_only_suffix() {
        assert_eq!(truncate_millions(999999.0), "");
        assert_eq!(format_market_cap(0.0), "M");
    }

    #[test]
    fn formats_change() {
        assert_eq!(format_change(Some(2.5)), "+2.50%");
        assert_eq!(format_change(Some(-2.5)), "-2.50%");
        assert_eq!(format_change(Some(0.0)), "0.00%");
        assert_eq!(format_change(None), "0.00%");
    }
}
