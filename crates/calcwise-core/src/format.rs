//! Text formatting for recommendation copy

/// Whole-dollar amount with thousands separators: `$1,234`
pub fn currency(amount: f64) -> String {
    format_money(amount, 0)
}

/// Dollar amount with cents: `$1,234.56`
pub fn currency_cents(amount: f64) -> String {
    format_money(amount, 2)
}

fn format_money(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let rounded = format!("{:.*}", decimals, amount.abs());
    let (whole, frac) = match rounded.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (rounded.as_str(), None),
    };

    let grouped = group_thousands(whole);
    // "-0" after rounding is just zero
    let negative = amount < 0.0 && rounded.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match frac {
        Some(f) => format!("{}${}.{}", sign, grouped, f),
        None => format!("{}${}", sign, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with one decimal: `12.5%`
pub fn percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    let text = format!("{:.1}", value);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}%", text)
}

/// Plain number with thousands separators, no decimals
pub fn number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&rounded))
}

/// Human duration from a month count: `4 years 2 months`
pub fn months(total: f64) -> String {
    if !total.is_finite() || total <= 0.0 {
        return "0 months".to_string();
    }

    let total = total.round() as u64;
    let years = total / 12;
    let rem = total % 12;

    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    match (years, rem) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

/// Human duration from a year count, one decimal at most: `1 year`, `2.5 years`
pub fn years(total: f64) -> String {
    if !total.is_finite() || total <= 0.0 {
        return "0 years".to_string();
    }

    let text = format!("{:.1}", total);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    if text == "1" {
        "1 year".to_string()
    } else {
        format!("{} years", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(999.4), "$999");
        assert_eq!(currency(1234.0), "$1,234");
        assert_eq!(currency(1_234_567.8), "$1,234,568");
        assert_eq!(currency(-2500.0), "-$2,500");
        assert_eq!(currency(-0.2), "$0");
    }

    #[test]
    fn test_currency_cents() {
        assert_eq!(currency_cents(1234.5), "$1,234.50");
        assert_eq!(currency_cents(15.999), "$16.00");
    }

    #[test]
    fn test_percent_trims_zero_decimal() {
        assert_eq!(percent(20.0), "20%");
        assert_eq!(percent(12.345), "12.3%");
        assert_eq!(percent(f64::INFINITY), "0%");
    }

    #[test]
    fn test_months_text() {
        assert_eq!(months(1.0), "1 month");
        assert_eq!(months(7.0), "7 months");
        assert_eq!(months(12.0), "1 year");
        assert_eq!(months(50.0), "4 years 2 months");
        assert_eq!(months(-3.0), "0 months");
    }

    #[test]
    fn test_years_text() {
        assert_eq!(years(1.0), "1 year");
        assert_eq!(years(0.96), "1 year");
        assert_eq!(years(30.0), "30 years");
        assert_eq!(years(2.5), "2.5 years");
        assert_eq!(years(7.000000001), "7 years");
        assert_eq!(years(1e-9), "0 years");
        assert_eq!(years(f64::NAN), "0 years");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(number(43800.0), "43,800");
        assert_eq!(number(-12.0), "-12");
    }
}
