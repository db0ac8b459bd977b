fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Grouped number with two decimals, no symbol: `12,345.60`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, format_with_commas(cents / 100), cents % 100)
}

/// `$12,345.60`, or `-$12,345.60`.
pub fn format_usd(amount: f64) -> String {
    let body = format_amount(amount.abs());
    if amount < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Explicit `+` for non-negative values, one decimal: `+9.7%`.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-416.666), "-416.67");
    }

    #[test]
    fn usd_puts_sign_before_symbol() {
        assert_eq!(format_usd(54_860.0), "$54,860.00");
        assert_eq!(format_usd(-208.333), "-$208.33");
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn percents_show_direction() {
        assert_eq!(format_signed_percent(9.72), "+9.7%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
        assert_eq!(format_signed_percent(-5.0), "-5.0%");
    }
}
