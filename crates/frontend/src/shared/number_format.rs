//! Number formatting for cards and chart labels (pt-BR conventions).

/// Formats a monetary value as Brazilian Real: `R$ 1.234,56`.
///
/// Two fraction digits, `.` as thousands separator, `,` as decimal
/// separator, non-breaking space after the currency sign.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_brl;
/// assert_eq!(format_brl(1234.56), "R$\u{a0}1.234,56");
/// ```
pub fn format_brl(value: f64) -> String {
    // Half-cent values round away from zero, so 352.625 shows as 352,63.
    let formatted = format!("{:.2}", (value * 100.0).round() / 100.0);
    let mut parts = formatted.split('.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next().unwrap_or("00");
    format!("R$\u{a0}{},{}", group_thousands(integer_part), decimal_part)
}

/// Formats an integer count with `.` as thousands separator.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_count;
/// assert_eq!(format_count(1234567), "1.234.567");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Inserts `.` every 3 digits, counting from the end.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(4231.5), "R$\u{a0}4.231,50");
        assert_eq!(format_brl(1234567.89), "R$\u{a0}1.234.567,89");
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(352.625), "R$\u{a0}352,63");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(12), "12");
        assert_eq!(format_count(1234), "1.234");
        assert_eq!(format_count(1234567), "1.234.567");
        assert_eq!(format_count(0), "0");
    }
}
