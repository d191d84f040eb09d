/// Formats a price for display: thousands grouped with spaces, a zero
/// fraction dropped, otherwise at most two decimal places.
///
/// `119990.0` → `"119 990"`, `12.5` → `"12.5"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "0".to_string();
    }

    let rendered = format!("{:.2}", price.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && rendered.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(119_990.0), "119 990");
        assert_eq!(format_price(1_234_567.0), "1 234 567");
    }

    #[test]
    fn small_values_are_not_grouped() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
    }

    #[test]
    fn keeps_significant_fraction() {
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(1_999.99), "1 999.99");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_price(f64::NAN), "0");
        assert_eq!(format_price(f64::INFINITY), "0");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_price(-1_500.0), "-1 500");
    }
}
