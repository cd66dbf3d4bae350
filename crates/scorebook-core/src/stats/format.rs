//! Division and display helpers shared by the calculators.

/// Rendered in place of a rate whose denominator was zero.
pub const NOT_AVAILABLE: &str = "---";

/// `numerator / denominator`, or `None` when the denominator is not positive.
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Batting-average style: three decimals, leading zero dropped (`.345`,
/// `1.000`).
pub fn format_avg(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) => {
            let formatted = format!("{:.3}", v);
            match formatted.strip_prefix('0') {
                Some(rest) if rest.starts_with('.') => rest.to_string(),
                _ => formatted,
            }
        }
    }
}

/// Two decimals (`3.42`), used for ERA and WHIP.
pub fn format_two_decimals(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) => format!("{:.2}", v),
    }
}

/// Innings pitched as a real number of innings.
pub fn innings_from_outs(outs: u32) -> f64 {
    f64::from(outs) / 3.0
}

/// Traditional innings-pitched notation: 16 outs is `5.1`, 18 is `6.0`.
pub fn format_ip(outs: u32) -> String {
    format!("{}.{}", outs / 3, outs % 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(1.0, 4.0), Some(0.25));
        assert_eq!(safe_divide(1.0, 0.0), None);
        assert_eq!(safe_divide(1.0, -2.0), None);
    }

    #[test]
    fn test_format_avg() {
        assert_eq!(format_avg(Some(0.345)), ".345");
        assert_eq!(format_avg(Some(0.3)), ".300");
        assert_eq!(format_avg(Some(1.0)), "1.000");
        assert_eq!(format_avg(Some(1.5)), "1.500");
        assert_eq!(format_avg(Some(0.0)), ".000");
        assert_eq!(format_avg(None), "---");
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_two_decimals(Some(4.5)), "4.50");
        assert_eq!(format_two_decimals(None), "---");
    }

    #[test]
    fn test_ip() {
        assert_eq!(format_ip(16), "5.1");
        assert_eq!(format_ip(17), "5.2");
        assert_eq!(format_ip(18), "6.0");
        assert_eq!(format_ip(0), "0.0");
        assert!((innings_from_outs(16) - 5.333_333).abs() < 1e-5);
    }
}
