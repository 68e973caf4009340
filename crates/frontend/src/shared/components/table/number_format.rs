//! Number formatting for tables and cards (en-IN conventions)
//!
//! Indian grouping: the last three digits form one group, every group
//! before that has two digits (12,34,567).

/// Group the integer part of `value` the Indian way
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rounds to the nearest integer and applies Indian grouping
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_in;
/// assert_eq!(format_number_in(1234567.4), "12,34,567");
/// ```
pub fn format_number_in(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_indian(rounded.abs() as u64))
}

/// Rupee amount without fraction digits
///
/// ```
/// use frontend::shared::components::table::number_format::format_inr;
/// assert_eq!(format_inr(1234567.0), "₹12,34,567");
/// ```
pub fn format_inr(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(rounded.abs() as u64))
}

/// Compact rupee label for chart axes: ₹950, ₹12.5K, ₹3.4L, ₹1.2Cr
pub fn format_inr_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let body = if abs >= 10_000_000.0 {
        format!("{:.1}Cr", abs / 10_000_000.0)
    } else if abs >= 100_000.0 {
        format!("{:.1}L", abs / 100_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", abs / 1_000.0)
    } else {
        format!("{:.0}", abs)
    };
    format!("{}₹{}", sign, body)
}

/// One decimal, "—" for missing values
pub fn format_optional_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,679");
        assert_eq!(format_inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_format_number_in() {
        assert_eq!(format_number_in(100000.0), "1,00,000");
        assert_eq!(format_number_in(42.4), "42");
    }

    #[test]
    fn test_format_inr_compact() {
        assert_eq!(format_inr_compact(950.0), "₹950");
        assert_eq!(format_inr_compact(12_500.0), "₹12.5K");
        assert_eq!(format_inr_compact(340_000.0), "₹3.4L");
        assert_eq!(format_inr_compact(12_000_000.0), "₹1.2Cr");
    }

    #[test]
    fn test_format_optional_decimal() {
        assert_eq!(format_optional_decimal(Some(4.26)), "4.3");
        assert_eq!(format_optional_decimal(None), "—");
    }
}
