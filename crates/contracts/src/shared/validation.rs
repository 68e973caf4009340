//! Payload validation applied right after deserialization.
//!
//! serde guarantees the shape of a response; `Validate` checks the value
//! invariants the dashboard relies on (non-negative revenue, ratings in
//! range). A payload that fails validation is reported as a schema error
//! instead of being rendered.

/// Value-level checks for a decoded DTO
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(idx, item)| item.validate().map_err(|e| format!("[{}]: {}", idx, e)))
    }
}

impl Validate for String {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Revenue, counts and other amounts must be finite and non-negative
pub fn non_negative(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", field));
    }
    if value < 0.0 {
        return Err(format!("{} must be non-negative, got {}", field, value));
    }
    Ok(())
}

/// Closed-range check used for ratings
pub fn in_range(value: f64, min: f64, max: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value < min || value > max {
        return Err(format!("{} must be within [{}, {}], got {}", field, min, max, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Amount(f64);

    impl Validate for Amount {
        fn validate(&self) -> Result<(), String> {
            non_negative(self.0, "amount")
        }
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative(0.0, "revenue").is_ok());
        assert!(non_negative(12.5, "revenue").is_ok());
        assert!(non_negative(-0.01, "revenue").is_err());
        assert!(non_negative(f64::NAN, "revenue").is_err());
    }

    #[test]
    fn test_vec_reports_failing_index() {
        let items = vec![Amount(1.0), Amount(-3.0)];
        let err = items.validate().unwrap_err();
        assert!(err.starts_with("[1]: amount"));
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(4.2, 0.0, 5.0, "rating").is_ok());
        assert!(in_range(5.1, 0.0, 5.0, "rating").is_err());
    }
}
