//! Numeric validation functions

/// Parses an integer, allowing a leading sign. Surrounding whitespace is not
/// accepted; clean the value first.
pub fn parse_integer(value: &str) -> Option<i64> {
    let digits = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse().ok()
}

/// Validates that a value lies within optional inclusive bounds
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), String> {
    match (min, max) {
        (Some(min), Some(max)) if value < min || value > max => {
            Err(format!("Must be between {} and {}", min, max))
        }
        (Some(min), None) if value < min => Err(format!("Must be at least {}", min)),
        (None, Some(max)) if value > max => Err(format!("Must be at most {}", max)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("4.2"), None);
        assert_eq!(parse_integer(" 4"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("1e3"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_range_validation() {
        assert!(validate_range(5, Some(1), Some(10)).is_ok());
        assert!(validate_range(1, Some(1), Some(10)).is_ok());
        assert!(validate_range(10, Some(1), Some(10)).is_ok());
        assert!(validate_range(0, Some(1), Some(10)).is_err());
        assert!(validate_range(11, Some(1), Some(10)).is_err());

        assert!(validate_range(-3, None, Some(0)).is_ok());
        assert_eq!(
            validate_range(3, None, Some(0)),
            Err("Must be at most 0".to_string())
        );
        assert_eq!(
            validate_range(3, Some(5), None),
            Err("Must be at least 5".to_string())
        );
        assert!(validate_range(3, None, None).is_ok());
    }
}
