//! Validation helpers
//!
//! Helper functions for validating request data before it reaches the
//! database layer.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validate and convert a `YYYY-MM-DD` string to a date
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validate a `[from, to]` date range, both inclusive
pub fn validate_date_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let from_date = validate_date(from)?;
    let to_date = validate_date(to)?;
    if from_date > to_date {
        let mut error = ValidationError::new("date_range");
        error.add_param("from".into(), &from.to_string());
        error.add_param("to".into(), &to.to_string());
        return Err(error);
    }
    Ok((from_date, to_date))
}

/// Validate that a string is not empty or whitespace
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Basic phone number format check
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 9 || digits > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// License plate format check
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '.'], "");
    if clean_plate.len() < 4 || clean_plate.len() > 12 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validate that a quantity or amount is strictly positive
pub fn validate_positive(value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validate that a value is non-negative
pub fn validate_non_negative(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("15-01-2024").is_err());
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range("2024-01-01", "2024-01-31").is_ok());
        assert!(validate_date_range("2024-02-01", "2024-01-01").is_err());
        assert!(validate_date_range("bad", "2024-01-01").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("gara").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0900000000").is_ok());
        assert!(validate_phone("09-0000-0000").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("51A-1234").is_ok());
        assert!(validate_license_plate("51A-1").is_ok());
        assert!(validate_license_plate("X").is_err());
        assert!(validate_license_plate("ABCDEFGHIJKLMN").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(10).is_ok());
        assert!(validate_non_negative(-1).is_err());
    }
}
