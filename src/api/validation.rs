use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::ApiError;

const MAX_NAME_LEN: usize = 200;

/// Largest price that fits `DECIMAL(10, 2)`.
const MAX_PRICE_CENTS: i64 = 99_999_999_99;

pub fn validate_name(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation(format!(
            "{field} must be {MAX_NAME_LEN} characters or less"
        )));
    }

    Ok(trimmed.to_string())
}

/// Trims optional text, treating blank values as absent.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses one of the closed string sets (category, role, rarity, ...).
pub fn parse_enum<T>(value: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = String>,
{
    value.trim().parse().map_err(ApiError::validation)
}

pub fn parse_optional_enum<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = String>,
{
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_enum)
        .transpose()
}

/// Accepts a price as a JSON string (`"285.00"`) or number (`285`).
pub fn validate_price(value: &Value) -> Result<Decimal, ApiError> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(ApiError::validation("Price must be a decimal string or number")),
    };

    let price = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| ApiError::validation(format!("Invalid price: '{text}'")))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(ApiError::validation("Price cannot be negative"));
    }

    if price.normalize().scale() > 2 {
        return Err(ApiError::validation(
            "Price cannot have more than two decimal places",
        ));
    }

    if price > Decimal::new(MAX_PRICE_CENTS, 2) {
        return Err(ApiError::validation("Price is too large"));
    }

    Ok(price)
}

pub fn validate_non_negative(field: &str, value: Option<f64>) -> Result<Option<f64>, ApiError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ApiError::validation(format!(
            "{field} must be a non-negative number"
        ))),
        other => Ok(other),
    }
}

pub fn validate_non_negative_count(
    field: &str,
    value: Option<i32>,
) -> Result<Option<i32>, ApiError> {
    match value {
        Some(v) if v < 0 => Err(ApiError::validation(format!(
            "{field} cannot be negative"
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::GarmentCategory;
    use serde_json::json;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Name", "  Kaftan Azul ").unwrap(), "Kaftan Azul");
        assert!(validate_name("Name", "").is_err());
        assert!(validate_name("Name", "   ").is_err());
        assert!(validate_name("Name", &"a".repeat(201)).is_err());
    }

    #[test]
    fn test_parse_enum() {
        assert_eq!(
            parse_enum::<GarmentCategory>("textiles").unwrap(),
            GarmentCategory::Textiles
        );
        assert!(parse_enum::<GarmentCategory>("shoes").is_err());
        assert_eq!(parse_optional_enum::<GarmentCategory>(Some(" ")).unwrap(), None);
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(
            validate_price(&json!("285.00")).unwrap(),
            Decimal::new(28500, 2)
        );
        assert_eq!(validate_price(&json!(98)).unwrap(), Decimal::from(98));
        assert_eq!(validate_price(&json!(15.6)).unwrap(), Decimal::new(156, 1));
        assert!(validate_price(&json!("-1")).is_err());
        assert!(validate_price(&json!("abc")).is_err());
        assert!(validate_price(&json!("1.234")).is_err());
        assert!(validate_price(&json!("100000000.00")).is_err());
        assert!(validate_price(&json!(true)).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert_eq!(validate_non_negative("waterSaved", Some(0.0)).unwrap(), Some(0.0));
        assert!(validate_non_negative("waterSaved", Some(-1.0)).is_err());
        assert!(validate_non_negative_count("artisansSupported", Some(-2)).is_err());
        assert_eq!(validate_non_negative_count("artisansSupported", None).unwrap(), None);
    }
}
