use crate::utils::error::{PlannerError, Result};
use std::net::SocketAddr;
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|e| PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Returns the trimmed form value, treating blank input as missing.
pub fn require_form_value<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PlannerError::missing_field(field_name)),
    }
}

pub fn parse_required<T>(field_name: &str, value: &Option<String>) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = require_form_value(field_name, value)?;
    raw.parse::<T>()
        .map_err(|e| PlannerError::invalid_field(field_name, raw, e.to_string()))
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlannerError::invalid_field(
            field_name,
            &value.to_string(),
            "must be a positive number",
        ));
    }
    Ok(value)
}
