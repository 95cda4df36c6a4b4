use crate::utils::error::{Result, ZomatoError};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ZomatoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ZomatoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

// Drops `.` segments and trailing separators so `./menu.json` equals `menu.json`.
fn normalize_path(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

pub fn validate_distinct(field_name: &str, left: &str, right: &str) -> Result<()> {
    if normalize_path(left) == normalize_path(right) {
        return Err(ZomatoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: left.to_string(),
            reason: "Menu and orders must be stored in different files".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZomatoError::input(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Prices are plain decimals; anything negative, NaN or infinite is rejected.
/// Returns the price with `-0.0` folded into `0.0`.
pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(ZomatoError::InvalidPrice(price));
    }
    Ok(price + 0.0)
}
