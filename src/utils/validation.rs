use crate::domain::model::SolutionDoc;
use crate::utils::error::{ConvertError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
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
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parses a scale divisor from its configured text form. Plain decimals and
/// scientific notation are both accepted; zero is rejected because the
/// transform divides by this value.
pub fn parse_scale(field_name: &str, raw: &str) -> Result<Decimal> {
    let parsed = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw));

    match parsed {
        Ok(scale) if scale.is_zero() => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Scale divisor must be non-zero".to_string(),
        }),
        Ok(scale) => Ok(scale),
        Err(e) => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: format!("Not a decimal number: {}", e),
        }),
    }
}

impl Validate for SolutionDoc {
    /// One load-time pass over the document invariants: there is at least one
    /// item spec, and its demand matches the number of placed items.
    fn validate(&self) -> Result<()> {
        let demand = self.demand().ok_or_else(|| ConvertError::DocumentError {
            message: "The document contains no item specs ('items' is empty)".to_string(),
        })?;

        let placed = self.solution.layout.placed_items.len();
        if placed as u64 != demand {
            return Err(ConvertError::DocumentError {
                message: format!(
                    "Demand is {} but the layout holds {} placed items",
                    demand, placed
                ),
            });
        }

        Ok(())
    }
}
