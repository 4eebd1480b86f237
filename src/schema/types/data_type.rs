use serde::{Deserialize, Serialize};

use crate::error::{AggregateError, AggregateResult};

/// Coarse category deciding which aggregate operations a property exposes.
///
/// Numeric properties carry the full statistic vocabulary; everything else
/// only counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataTypeCategory {
    Numeric,
    NonNumeric,
}

impl DataTypeCategory {
    /// Derive the category from a stored data type descriptor.
    ///
    /// Primitive numeric types aggregate statistically. Text-like primitives
    /// and references to other classes (descriptors starting with an
    /// uppercase letter) only count. A descriptor matching neither is
    /// rejected, so a malformed property never reaches field construction.
    pub fn derive(data_type: &str) -> AggregateResult<Self> {
        match data_type {
            "int" | "number" => Ok(Self::Numeric),
            "string" | "text" | "boolean" | "date" => Ok(Self::NonNumeric),
            other if other.starts_with(|c: char| c.is_ascii_uppercase()) => {
                Ok(Self::NonNumeric)
            }
            other => Err(AggregateError::invalid_schema_definition(format!(
                "data type '{}' has no aggregate category",
                other
            ))),
        }
    }
}
