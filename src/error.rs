use thiserror::Error;

/// Unified error type for aggregate schema construction and field resolution.
///
/// Exactly two failure kinds exist in this layer. A resolver handed a runtime
/// value whose shape it does not recognize fails with
/// [`UnsupportedSourceType`](AggregateError::UnsupportedSourceType); a class or
/// property definition too malformed to build fields from fails with
/// [`InvalidSchemaDefinition`](AggregateError::InvalidSchemaDefinition).
///
/// A key missing from an otherwise recognized source shape is *not* an error;
/// it resolves to the mapping's absent value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// A resolver received a runtime value of an unrecognized shape.
    ///
    /// Carries the field or operation name being resolved and the shape that
    /// was actually observed. Surfaced to the query caller; never retried.
    #[error("Field {field}: unsupported source type {actual}")]
    UnsupportedSourceType { field: String, actual: String },

    /// A class or property definition is structurally invalid, its data type
    /// has no aggregate category, or a generated name collided.
    ///
    /// Fatal to the schema build: no partial schema is published.
    #[error("Invalid schema definition: {reason}")]
    InvalidSchemaDefinition { reason: String },
}

impl AggregateError {
    /// Create an UnsupportedSourceType error.
    pub fn unsupported_source_type(
        field: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnsupportedSourceType {
            field: field.into(),
            actual: actual.into(),
        }
    }

    /// Create an InvalidSchemaDefinition error.
    pub fn invalid_schema_definition(reason: impl Into<String>) -> Self {
        Self::InvalidSchemaDefinition {
            reason: reason.into(),
        }
    }
}

/// Result type alias for aggregate schema operations.
pub type AggregateResult<T> = Result<T, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let error = AggregateError::unsupported_source_type("sum", "json string");
        assert!(error.to_string().contains("sum"));
        assert!(error.to_string().contains("json string"));

        let error = AggregateError::invalid_schema_definition("class name cannot be empty");
        assert!(error.to_string().contains("class name cannot be empty"));
    }

    #[test]
    fn test_error_variants_are_distinguishable() {
        let resolution = AggregateError::unsupported_source_type("path", "json number");
        let build = AggregateError::invalid_schema_definition("duplicate name");

        assert!(matches!(
            resolution,
            AggregateError::UnsupportedSourceType { .. }
        ));
        assert!(matches!(
            build,
            AggregateError::InvalidSchemaDefinition { .. }
        ));
    }
}
