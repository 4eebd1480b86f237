use std::sync::Arc;

use log::error;
use serde_json::{json, Value as JsonValue};

use super::fields::FieldResolver;
use super::operations::{AggregateOperation, GroupedByField};
use super::source::AggregateSource;
use crate::error::{AggregateError, AggregateResult};

/// Build the resolver extracting one aggregation operation's value.
///
/// Two source shapes are recognized: the typed aggregation record and a
/// generic JSON map. A key missing from either yields the mapping's absent
/// value (zero for the typed record, null for the map). Any other shape
/// fails with `UnsupportedSourceType`, which propagates to the query caller.
pub fn resolve_aggregate_field(operation: AggregateOperation) -> FieldResolver {
    Arc::new(move |source| extract_aggregate_value(operation, source))
}

fn extract_aggregate_value(
    operation: AggregateOperation,
    source: &AggregateSource,
) -> AggregateResult<JsonValue> {
    match source {
        AggregateSource::Property(property) => match operation {
            AggregateOperation::Count => Ok(json!(property.count)),
            _ => {
                let value = property
                    .numerical_aggregations
                    .get(operation.as_str())
                    .copied()
                    .unwrap_or_default();
                Ok(json!(value))
            }
        },
        AggregateSource::Json(JsonValue::Object(map)) => Ok(map
            .get(operation.as_str())
            .cloned()
            .unwrap_or(JsonValue::Null)),
        other => {
            error!(
                "aggregator {}: unsupported source type {}",
                operation.as_str(),
                other.shape_name()
            );
            Err(AggregateError::unsupported_source_type(
                operation.as_str(),
                other.shape_name(),
            ))
        }
    }
}

/// Build the resolver for one of the fixed grouped-by fields.
///
/// Same two-shape contract as the aggregate resolver, looked up by the fixed
/// `path`/`value` names rather than an operation name.
pub fn resolve_grouped_by_field(field: GroupedByField) -> FieldResolver {
    Arc::new(move |source| extract_grouped_by_value(field, source))
}

fn extract_grouped_by_value(
    field: GroupedByField,
    source: &AggregateSource,
) -> AggregateResult<JsonValue> {
    match source {
        AggregateSource::GroupedBy(grouped_by) => match field {
            GroupedByField::Path => Ok(json!(grouped_by.path)),
            GroupedByField::Value => Ok(json!(grouped_by.value)),
        },
        AggregateSource::Json(JsonValue::Object(map)) => {
            Ok(map.get(field.as_str()).cloned().unwrap_or(JsonValue::Null))
        }
        other => {
            error!(
                "groupedBy field {}: unsupported source type {}",
                field.as_str(),
                other.shape_name()
            );
            Err(AggregateError::unsupported_source_type(
                field.as_str(),
                other.shape_name(),
            ))
        }
    }
}
