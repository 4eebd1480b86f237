use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Strongly-typed aggregation result for one property, as produced by the
/// aggregation engine before any serialization boundary.
///
/// The statistic mapping flattens on serialization, so a round trip through
/// JSON yields exactly the flat key/value map resolvers accept as the
/// generic representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationProperty {
    /// Statistic wire name to computed value. A key absent from the mapping
    /// resolves to the mapping's zero value, not an error.
    #[serde(flatten)]
    pub numerical_aggregations: HashMap<String, f64>,
    pub count: i64,
}

impl AggregationProperty {
    pub fn new(count: i64) -> Self {
        Self {
            numerical_aggregations: HashMap::new(),
            count,
        }
    }

    /// Record one computed statistic under its wire name.
    pub fn with_aggregation(mut self, operation: &str, value: f64) -> Self {
        self.numerical_aggregations
            .insert(operation.to_string(), value);
        self
    }
}

/// Grouping key of one aggregated result row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedBy {
    /// Property path the results were bucketed by.
    pub path: Vec<String>,
    /// Bucket value of this group.
    pub value: String,
}

/// Every runtime shape a resolver can be handed.
///
/// Result values reach resolvers either straight from the aggregation engine
/// (typed records) or after a serialization round trip (generic JSON). The
/// union is closed: a shape outside it cannot be constructed, and resolvers
/// match it exhaustively, so the unsupported-shape arm is checked at compile
/// time.
#[derive(Debug, Clone)]
pub enum AggregateSource {
    Property(AggregationProperty),
    GroupedBy(GroupedBy),
    Json(JsonValue),
}

impl AggregateSource {
    /// Shape name carried in `UnsupportedSourceType` diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Property(_) => "aggregation property",
            Self::GroupedBy(_) => "grouped-by record",
            Self::Json(value) => match value {
                JsonValue::Null => "json null",
                JsonValue::Bool(_) => "json boolean",
                JsonValue::Number(_) => "json number",
                JsonValue::String(_) => "json string",
                JsonValue::Array(_) => "json array",
                JsonValue::Object(_) => "json object",
            },
        }
    }
}

impl From<AggregationProperty> for AggregateSource {
    fn from(property: AggregationProperty) -> Self {
        Self::Property(property)
    }
}

impl From<GroupedBy> for AggregateSource {
    fn from(grouped_by: GroupedBy) -> Self {
        Self::GroupedBy(grouped_by)
    }
}

impl From<JsonValue> for AggregateSource {
    fn from(value: JsonValue) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_round_trip_yields_flat_map() {
        let property = AggregationProperty::new(3).with_aggregation("sum", 4.5);

        let serialized = serde_json::to_value(&property).unwrap();
        assert_eq!(serialized, json!({"sum": 4.5, "count": 3}));

        let restored: AggregationProperty = serde_json::from_value(serialized).unwrap();
        assert_eq!(restored, property);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(
            AggregateSource::from(AggregationProperty::new(0)).shape_name(),
            "aggregation property"
        );
        assert_eq!(
            AggregateSource::from(GroupedBy::default()).shape_name(),
            "grouped-by record"
        );
        assert_eq!(AggregateSource::from(json!(7)).shape_name(), "json number");
        assert_eq!(
            AggregateSource::from(json!("oops")).shape_name(),
            "json string"
        );
        assert_eq!(AggregateSource::from(json!({})).shape_name(), "json object");
    }
}
