//! Aggregation query schema layer over dynamically defined data classes.
//!
//! Consumers define classes with typed properties; this crate constructs,
//! per class/property pair, the set of aggregate fields legal for the
//! property's type category, and wires each field with a resolver that
//! extracts its value from heterogeneous runtime representations: a
//! strongly-typed aggregation record, or the generic JSON map the same data
//! becomes after a cache or serialization round trip.
//!
//! Schema construction runs once per schema change; resolution runs once per
//! field per query. Both are pure and safe to invoke concurrently.

pub mod aggregate;
pub mod error;
pub mod schema;

pub use aggregate::{
    class_aggregate_object, grouped_by_object, non_numeric_property_object,
    numeric_property_object, property_aggregate_object, resolve_aggregate_field,
    resolve_grouped_by_field, AggregateField, AggregateObject, AggregateOperation,
    AggregateSource, AggregationProperty, ClassAggregateObject, FieldResolver, GroupedBy,
    GroupedByField, NameRegistry, ScalarKind, LOCAL_AGGREGATE_PREFIX,
};
pub use error::{AggregateError, AggregateResult};
pub use schema::{ClassDefinition, DataTypeCategory, PropertyDefinition};
