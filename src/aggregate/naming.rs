use std::collections::HashSet;

use super::operations::AggregateOperation;
use crate::error::{AggregateError, AggregateResult};
use crate::schema::{ClassDefinition, PropertyDefinition};

/// Prefix for names generated by the local aggregate schema.
pub const LOCAL_AGGREGATE_PREFIX: &str = "LocalAggregate";

/// Exposed name of one operation field: `{prefix}{class}{property}{Op}`.
///
/// Class and property names both enter the composition; together with the
/// operation suffix this keeps every generated field name distinct across
/// the schema.
pub fn property_field_name(
    class: &ClassDefinition,
    property: &PropertyDefinition,
    prefix: &str,
    operation: AggregateOperation,
) -> String {
    format!(
        "{}{}{}{}",
        prefix,
        class.name,
        property.name,
        operation.capitalized()
    )
}

/// Name of the per-property aggregate object: `{prefix}{class}{property}Obj`.
pub fn property_object_name(
    class: &ClassDefinition,
    property: &PropertyDefinition,
    prefix: &str,
) -> String {
    format!("{}{}{}Obj", prefix, class.name, property.name)
}

/// Name of the class-scoped grouped-by object. Grouping is class-scoped, so
/// the prefix is fixed and no property name enters the composition.
pub fn grouped_by_object_name(class: &ClassDefinition) -> String {
    format!("{}{}GroupedByObj", LOCAL_AGGREGATE_PREFIX, class.name)
}

/// Name of the per-class aggregate object: `{prefix}{class}Obj`.
pub fn class_object_name(class: &ClassDefinition, prefix: &str) -> String {
    format!("{}{}Obj", prefix, class.name)
}

/// Every name issued while building one schema.
///
/// Generated names are unique by construction as long as class and property
/// names are; the registry makes that invariant checked instead of assumed,
/// failing the build on the first collision.
#[derive(Debug, Default)]
pub struct NameRegistry {
    issued: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a generated name, failing if it was already issued in this
    /// build.
    pub fn reserve(&mut self, name: &str) -> AggregateResult<()> {
        if !self.issued.insert(name.to_string()) {
            return Err(AggregateError::invalid_schema_definition(format!(
                "generated name '{}' already issued",
                name
            )));
        }
        Ok(())
    }

    /// Whether a name was issued in this build.
    pub fn contains(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
