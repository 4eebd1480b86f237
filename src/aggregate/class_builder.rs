use log::debug;

use super::descriptions;
use super::fields::AggregateObject;
use super::grouped_by::grouped_by_object;
use super::naming::{self, NameRegistry};
use super::properties::property_aggregate_object;
use crate::error::{AggregateError, AggregateResult};
use crate::schema::ClassDefinition;

/// Fully assembled aggregate query type for one class: one aggregate object
/// per property plus the grouping descriptor.
#[derive(Debug, Clone)]
pub struct ClassAggregateObject {
    pub name: String,
    pub description: &'static str,
    /// Property name to that property's aggregate object, in definition
    /// order.
    pub properties: Vec<(String, AggregateObject)>,
    pub grouped_by: AggregateObject,
}

impl ClassAggregateObject {
    /// Look up a property's aggregate object by property name.
    pub fn property(&self, name: &str) -> Option<&AggregateObject> {
        self.properties
            .iter()
            .find(|(property_name, _)| property_name == name)
            .map(|(_, object)| object)
    }
}

/// Assemble the aggregate schema for one class.
///
/// Properties build in definition order. The first malformed definition,
/// duplicate property, or name collision fails the whole class, so a partial
/// schema is never published.
pub fn class_aggregate_object(
    class: &ClassDefinition,
    prefix: &str,
    names: &mut NameRegistry,
) -> AggregateResult<ClassAggregateObject> {
    if class.name.is_empty() {
        return Err(AggregateError::invalid_schema_definition(
            "class name cannot be empty",
        ));
    }

    let name = naming::class_object_name(class, prefix);
    names.reserve(&name)?;

    let mut properties: Vec<(String, AggregateObject)> =
        Vec::with_capacity(class.properties.len());
    for property in &class.properties {
        if properties
            .iter()
            .any(|(property_name, _)| property_name == &property.name)
        {
            return Err(AggregateError::invalid_schema_definition(format!(
                "class {}: duplicate property '{}'",
                class.name, property.name
            )));
        }

        let object = property_aggregate_object(class, property, prefix, names)?;
        properties.push((property.name.clone(), object));
    }

    let grouped_by = grouped_by_object(class, names)?;

    debug!(
        "assembled aggregate schema for class {} ({} properties)",
        class.name,
        properties.len()
    );

    Ok(ClassAggregateObject {
        name,
        description: descriptions::CLASS_OBJECT,
        properties,
        grouped_by,
    })
}
