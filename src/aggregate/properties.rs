use std::collections::HashMap;

use log::debug;

use super::descriptions;
use super::fields::{AggregateField, AggregateObject};
use super::naming::{self, NameRegistry};
use super::operations::AggregateOperation;
use super::resolver::resolve_aggregate_field;
use crate::error::{AggregateError, AggregateResult};
use crate::schema::{ClassDefinition, DataTypeCategory, PropertyDefinition};

/// Build the aggregate object for a numeric property.
///
/// Numeric properties expose the full vocabulary: six float statistics plus
/// an integer count. Every exposed name is reserved in the registry before
/// the object is returned.
pub fn numeric_property_object(
    class: &ClassDefinition,
    property: &PropertyDefinition,
    prefix: &str,
    names: &mut NameRegistry,
) -> AggregateResult<AggregateObject> {
    validate_pair(class, property)?;

    let mut fields = HashMap::new();
    for operation in AggregateOperation::ALL {
        let name = naming::property_field_name(class, property, prefix, operation);
        names.reserve(&name)?;
        fields.insert(
            operation.as_str().to_string(),
            AggregateField {
                name,
                description: operation.description(),
                scalar: operation.scalar(),
                resolver: resolve_aggregate_field(operation),
            },
        );
    }

    named_property_object(class, property, prefix, fields, names)
}

/// Build the aggregate object for a non-numeric property.
///
/// Text, boolean, date and reference properties carry no statistics; the
/// only legal operation is `count`. The count field name includes the
/// property name, same as every other generated field name.
pub fn non_numeric_property_object(
    class: &ClassDefinition,
    property: &PropertyDefinition,
    prefix: &str,
    names: &mut NameRegistry,
) -> AggregateResult<AggregateObject> {
    validate_pair(class, property)?;

    let operation = AggregateOperation::Count;
    let name = naming::property_field_name(class, property, prefix, operation);
    names.reserve(&name)?;

    let mut fields = HashMap::new();
    fields.insert(
        operation.as_str().to_string(),
        AggregateField {
            name,
            description: operation.description(),
            scalar: operation.scalar(),
            resolver: resolve_aggregate_field(operation),
        },
    );

    named_property_object(class, property, prefix, fields, names)
}

/// Build the aggregate object for a property, branching on the category
/// derived from its data type.
pub fn property_aggregate_object(
    class: &ClassDefinition,
    property: &PropertyDefinition,
    prefix: &str,
    names: &mut NameRegistry,
) -> AggregateResult<AggregateObject> {
    validate_pair(class, property)?;

    match DataTypeCategory::derive(&property.data_type)? {
        DataTypeCategory::Numeric => numeric_property_object(class, property, prefix, names),
        DataTypeCategory::NonNumeric => {
            non_numeric_property_object(class, property, prefix, names)
        }
    }
}

fn named_property_object(
    class: &ClassDefinition,
    property: &PropertyDefinition,
    prefix: &str,
    fields: HashMap<String, AggregateField>,
    names: &mut NameRegistry,
) -> AggregateResult<AggregateObject> {
    let name = naming::property_object_name(class, property, prefix);
    names.reserve(&name)?;

    debug!("built aggregate object {} ({} fields)", name, fields.len());

    Ok(AggregateObject {
        name,
        description: descriptions::PROPERTY_OBJECT,
        fields,
    })
}

fn validate_pair(
    class: &ClassDefinition,
    property: &PropertyDefinition,
) -> AggregateResult<()> {
    if class.name.is_empty() {
        return Err(AggregateError::invalid_schema_definition(
            "class name cannot be empty",
        ));
    }
    if property.name.is_empty() {
        return Err(AggregateError::invalid_schema_definition(format!(
            "class {}: property name cannot be empty",
            class.name
        )));
    }
    Ok(())
}
