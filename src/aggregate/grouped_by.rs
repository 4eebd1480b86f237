use std::collections::HashMap;

use log::debug;

use super::descriptions;
use super::fields::{AggregateField, AggregateObject};
use super::naming::{self, NameRegistry};
use super::operations::GroupedByField;
use super::resolver::resolve_grouped_by_field;
use crate::error::{AggregateError, AggregateResult};
use crate::schema::ClassDefinition;

/// Build the descriptor of which property a class's result groups were
/// bucketed by.
///
/// Grouping is class-scoped, not property-scoped: the object name derives
/// from the class name alone and the field names are the fixed
/// `path`/`value` pair.
pub fn grouped_by_object(
    class: &ClassDefinition,
    names: &mut NameRegistry,
) -> AggregateResult<AggregateObject> {
    if class.name.is_empty() {
        return Err(AggregateError::invalid_schema_definition(
            "class name cannot be empty",
        ));
    }

    let mut fields = HashMap::new();
    for field in GroupedByField::ALL {
        fields.insert(
            field.as_str().to_string(),
            AggregateField {
                name: field.as_str().to_string(),
                description: field.description(),
                scalar: field.scalar(),
                resolver: resolve_grouped_by_field(field),
            },
        );
    }

    let name = naming::grouped_by_object_name(class);
    names.reserve(&name)?;

    debug!("built grouped-by object {}", name);

    Ok(AggregateObject {
        name,
        description: descriptions::GROUPED_BY_OBJECT,
        fields,
    })
}
