use serde::{Deserialize, Serialize};

/// A user-defined class as supplied by the schema store.
///
/// Classes are owned and mutated by the schema-management layer; the
/// aggregate layer only reads a snapshot at schema-build time. Property order
/// is the definition order and is preserved through schema construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    pub properties: Vec<PropertyDefinition>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn add_property(&mut self, property: PropertyDefinition) {
        self.properties.push(property);
    }
}

/// A typed property of a class.
///
/// `data_type` holds the stored type descriptor ("int", "text", a reference
/// class name, ...). The aggregate layer derives the numeric/non-numeric
/// category from it at build time; see
/// [`DataTypeCategory::derive`](super::DataTypeCategory::derive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub data_type: String,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}
