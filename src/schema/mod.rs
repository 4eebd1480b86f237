pub mod types;

// Re-export all types at the schema module level
pub use types::{ClassDefinition, DataTypeCategory, PropertyDefinition};
