use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::source::AggregateSource;
use crate::error::AggregateResult;

/// Scalar kind of a generated field's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Float,
    Int,
    String,
    StringList,
}

/// Extraction function wired into one generated field.
///
/// Resolvers are pure and stateless; unrestricted parallel invocation across
/// concurrent queries is safe.
pub type FieldResolver =
    Arc<dyn Fn(&AggregateSource) -> AggregateResult<JsonValue> + Send + Sync>;

/// One queryable field generated for a class or property.
#[derive(Clone)]
pub struct AggregateField {
    /// Exposed name. For operation fields this is globally unique across the
    /// generated schema; grouped-by fields use the fixed `path`/`value`
    /// names scoped to their object.
    pub name: String,
    pub description: &'static str,
    pub scalar: ScalarKind,
    pub resolver: FieldResolver,
}

impl AggregateField {
    /// Resolve this field against a runtime source value.
    pub fn resolve(&self, source: &AggregateSource) -> AggregateResult<JsonValue> {
        (self.resolver)(source)
    }
}

impl fmt::Debug for AggregateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateField")
            .field("name", &self.name)
            .field("scalar", &self.scalar)
            .finish()
    }
}

/// A named, documented set of aggregate fields, keyed by operation or fixed
/// field name.
#[derive(Debug, Clone)]
pub struct AggregateObject {
    pub name: String,
    pub description: &'static str,
    pub fields: HashMap<String, AggregateField>,
}

impl AggregateObject {
    /// Look up a field by its key (`"sum"`, `"count"`, `"path"`, ...).
    pub fn field(&self, key: &str) -> Option<&AggregateField> {
        self.fields.get(key)
    }
}
