use serde_json::json;

use super::class_builder::class_aggregate_object;
use super::naming::{NameRegistry, LOCAL_AGGREGATE_PREFIX};
use super::operations::AggregateOperation;
use super::source::{AggregationProperty, GroupedBy};
use crate::error::AggregateError;
use crate::schema::{ClassDefinition, PropertyDefinition};

fn city_class() -> ClassDefinition {
    let mut class = ClassDefinition::new("City");
    class.add_property(PropertyDefinition::new("population", "int"));
    class.add_property(PropertyDefinition::new("name", "text"));
    class.add_property(PropertyDefinition::new("inCountry", "Country"));
    class
}

#[test]
fn test_class_assembly_builds_one_object_per_property_in_order() {
    let class = city_class();
    let mut names = NameRegistry::new();

    let assembled =
        class_aggregate_object(&class, LOCAL_AGGREGATE_PREFIX, &mut names).unwrap();

    assert_eq!(assembled.name, "LocalAggregateCityObj");
    let property_names: Vec<&str> = assembled
        .properties
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(property_names, vec!["population", "name", "inCountry"]);

    // numeric property carries the full vocabulary, the others only count
    assert_eq!(assembled.property("population").unwrap().fields.len(), 7);
    assert_eq!(assembled.property("name").unwrap().fields.len(), 1);
    assert_eq!(assembled.property("inCountry").unwrap().fields.len(), 1);

    assert_eq!(assembled.grouped_by.name, "LocalAggregateCityGroupedByObj");
}

#[test]
fn test_generated_names_are_pairwise_distinct_across_classes() {
    let mut names = NameRegistry::new();

    let city = city_class();
    let mut country = ClassDefinition::new("Country");
    country.add_property(PropertyDefinition::new("population", "int"));
    country.add_property(PropertyDefinition::new("name", "text"));

    // same property names under different classes never collide
    class_aggregate_object(&city, LOCAL_AGGREGATE_PREFIX, &mut names).unwrap();
    class_aggregate_object(&country, LOCAL_AGGREGATE_PREFIX, &mut names).unwrap();

    for expected in [
        "LocalAggregateCitypopulationSum",
        "LocalAggregateCountrypopulationSum",
        "LocalAggregateCitynameCount",
        "LocalAggregateCountrynameCount",
        "LocalAggregateCitypopulationObj",
        "LocalAggregateCountrypopulationObj",
    ] {
        assert!(names.contains(expected), "missing {}", expected);
    }
}

#[test]
fn test_duplicate_property_fails_the_class_build() {
    let mut class = ClassDefinition::new("City");
    class.add_property(PropertyDefinition::new("population", "int"));
    class.add_property(PropertyDefinition::new("population", "number"));
    let mut names = NameRegistry::new();

    assert!(matches!(
        class_aggregate_object(&class, LOCAL_AGGREGATE_PREFIX, &mut names),
        Err(AggregateError::InvalidSchemaDefinition { .. })
    ));
}

#[test]
fn test_rebuilding_a_class_in_one_schema_build_collides() {
    let class = city_class();
    let mut names = NameRegistry::new();

    class_aggregate_object(&class, LOCAL_AGGREGATE_PREFIX, &mut names).unwrap();
    assert!(matches!(
        class_aggregate_object(&class, LOCAL_AGGREGATE_PREFIX, &mut names),
        Err(AggregateError::InvalidSchemaDefinition { .. })
    ));
}

#[test]
fn test_assembled_fields_resolve_end_to_end() {
    let class = city_class();
    let mut names = NameRegistry::new();
    let assembled =
        class_aggregate_object(&class, LOCAL_AGGREGATE_PREFIX, &mut names).unwrap();

    let population = assembled.property("population").unwrap();
    let typed = AggregationProperty::new(42)
        .with_aggregation("mean", 12_000.5)
        .into();
    assert_eq!(
        population.field("mean").unwrap().resolve(&typed).unwrap(),
        json!(12_000.5)
    );
    assert_eq!(
        population.field("count").unwrap().resolve(&typed).unwrap(),
        json!(42)
    );

    // the same fields resolve a post-serialization map transparently
    let map = json!({"mean": 12000.5, "count": 42}).into();
    assert_eq!(
        population.field("mean").unwrap().resolve(&map).unwrap(),
        json!(12000.5)
    );

    let grouped = GroupedBy {
        path: vec!["inCountry".to_string()],
        value: "Germany".to_string(),
    }
    .into();
    assert_eq!(
        assembled
            .grouped_by
            .field("path")
            .unwrap()
            .resolve(&grouped)
            .unwrap(),
        json!(["inCountry"])
    );
}

#[test]
fn test_every_numeric_field_name_embeds_class_property_and_operation() {
    let class = city_class();
    let mut names = NameRegistry::new();
    let assembled =
        class_aggregate_object(&class, LOCAL_AGGREGATE_PREFIX, &mut names).unwrap();

    let population = assembled.property("population").unwrap();
    for operation in AggregateOperation::ALL {
        let field = population.field(operation.as_str()).unwrap();
        assert!(field.name.starts_with("LocalAggregateCitypopulation"));
        assert!(field.name.ends_with(operation.capitalized()));
    }
}
