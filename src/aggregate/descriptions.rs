//! Documentation strings attached to generated aggregate fields and objects.
//!
//! Kept in one place so the API-description layer renders consistent wording
//! for every class and property.

pub const SUM: &str = "Sum of the values of the numeric property within this group";
pub const MINIMUM: &str = "Minimum value of the numeric property within this group";
pub const MAXIMUM: &str = "Maximum value of the numeric property within this group";
pub const MEAN: &str = "Arithmetic mean of the values of the numeric property within this group";
pub const MODE: &str = "Most frequent value of the numeric property within this group";
pub const MEDIAN: &str = "Median value of the numeric property within this group";
pub const COUNT: &str = "Number of values present for the property within this group";

pub const PROPERTY_OBJECT: &str = "Aggregate operations available on this property";

pub const GROUPED_BY_OBJECT: &str =
    "Which property the results within this group were grouped by";
pub const GROUPED_BY_PATH: &str = "Path of the property the group was bucketed by";
pub const GROUPED_BY_VALUE: &str = "Value of the property the group was bucketed by";

pub const CLASS_OBJECT: &str = "Aggregate results for this class";
