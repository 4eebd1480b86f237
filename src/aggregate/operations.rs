use serde::{Deserialize, Serialize};

use super::descriptions;
use super::fields::ScalarKind;

/// The fixed aggregation operation vocabulary.
///
/// Numeric properties expose all seven operations; non-numeric properties
/// expose only [`Count`](Self::Count). The wire name doubles as the lookup
/// key into result mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOperation {
    Sum,
    Minimum,
    Maximum,
    Mean,
    Mode,
    Median,
    Count,
}

impl AggregateOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Sum,
        Self::Minimum,
        Self::Maximum,
        Self::Mean,
        Self::Mode,
        Self::Median,
        Self::Count,
    ];

    /// Wire name, used as the field key and the result-mapping lookup key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Mean => "mean",
            Self::Mode => "mode",
            Self::Median => "median",
            Self::Count => "count",
        }
    }

    /// Suffix appended to the composed exposed field name.
    pub const fn capitalized(self) -> &'static str {
        match self {
            Self::Sum => "Sum",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::Mean => "Mean",
            Self::Mode => "Mode",
            Self::Median => "Median",
            Self::Count => "Count",
        }
    }

    /// Scalar kind of the operation's result. Count is the only integer.
    pub const fn scalar(self) -> ScalarKind {
        match self {
            Self::Count => ScalarKind::Int,
            _ => ScalarKind::Float,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Sum => descriptions::SUM,
            Self::Minimum => descriptions::MINIMUM,
            Self::Maximum => descriptions::MAXIMUM,
            Self::Mean => descriptions::MEAN,
            Self::Mode => descriptions::MODE,
            Self::Median => descriptions::MEDIAN,
            Self::Count => descriptions::COUNT,
        }
    }
}

/// Fixed field names describing the grouping key of a result row.
///
/// Grouping fields are not looked up by operation name; the vocabulary is
/// just `path` and `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupedByField {
    Path,
    Value,
}

impl GroupedByField {
    pub const ALL: [Self; 2] = [Self::Path, Self::Value];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Value => "value",
        }
    }

    pub const fn scalar(self) -> ScalarKind {
        match self {
            Self::Path => ScalarKind::StringList,
            Self::Value => ScalarKind::String,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Path => descriptions::GROUPED_BY_PATH,
            Self::Value => descriptions::GROUPED_BY_VALUE,
        }
    }
}
