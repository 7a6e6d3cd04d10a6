//! Aggregate statistics a binder can evaluate over a span.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aggregation applied to one observation type over a time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Min,
    Max,
    Avg,
    Sum,
    Count,
}

impl Aggregate {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Sum => "sum",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "avg" => Ok(Self::Avg),
            "sum" => Ok(Self::Sum),
            "count" => Ok(Self::Count),
            other => Err(format!("unknown aggregate '{other}'")),
        }
    }
}

/// A numeric value tagged with its unit, as returned by a data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_names_round_trip() {
        for agg in [
            Aggregate::Min,
            Aggregate::Max,
            Aggregate::Avg,
            Aggregate::Sum,
            Aggregate::Count,
        ] {
            assert_eq!(agg.as_str().parse::<Aggregate>(), Ok(agg));
        }
    }

    #[test]
    fn unknown_aggregate_is_rejected() {
        assert!("median".parse::<Aggregate>().is_err());
    }
}
