//! Per-type domain functions.
//!
//! Each axis type owns a small configuration struct whose `compute` turns a
//! dataset into a [`Domain`]. [`DomainFunction`] is the closed set of them, so
//! callers dispatch with an exhaustive `match` instead of a lookup table.

mod linear;
mod ordinal;
mod time;

pub use linear::LinearDomain;
pub use ordinal::OrdinalDomain;
pub use time::{TimeDomain, minimum_gap};

use serde::{Deserialize, Serialize};

use crate::core::{AxisType, Datum, Extent, Orientation, PaddingStrategy};

/// Default field read from each row for cross-axis values.
pub const CROSS_VALUE: &str = "crossValue";
/// Default field read from each row for main-axis values.
pub const MAIN_VALUE: &str = "mainValue";

/// The values an axis must span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    /// Unique category keys, in display order.
    Categories(Vec<String>),
    /// A numeric (or epoch-millisecond) range.
    Continuous(Extent),
    /// No value survived filtering and nothing rescued the extent.
    Undefined,
}

impl Domain {
    #[must_use]
    pub fn categories(&self) -> Option<&[String]> {
        match self {
            Self::Categories(keys) => Some(keys),
            _ => None,
        }
    }

    #[must_use]
    pub fn extent(&self) -> Option<Extent> {
        match self {
            Self::Continuous(extent) => Some(*extent),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Categories(keys) => keys.is_empty(),
            Self::Continuous(_) => false,
            Self::Undefined => true,
        }
    }
}

impl From<Option<Extent>> for Domain {
    fn from(value: Option<Extent>) -> Self {
        value.map_or(Self::Undefined, Self::Continuous)
    }
}

/// A configured domain strategy for one axis type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainFunction {
    None,
    Ordinal(OrdinalDomain),
    Time(TimeDomain),
    Linear(LinearDomain),
}

impl DomainFunction {
    /// Default strategy for `axis_type`, reading `value_names` from each row.
    #[must_use]
    pub fn for_type(axis_type: AxisType, value_names: Vec<String>) -> Self {
        match axis_type {
            AxisType::None => Self::None,
            AxisType::Ordinal => Self::Ordinal(OrdinalDomain::new(value_names)),
            AxisType::Time => Self::Time(TimeDomain::new(value_names)),
            AxisType::Linear => Self::Linear(LinearDomain::new(value_names)),
        }
    }

    #[must_use]
    pub fn axis_type(&self) -> AxisType {
        match self {
            Self::None => AxisType::None,
            Self::Ordinal(_) => AxisType::Ordinal,
            Self::Time(_) => AxisType::Time,
            Self::Linear(_) => AxisType::Linear,
        }
    }

    #[must_use]
    pub fn with_orientation(self, orient: Orientation) -> Self {
        match self {
            Self::Ordinal(d) => Self::Ordinal(d.with_orientation(orient)),
            other => other,
        }
    }

    /// Values forced into a continuous domain. Ignored by categorical strategies.
    #[must_use]
    pub fn with_include(self, include: Vec<f64>) -> Self {
        match self {
            Self::Time(d) => Self::Time(d.with_include(include)),
            Self::Linear(d) => Self::Linear(d.with_include(include)),
            other => other,
        }
    }

    #[must_use]
    pub fn with_padding(self, padding: PaddingStrategy) -> Self {
        match self {
            Self::Time(d) => Self::Time(d.with_padding(padding)),
            Self::Linear(d) => Self::Linear(d.with_padding(padding)),
            other => other,
        }
    }

    #[must_use]
    pub fn with_pad(self, pad: (f64, f64)) -> Self {
        match self {
            Self::Time(d) => Self::Time(d.with_pad(pad)),
            Self::Linear(d) => Self::Linear(d.with_pad(pad)),
            other => other,
        }
    }

    #[must_use]
    pub fn with_symmetrical_about(self, pivot: Option<f64>) -> Self {
        match self {
            Self::Time(d) => Self::Time(d.with_symmetrical_about(pivot)),
            Self::Linear(d) => Self::Linear(d.with_symmetrical_about(pivot)),
            other => other,
        }
    }

    /// Runs the strategy over `data`.
    #[must_use]
    pub fn compute(&self, data: &[Datum]) -> Domain {
        match self {
            Self::None => Domain::Categories(Vec::new()),
            Self::Ordinal(d) => Domain::Categories(d.compute(data)),
            Self::Time(d) => d.compute(data).into(),
            Self::Linear(d) => d.compute(data).into(),
        }
    }
}

/// Unions `include` into `extent` and mirrors it around `pivot`.
///
/// Shared by the continuous strategies; an undefined extent is rescued by a
/// non-empty include set.
pub(crate) fn apply_include_and_symmetry(
    extent: Option<Extent>,
    include: &[f64],
    pivot: Option<f64>,
) -> Option<Extent> {
    let included = Extent::from_values(include.iter().copied());
    let extent = match (extent, included) {
        (Some(e), Some(i)) => Some(e.union(i)),
        (e, i) => e.or(i),
    }?;

    Some(match pivot {
        Some(pivot) if pivot.is_finite() => {
            let half_range = (extent.max - pivot).abs().max((extent.min - pivot).abs());
            Extent::new(pivot - half_range, pivot + half_range)
        }
        _ => extent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_rescues_undefined_extent() {
        let extent = apply_include_and_symmetry(None, &[0.0], None);
        assert_eq!(extent, Some(Extent::new(0.0, 0.0)));
    }

    #[test]
    fn symmetry_uses_larger_distance_from_pivot() {
        let extent = apply_include_and_symmetry(Some(Extent::new(-2.0, 8.0)), &[], Some(0.0));
        assert_eq!(extent, Some(Extent::new(-8.0, 8.0)));
    }

    #[test]
    fn none_strategy_yields_empty_categories() {
        let domain = DomainFunction::None.compute(&[]);
        assert_eq!(domain, Domain::Categories(Vec::new()));
        assert!(domain.is_empty());
    }
}
