use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ColumnDescriptor;
use crate::error::{AxisError, AxisResult};

/// The kind of axis a role needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// No columns assigned; empty categorical axis.
    None,
    Ordinal,
    Time,
    Linear,
}

impl AxisType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ordinal => "ordinal",
            Self::Time => "time",
            Self::Linear => "linear",
        }
    }

    #[must_use]
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Time | Self::Linear)
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisType {
    type Err = AxisError;

    fn from_str(s: &str) -> AxisResult<Self> {
        match s {
            "none" => Ok(Self::None),
            "ordinal" => Ok(Self::Ordinal),
            "time" => Ok(Self::Time),
            "linear" => Ok(Self::Linear),
            other => Err(AxisError::UnknownAxisType(other.to_owned())),
        }
    }
}

/// Column role an axis is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AxisRole {
    /// Categorical / independent-variable columns.
    #[default]
    CrossValues,
    /// Measured / dependent-variable columns.
    MainValues,
    SplitValues,
}

impl AxisRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrossValues => "crossValues",
            Self::MainValues => "mainValues",
            Self::SplitValues => "splitValues",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which axis type a role's columns need.
///
/// Rules, in order: no columns gives `None`; a temporal column (unless `Time`
/// is excluded) gives `Time`; a numeric column (unless `Linear` is excluded)
/// gives `Linear`; an excluded `Ordinal` forces `Linear`; otherwise `Ordinal`.
/// When `setting_value` is set, only the column with that name is inspected.
///
/// More than one cross-axis column forms a composite key, which only an
/// ordinal axis can show. Such a role resolves to `Ordinal`, and fails with
/// [`AxisError::MultiColumnCrossAxis`] when ordinal is excluded.
pub fn infer_axis_type(
    columns: &[ColumnDescriptor],
    role: AxisRole,
    exclude: Option<AxisType>,
    setting_value: Option<&str>,
) -> AxisResult<AxisType> {
    if columns.is_empty() {
        return Ok(AxisType::None);
    }

    let candidates: Vec<&ColumnDescriptor> = match setting_value {
        Some(name) => columns.iter().filter(|c| c.name == name).collect(),
        None => columns.iter().collect(),
    };

    if role == AxisRole::CrossValues && candidates.len() > 1 {
        if exclude == Some(AxisType::Ordinal) {
            warn!(
                columns = candidates.len(),
                "rejecting non-ordinal axis over composite cross values"
            );
            return Err(AxisError::MultiColumnCrossAxis {
                columns: candidates.len(),
            });
        }
        return Ok(AxisType::Ordinal);
    }

    let any = |pred: fn(&ColumnDescriptor) -> bool| candidates.iter().any(|c| pred(c));

    if exclude != Some(AxisType::Time) && any(|c| c.column_type.is_temporal()) {
        return Ok(AxisType::Time);
    }
    if exclude != Some(AxisType::Linear) && any(|c| c.column_type.is_numeric()) {
        return Ok(AxisType::Linear);
    }
    if exclude == Some(AxisType::Ordinal) {
        return Ok(AxisType::Linear);
    }
    Ok(AxisType::Ordinal)
}
