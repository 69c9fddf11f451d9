use serde::{Deserialize, Serialize};

use crate::core::{
    AxisRole, AxisType, CROSS_VALUE, Extent, MAIN_VALUE, Orientation, PaddingStrategy,
};

/// Options for one axis build.
///
/// Passed by value into [`build_axis`](super::build_axis); every build is
/// independent of any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub role: AxisRole,
    #[serde(default)]
    pub exclude_type: Option<AxisType>,
    #[serde(default)]
    pub orient: Orientation,
    /// Restricts type inference to the column with this name.
    #[serde(default)]
    pub setting_value: Option<String>,
    /// Row fields read for axis values.
    pub value_names: Vec<String>,
    /// Values forced into a continuous domain (e.g. zero).
    #[serde(default)]
    pub include: Vec<f64>,
    #[serde(default)]
    pub padding: Option<PaddingStrategy>,
    /// Overrides the pad amounts of whichever padding strategy applies.
    #[serde(default)]
    pub pad: Option<(f64, f64)>,
    #[serde(default)]
    pub symmetrical_about: Option<f64>,
    /// Extent from the previous render; the new domain never shrinks inside it.
    #[serde(default)]
    pub memo: Option<Extent>,
}

impl AxisConfig {
    #[must_use]
    pub fn new(role: AxisRole, value_names: Vec<String>) -> Self {
        Self {
            role,
            exclude_type: None,
            orient: Orientation::Horizontal,
            setting_value: None,
            value_names,
            include: Vec::new(),
            padding: None,
            pad: None,
            symmetrical_about: None,
            memo: None,
        }
    }

    /// Horizontal cross axis reading `crossValue`.
    #[must_use]
    pub fn cross() -> Self {
        Self::new(AxisRole::CrossValues, vec![CROSS_VALUE.to_owned()])
    }

    /// Vertical main axis reading `mainValue`.
    #[must_use]
    pub fn main() -> Self {
        Self::new(AxisRole::MainValues, vec![MAIN_VALUE.to_owned()])
            .with_orient(Orientation::Vertical)
    }

    #[must_use]
    pub fn with_role(mut self, role: AxisRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_exclude_type(mut self, exclude_type: AxisType) -> Self {
        self.exclude_type = Some(exclude_type);
        self
    }

    #[must_use]
    pub fn with_orient(mut self, orient: Orientation) -> Self {
        self.orient = orient;
        self
    }

    #[must_use]
    pub fn with_setting_value(mut self, name: impl Into<String>) -> Self {
        self.setting_value = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value_name(mut self, name: impl Into<String>) -> Self {
        self.value_names = vec![name.into()];
        self
    }

    #[must_use]
    pub fn with_value_names(mut self, names: Vec<String>) -> Self {
        self.value_names = names;
        self
    }

    #[must_use]
    pub fn with_include(mut self, include: Vec<f64>) -> Self {
        self.include = include;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingStrategy) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_pad(mut self, pad: (f64, f64)) -> Self {
        self.pad = Some(pad);
        self
    }

    #[must_use]
    pub fn with_symmetrical_about(mut self, pivot: f64) -> Self {
        self.symmetrical_about = Some(pivot);
        self
    }

    #[must_use]
    pub fn with_memo(mut self, memo: Option<Extent>) -> Self {
        self.memo = memo;
        self
    }
}
