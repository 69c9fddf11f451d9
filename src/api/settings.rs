use serde::{Deserialize, Serialize};

use crate::core::{
    AxisRole, ColumnDescriptor, Extent, LinearScale, Orientation, SplitAssignment, Viewport,
};
use crate::error::{AxisError, AxisResult};

/// Pan/zoom state: scale factor `k` and translation `(x, y)` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Pixel position before the transform for a transformed pixel position.
    #[must_use]
    pub fn invert(self, pixel: f64, orient: Orientation) -> f64 {
        let translate = match orient {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        };
        (pixel - translate) / self.k
    }

    /// Domain visible across `range` once `extent` is viewed through this
    /// transform.
    pub fn rescale(
        self,
        extent: Extent,
        range: (f64, f64),
        orient: Orientation,
    ) -> AxisResult<Extent> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(AxisError::InvalidData(
                "zoom scale factor must be finite and > 0".to_owned(),
            ));
        }
        let scale = LinearScale::new(extent, range)?;
        let start = scale.pixel_to_domain(self.invert(range.0, orient))?;
        let end = scale.pixel_to_domain(self.invert(range.1, orient))?;
        Ok(Extent::new(start.min(end), start.max(end)))
    }
}

/// Running extents threaded back between renders to keep axes stable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisMemo {
    pub cross: Option<Extent>,
    pub main: Option<Extent>,
    pub alt_main: Option<Extent>,
}

/// Caller-owned chart settings read by the axis engine.
///
/// The engine never mutates this value; hosts update it between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSettings {
    pub cross_values: Vec<ColumnDescriptor>,
    pub main_values: Vec<ColumnDescriptor>,
    pub split_values: Vec<ColumnDescriptor>,
    /// Measure names shown against the alternate main axis.
    pub split_main_values: Vec<String>,
    pub size: Viewport,
    pub zoom: Option<ZoomTransform>,
    pub axis_memo: AxisMemo,
}

impl ChartSettings {
    #[must_use]
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cross_values(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.cross_values = columns;
        self
    }

    #[must_use]
    pub fn with_main_values(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.main_values = columns;
        self
    }

    #[must_use]
    pub fn with_split_values(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.split_values = columns;
        self
    }

    #[must_use]
    pub fn with_split_main_values(mut self, names: Vec<String>) -> Self {
        self.split_main_values = names;
        self
    }

    #[must_use]
    pub fn columns(&self, role: AxisRole) -> &[ColumnDescriptor] {
        match role {
            AxisRole::CrossValues => &self.cross_values,
            AxisRole::MainValues => &self.main_values,
            AxisRole::SplitValues => &self.split_values,
        }
    }

    #[must_use]
    pub fn split_assignment(&self) -> SplitAssignment {
        SplitAssignment::new(self.split_main_values.iter().cloned())
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse chart settings: {e}")))
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize chart settings: {e}"))
        })
    }
}
