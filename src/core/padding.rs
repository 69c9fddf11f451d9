use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Extent;
use crate::error::{AxisError, AxisResult};

/// How padding amounts are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PadUnit {
    /// Pad amounts are fractions of the extent's span.
    #[default]
    Percent,
    /// Pad amounts are absolute domain units.
    Domain,
}

impl FromStr for PadUnit {
    type Err = AxisError;

    fn from_str(s: &str) -> AxisResult<Self> {
        match s {
            "percent" => Ok(Self::Percent),
            "domain" => Ok(Self::Domain),
            other => Err(AxisError::UnknownPadUnit(other.to_owned())),
        }
    }
}

/// Padding variants applied to a raw data extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PaddingMode {
    /// Expand both bounds by the configured amounts.
    #[default]
    Standard,
    /// Like `Standard`, but a bound never crosses zero unless the raw data did.
    HardLimitZero,
}

/// A padding strategy: `extent -> padded extent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddingStrategy {
    #[serde(default)]
    pub mode: PaddingMode,
    /// `(low, high)` amounts.
    #[serde(default)]
    pub pad: (f64, f64),
    #[serde(default)]
    pub pad_unit: PadUnit,
}

impl Default for PaddingStrategy {
    fn default() -> Self {
        Self::standard((0.0, 0.0), PadUnit::Percent)
    }
}

impl PaddingStrategy {
    #[must_use]
    pub const fn standard(pad: (f64, f64), pad_unit: PadUnit) -> Self {
        Self {
            mode: PaddingMode::Standard,
            pad,
            pad_unit,
        }
    }

    #[must_use]
    pub const fn hard_limit_zero(pad: (f64, f64), pad_unit: PadUnit) -> Self {
        Self {
            mode: PaddingMode::HardLimitZero,
            pad,
            pad_unit,
        }
    }

    #[must_use]
    pub const fn with_pad(mut self, pad: (f64, f64)) -> Self {
        self.pad = pad;
        self
    }

    #[must_use]
    pub const fn with_pad_unit(mut self, pad_unit: PadUnit) -> Self {
        self.pad_unit = pad_unit;
        self
    }

    /// Applies the padding to `extent`.
    ///
    /// In percent mode a zero-width extent yields no padding.
    #[must_use]
    pub fn apply(self, extent: Extent) -> Extent {
        let delta = match self.pad_unit {
            PadUnit::Percent => extent.span(),
            PadUnit::Domain => 1.0,
        };
        let padded_min = extent.min - self.pad.0 * delta;
        let padded_max = extent.max + self.pad.1 * delta;

        match self.mode {
            PaddingMode::Standard => Extent::new(padded_min, padded_max),
            PaddingMode::HardLimitZero => Extent::new(
                if extent.min >= 0.0 && padded_min < 0.0 {
                    0.0
                } else {
                    padded_min
                },
                if extent.max <= 0.0 && padded_max > 0.0 {
                    0.0
                } else {
                    padded_max
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_unit_pads_in_absolute_units() {
        let padded =
            PaddingStrategy::standard((2.0, 3.0), PadUnit::Domain).apply(Extent::new(0.0, 1.0));
        assert_eq!(padded, Extent::new(-2.0, 4.0));
    }

    #[test]
    fn hard_limit_zero_clamps_upper_bound_of_negative_data() {
        let padded = PaddingStrategy::hard_limit_zero((0.1, 0.1), PadUnit::Percent)
            .apply(Extent::new(-10.0, 0.0));
        assert_eq!(padded.max, 0.0);
        assert!((padded.min + 11.0).abs() <= 1e-9);
    }

    #[test]
    fn hard_limit_zero_keeps_padding_when_data_straddles_zero() {
        let padded = PaddingStrategy::hard_limit_zero((0.5, 0.5), PadUnit::Domain)
            .apply(Extent::new(-1.0, 1.0));
        assert_eq!(padded, Extent::new(-1.5, 1.5));
    }

    #[test]
    fn unknown_pad_unit_is_rejected() {
        let err = "pixels".parse::<PadUnit>().expect_err("must reject");
        assert!(matches!(err, AxisError::UnknownPadUnit(unit) if unit == "pixels"));
    }
}
