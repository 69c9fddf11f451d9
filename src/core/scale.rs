use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisType, Domain, Extent};
use crate::error::{AxisError, AxisResult};

/// Which scale family an axis descriptor maps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Band,
    Linear,
    Time,
}

impl ScaleKind {
    #[must_use]
    pub fn for_type(axis_type: AxisType) -> Self {
        match axis_type {
            AxisType::None | AxisType::Ordinal => Self::Band,
            AxisType::Time => Self::Time,
            AxisType::Linear => Self::Linear,
        }
    }

    /// Instantiates a concrete scale for `domain` over the pixel `range`.
    pub fn instantiate(self, domain: &Domain, range: (f64, f64)) -> AxisResult<AxisScale> {
        validate_range(range)?;
        match (self, domain) {
            (Self::Band, Domain::Categories(keys)) => {
                Ok(AxisScale::Band(BandScale::new(keys.clone(), range)))
            }
            (Self::Linear, Domain::Continuous(extent)) => {
                Ok(AxisScale::Linear(LinearScale::new(*extent, range)?))
            }
            (Self::Time, Domain::Continuous(extent)) => {
                Ok(AxisScale::Time(TimeScale::new(*extent, range)?))
            }
            (_, Domain::Undefined) => Err(AxisError::InvalidData(
                "cannot build a scale over an undefined domain".to_owned(),
            )),
            (kind, _) => Err(AxisError::InvalidData(format!(
                "{kind:?} scale does not match the domain kind"
            ))),
        }
    }
}

fn validate_range(range: (f64, f64)) -> AxisResult<()> {
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(AxisError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// A scale bound to a pixel range.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Band(BandScale),
    Linear(LinearScale),
    Time(TimeScale),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Extent,
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Extent, range: (f64, f64)) -> AxisResult<Self> {
        if !domain.is_finite() || domain.min == domain.max {
            return Err(AxisError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self { domain, range })
    }

    #[must_use]
    pub fn domain(self) -> Extent {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain.min) / self.domain.span();
        self.range.0 + normalized * (self.range.1 - self.range.0)
    }

    pub fn pixel_to_domain(self, pixel: f64) -> AxisResult<f64> {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return Err(AxisError::InvalidData(
                "cannot invert a zero-width range".to_owned(),
            ));
        }
        if !pixel.is_finite() {
            return Err(AxisError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range.0) / span;
        Ok(self.domain.min + normalized * self.domain.span())
    }
}

/// Linear mapping over epoch-millisecond timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Extent, range: (f64, f64)) -> AxisResult<Self> {
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> Extent {
        self.linear.domain()
    }

    #[must_use]
    pub fn time_to_pixel(self, millis: f64) -> f64 {
        self.linear.domain_to_pixel(millis)
    }

    pub fn pixel_to_time(self, pixel: f64) -> AxisResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}

/// Evenly spaced bands, one per category key.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    index: IndexMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    #[must_use]
    pub fn new(keys: Vec<String>, range: (f64, f64)) -> Self {
        let index = keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();
        Self {
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in band-step units.
    #[must_use]
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between the starts of adjacent bands (signed with the range).
    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.index.len() as f64;
        let denom = (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        (self.range.1 - self.range.0) / denom
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Pixel start of the band for `key`.
    #[must_use]
    pub fn band_start(&self, key: &str) -> Option<f64> {
        let i = *self.index.get(key)?;
        let step = self.step();
        Some(self.range.0 + step * self.padding_outer + step * i as f64)
    }

    #[must_use]
    pub fn band_center(&self, key: &str) -> Option<f64> {
        self.band_start(key).map(|start| start + self.bandwidth() / 2.0)
    }

    #[must_use]
    pub fn band_end(&self, key: &str) -> Option<f64> {
        self.band_start(key).map(|start| start + self.bandwidth())
    }
}
