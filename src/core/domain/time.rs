use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{Datum, Extent, PadUnit, PaddingStrategy, flatten_rows};

use super::{CROSS_VALUE, apply_include_and_symmetry};

/// Temporal extent in epoch milliseconds.
///
/// Unless an explicit pad is configured, the extent is padded by half the
/// smallest gap between distinct timestamps, so edge points keep clear of the
/// axis ends.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDomain {
    value_names: Vec<String>,
    include: Vec<f64>,
    symmetrical_about: Option<f64>,
    padding: PaddingStrategy,
    explicit_pad: bool,
}

impl Default for TimeDomain {
    fn default() -> Self {
        Self::new(vec![CROSS_VALUE.to_owned()])
    }
}

impl TimeDomain {
    #[must_use]
    pub fn new(value_names: Vec<String>) -> Self {
        Self {
            value_names,
            include: Vec::new(),
            symmetrical_about: None,
            padding: PaddingStrategy::standard((0.0, 0.0), PadUnit::Domain),
            explicit_pad: false,
        }
    }

    #[must_use]
    pub fn with_include(mut self, include: Vec<f64>) -> Self {
        self.include = include;
        self
    }

    #[must_use]
    pub fn with_symmetrical_about(mut self, pivot: Option<f64>) -> Self {
        self.symmetrical_about = pivot;
        self
    }

    /// Replaces the padding strategy; its pad amounts take over from the
    /// automatic minimum-gap pad.
    #[must_use]
    pub fn with_padding(mut self, padding: PaddingStrategy) -> Self {
        self.padding = padding;
        self.explicit_pad = true;
        self
    }

    #[must_use]
    pub fn with_pad(mut self, pad: (f64, f64)) -> Self {
        self.padding = self.padding.with_pad(pad);
        self.explicit_pad = true;
        self
    }

    #[must_use]
    pub fn value_names(&self) -> &[String] {
        &self.value_names
    }

    #[must_use]
    pub fn compute(&self, data: &[Datum]) -> Option<Extent> {
        let rows = flatten_rows(data);
        let per_name: Vec<Vec<f64>> = self
            .value_names
            .iter()
            .map(|name| {
                rows.iter()
                    .filter_map(|row| row.get(name).and_then(|v| v.as_timestamp_millis()))
                    .collect()
            })
            .collect();

        let raw = Extent::from_values(per_name.iter().flatten().copied());
        let extent = apply_include_and_symmetry(raw, &self.include, self.symmetrical_about)?;

        let padding = if self.explicit_pad {
            self.padding
        } else {
            let all: Vec<f64> = per_name.iter().flatten().copied().collect();
            let half = minimum_gap(&all).map_or(0.0, |gap| gap / 2.0);
            PaddingStrategy::standard((half, half), PadUnit::Domain)
        };

        let padded = padding.apply(extent);
        trace!(
            rows = rows.len(),
            min = padded.min,
            max = padded.max,
            "time domain"
        );
        Some(padded)
    }
}

/// Smallest nonzero gap between consecutive distinct sorted values.
///
/// Returns `None` when fewer than two distinct finite values exist.
#[must_use]
pub fn minimum_gap(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<OrderedFloat<f64>> = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .map(OrderedFloat)
        .collect();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .windows(2)
        .map(|pair| pair[1].0 - pair[0].0)
        .fold(None, |acc: Option<f64>, gap| {
            Some(acc.map_or(gap, |current| current.min(gap)))
        })
}
