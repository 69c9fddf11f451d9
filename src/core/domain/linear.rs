use tracing::trace;

use crate::core::{Datum, Extent, PadUnit, PaddingStrategy, flatten_rows};

use super::{CROSS_VALUE, apply_include_and_symmetry};

/// Numeric extent across one or more row fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDomain {
    value_names: Vec<String>,
    include: Vec<f64>,
    symmetrical_about: Option<f64>,
    padding: PaddingStrategy,
}

impl Default for LinearDomain {
    fn default() -> Self {
        Self::new(vec![CROSS_VALUE.to_owned()])
    }
}

impl LinearDomain {
    /// Default padding leaves the low end alone and adds 10% headroom on top.
    pub const DEFAULT_PADDING: PaddingStrategy =
        PaddingStrategy::standard((0.0, 0.1), PadUnit::Percent);

    #[must_use]
    pub fn new(value_names: Vec<String>) -> Self {
        Self {
            value_names,
            include: Vec::new(),
            symmetrical_about: None,
            padding: Self::DEFAULT_PADDING,
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

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingStrategy) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_pad(mut self, pad: (f64, f64)) -> Self {
        self.padding = self.padding.with_pad(pad);
        self
    }

    #[must_use]
    pub fn value_names(&self) -> &[String] {
        &self.value_names
    }

    #[must_use]
    pub fn padding(&self) -> PaddingStrategy {
        self.padding
    }

    /// Missing and non-numeric values are skipped; list values contribute
    /// every numeric leaf.
    #[must_use]
    pub fn compute(&self, data: &[Datum]) -> Option<Extent> {
        let rows = flatten_rows(data);
        let mut values = Vec::with_capacity(rows.len() * self.value_names.len());
        for row in &rows {
            for name in &self.value_names {
                if let Some(value) = row.get(name) {
                    value.collect_numbers(&mut values);
                }
            }
        }

        let raw = Extent::from_values(values);
        let Some(extent) = apply_include_and_symmetry(raw, &self.include, self.symmetrical_about)
        else {
            trace!(rows = rows.len(), "linear domain undefined");
            return None;
        };

        let padded = self.padding.apply(extent);
        trace!(
            rows = rows.len(),
            min = padded.min,
            max = padded.max,
            "linear domain"
        );
        Some(padded)
    }
}
