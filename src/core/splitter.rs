//! Partitioning measures across a primary and an alternate main axis.

use tracing::debug;

use crate::core::{COMPOSITE_KEY_DELIMITER, ColumnDescriptor, Datum, Series, Value};

/// Measures the user moved onto the alternate axis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitAssignment {
    alternate: Vec<String>,
}

impl SplitAssignment {
    #[must_use]
    pub fn new(alternate: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            alternate: alternate.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a series or measure name belongs on the alternate axis.
    ///
    /// Split series are named `"<split value>|<measure>"`, so only the last
    /// segment is matched.
    #[must_use]
    pub fn is_alternate(&self, name: &str) -> bool {
        let measure = name
            .rsplit(COMPOSITE_KEY_DELIMITER)
            .next()
            .unwrap_or(name);
        self.alternate.iter().any(|alt| alt == measure)
    }

    /// True when at least one configured measure is alternate.
    #[must_use]
    pub fn have_split(&self, main_values: &[ColumnDescriptor]) -> bool {
        main_values.iter().any(|c| self.is_alternate(&c.name))
    }
}

/// How series excluded from one side of the split are treated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitStrategy {
    /// Drop excluded series.
    #[default]
    Filter,
    /// Keep every top-level series but null `value_name` in excluded ones.
    BlankSeries { value_name: String },
    /// Like `BlankSeries`, for series nested one group level down.
    BlankGrouped { value_name: String },
}

impl SplitStrategy {
    /// Applies the strategy; `is_included` receives series keys.
    #[must_use]
    pub fn apply(&self, data: &[Datum], is_included: &dyn Fn(&str) -> bool) -> Vec<Datum> {
        match self {
            Self::Filter => filter_series(data, is_included),
            Self::BlankSeries { value_name } => data
                .iter()
                .map(|datum| blank_if_excluded(datum, value_name, is_included))
                .collect(),
            Self::BlankGrouped { value_name } => data
                .iter()
                .map(|datum| match datum {
                    Datum::Group(items) => Datum::Group(
                        items
                            .iter()
                            .map(|d| blank_if_excluded(d, value_name, is_included))
                            .collect(),
                    ),
                    other => blank_if_excluded(other, value_name, is_included),
                })
                .collect(),
        }
    }
}

/// Output of [`split`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitData {
    pub have_split: bool,
    /// Primary-axis data (everything when there is no split).
    pub data: Vec<Datum>,
    pub alt_data: Option<Vec<Datum>>,
}

/// Splits `data` into primary and alternate halves with `strategy`.
#[must_use]
pub fn split(
    assignment: &SplitAssignment,
    main_values: &[ColumnDescriptor],
    data: &[Datum],
    strategy: &SplitStrategy,
) -> SplitData {
    split_with(assignment, main_values, data, |data, included| {
        strategy.apply(data, included)
    })
}

/// [`split`] with a caller-provided partition function.
pub fn split_with<F>(
    assignment: &SplitAssignment,
    main_values: &[ColumnDescriptor],
    data: &[Datum],
    split_fn: F,
) -> SplitData
where
    F: Fn(&[Datum], &dyn Fn(&str) -> bool) -> Vec<Datum>,
{
    let have_split = assignment.have_split(main_values);
    debug!(
        have_split,
        measures = main_values.len(),
        "split measures across main axes"
    );
    if !have_split {
        return SplitData {
            have_split,
            data: data.to_vec(),
            alt_data: None,
        };
    }

    let primary = split_fn(data, &|key| !assignment.is_alternate(key));
    let alternate = split_fn(data, &|key| assignment.is_alternate(key));
    SplitData {
        have_split,
        data: primary,
        alt_data: Some(alternate),
    }
}

fn filter_series(data: &[Datum], is_included: &dyn Fn(&str) -> bool) -> Vec<Datum> {
    data.iter()
        .filter_map(|datum| match datum {
            Datum::Series(series) if !is_included(&series.key) => None,
            Datum::Group(items) => Some(Datum::Group(filter_series(items, is_included))),
            Datum::Row(row) => match row.get("key") {
                Some(Value::Text(key)) if !is_included(key) => None,
                _ => Some(datum.clone()),
            },
            other => Some(other.clone()),
        })
        .collect()
}

fn blank_if_excluded(
    datum: &Datum,
    value_name: &str,
    is_included: &dyn Fn(&str) -> bool,
) -> Datum {
    match datum {
        Datum::Series(series) if !is_included(&series.key) => Datum::Series(Series {
            key: series.key.clone(),
            data: series
                .data
                .iter()
                .map(|d| blank_value(d, value_name))
                .collect(),
        }),
        other => other.clone(),
    }
}

fn blank_value(datum: &Datum, value_name: &str) -> Datum {
    match datum {
        Datum::Row(row) => {
            let mut row = row.clone();
            if let Some(value) = row.get_mut(value_name) {
                *value = Value::Null;
            }
            Datum::Row(row)
        }
        Datum::Series(series) => Datum::Series(Series {
            key: series.key.clone(),
            data: series.data.iter().map(|d| blank_value(d, value_name)).collect(),
        }),
        Datum::Group(items) => {
            Datum::Group(items.iter().map(|d| blank_value(d, value_name)).collect())
        }
    }
}
