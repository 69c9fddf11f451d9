use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::{AxisType, Extent, OrdinalDomain, Row};

/// An axis-space reading of one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisValue {
    /// Composite category key.
    Category(String),
    /// Epoch milliseconds.
    Time(f64),
    Number(f64),
}

/// Turns a row into its axis value.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelFunction {
    Category(OrdinalDomain),
    Time { value_name: String },
    Number { value_name: String },
}

impl LabelFunction {
    #[must_use]
    pub fn for_type(axis_type: AxisType, value_names: &[String]) -> Self {
        let first = value_names.first().cloned().unwrap_or_default();
        match axis_type {
            AxisType::None | AxisType::Ordinal => {
                Self::Category(OrdinalDomain::new(value_names.to_vec()))
            }
            AxisType::Time => Self::Time { value_name: first },
            AxisType::Linear => Self::Number { value_name: first },
        }
    }

    /// `None` when the row lacks a readable value for a continuous axis.
    #[must_use]
    pub fn label(&self, row: &Row) -> Option<AxisValue> {
        match self {
            Self::Category(domain) => Some(AxisValue::Category(domain.key_of(row))),
            Self::Time { value_name } => row
                .get(value_name)
                .and_then(|v| v.as_timestamp_millis())
                .map(AxisValue::Time),
            Self::Number { value_name } => {
                row.get(value_name).and_then(|v| v.as_f64()).map(AxisValue::Number)
            }
        }
    }
}

/// Formats tick values into tick label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// Category segments print as-is.
    Category,
    /// Granularity-driven UTC date/time text.
    Time,
    /// Grouped decimal with a fixed number of fraction digits.
    Number { precision: u8 },
}

impl TickFormat {
    #[must_use]
    pub fn for_domain(axis_type: AxisType, extent: Option<Extent>) -> Self {
        match axis_type {
            AxisType::None | AxisType::Ordinal => Self::Category,
            AxisType::Time => Self::Time,
            AxisType::Linear => Self::Number {
                precision: extent.map_or(2, |e| precision_for_span(e.span().abs())),
            },
        }
    }

    #[must_use]
    pub fn format(self, value: &AxisValue) -> String {
        match (self, value) {
            (_, AxisValue::Category(text)) => text.clone(),
            (Self::Time, AxisValue::Time(ms) | AxisValue::Number(ms)) => format_time_tick(*ms),
            (Self::Number { precision }, AxisValue::Number(v) | AxisValue::Time(v)) => {
                format_grouped_decimal(*v, usize::from(precision))
            }
            (Self::Category, AxisValue::Number(v)) => format_grouped_decimal(*v, 2),
            (Self::Category, AxisValue::Time(ms)) => format_time_tick(*ms),
        }
    }

    #[must_use]
    pub fn format_number(self, value: f64) -> String {
        match self {
            Self::Time => format_time_tick(value),
            Self::Number { precision } => format_grouped_decimal(value, usize::from(precision)),
            Self::Category => format_grouped_decimal(value, 2),
        }
    }
}

/// Fraction digits suited to a domain of the given span.
#[must_use]
pub fn precision_for_span(span: f64) -> u8 {
    if !span.is_finite() || span <= 0.0 {
        return 2;
    }
    if span >= 100.0 {
        0
    } else if span >= 1.0 {
        2
    } else {
        let digits = (-span.log10()).ceil() + 2.0;
        digits.clamp(2.0, 8.0) as u8
    }
}

/// Formats `value` with `precision` fraction digits and `,` thousands groups.
#[must_use]
pub fn format_grouped_decimal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let text = format!("{:.precision$}", value.abs());
    let (int_part, fraction) = match text.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = grouped.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Formats an epoch-millisecond tick at the coarsest granularity that
/// represents it exactly: milliseconds, seconds, minutes, hours, day, month
/// or year.
#[must_use]
pub fn format_time_tick(millis: f64) -> String {
    if !millis.is_finite() {
        return "nan".to_owned();
    }
    let Some(time) = DateTime::<Utc>::from_timestamp_millis(millis.round() as i64) else {
        return format_grouped_decimal(millis, 0);
    };

    let pattern = if time.timestamp_subsec_millis() != 0 {
        ".%3f"
    } else if time.second() != 0 {
        ":%S"
    } else if time.minute() != 0 {
        "%I:%M"
    } else if time.hour() != 0 {
        "%I %p"
    } else if time.day() != 1 {
        if time.weekday() == Weekday::Sun {
            "%b %d"
        } else {
            "%a %d"
        }
    } else if time.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    time.format(pattern).to_string()
}
