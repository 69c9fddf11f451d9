use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{AxisError, AxisResult};

/// Separator used to join the segments of a composite category key.
pub const COMPOSITE_KEY_DELIMITER: &str = "|";

/// Pixel size of the render container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Screen direction an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Storage type of a configured column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Date,
    Datetime,
    Boolean,
}

impl ColumnType {
    #[must_use]
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Datetime)
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl FromStr for ColumnType {
    type Err = AxisError;

    fn from_str(s: &str) -> AxisResult<Self> {
        match s {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "date" => Ok(Self::Date),
            "datetime" => Ok(Self::Datetime),
            "boolean" => Ok(Self::Boolean),
            other => Err(AxisError::UnknownColumnType(other.to_owned())),
        }
    }
}

/// A named, typed column assigned to an axis role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// A `[min, max]` numeric range.
///
/// Temporal extents are expressed in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Smallest extent covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Builds the extent of an iterator of values, skipping non-finite ones.
    ///
    /// Returns `None` when no finite value is present.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                Some(extent) => Some(Self::new(extent.min.min(v), extent.max.max(v))),
                None => Some(Self::new(v, v)),
            })
    }
}

/// A scalar (or nested list of scalars) stored in a row field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::Int(time.timestamp_millis())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric reading of a scalar value.
    ///
    /// Numeric strings parse as numbers; anything else (including lists) is `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) if v.is_finite() => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Pushes every numeric leaf of this value (recursing into lists) onto `out`.
    pub fn collect_numbers(&self, out: &mut Vec<f64>) {
        match self {
            Self::List(items) => {
                for item in items {
                    item.collect_numbers(out);
                }
            }
            other => {
                if let Some(v) = other.as_f64() {
                    out.push(v);
                }
            }
        }
    }

    /// Reads the value as epoch milliseconds.
    ///
    /// Numbers are taken as milliseconds; strings may be RFC 3339 timestamps or
    /// `YYYY-MM-DD` dates (midnight UTC). Lists read their first element.
    #[must_use]
    pub fn as_timestamp_millis(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) if v.is_finite() => Some(*v),
            Self::Text(s) => parse_timestamp_millis(s),
            Self::List(items) => items.first().and_then(Self::as_timestamp_millis),
            _ => None,
        }
    }

    /// Text segments this value contributes to a composite category key.
    #[must_use]
    pub fn key_segments(&self) -> SmallVec<[String; 4]> {
        match self {
            Self::List(items) => items.iter().map(ToString::to_string).collect(),
            other => smallvec::smallvec![other.to_string()],
        }
    }

    /// The value rendered as a category key, list segments joined by `|`.
    #[must_use]
    pub fn category_key(&self) -> String {
        self.key_segments().join(COMPOSITE_KEY_DELIMITER)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(COMPOSITE_KEY_DELIMITER)?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

fn parse_timestamp_millis(input: &str) -> Option<f64> {
    let input = input.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(input) {
        return Some(time.timestamp_millis() as f64);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().timestamp_millis() as f64);
    }
    input.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One record of the dataset: field name to value, in insertion order.
pub type Row = IndexMap<String, Value>;

/// Builds a [`Row`] from `(field, value)` pairs.
pub fn row<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// A keyed sequence of data, typically one measure's points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub key: String,
    pub data: Vec<Datum>,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            key: key.into(),
            data: rows.into_iter().map(Datum::Row).collect(),
        }
    }
}

/// A node of the (possibly nested) dataset handed to domain functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Row(Row),
    Series(Series),
    Group(Vec<Datum>),
}

impl Datum {
    /// Appends every row under this node, depth-first, onto `out`.
    pub fn collect_rows<'a>(&'a self, out: &mut Vec<&'a Row>) {
        match self {
            Self::Row(row) => out.push(row),
            Self::Series(series) => {
                for datum in &series.data {
                    datum.collect_rows(out);
                }
            }
            Self::Group(items) => {
                for datum in items {
                    datum.collect_rows(out);
                }
            }
        }
    }
}

impl From<Row> for Datum {
    fn from(value: Row) -> Self {
        Self::Row(value)
    }
}

impl From<Series> for Datum {
    fn from(value: Series) -> Self {
        Self::Series(value)
    }
}

/// Flattens a nested dataset into its rows, preserving order.
#[must_use]
pub fn flatten_rows(data: &[Datum]) -> Vec<&Row> {
    let mut out = Vec::new();
    for datum in data {
        datum.collect_rows(&mut out);
    }
    out
}
