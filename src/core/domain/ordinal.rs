use indexmap::IndexSet;
use tracing::trace;

use crate::core::{COMPOSITE_KEY_DELIMITER, Datum, Orientation, Row, flatten_rows};

use super::CROSS_VALUE;

/// Deduplicated category keys in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalDomain {
    value_names: Vec<String>,
    orient: Orientation,
}

impl Default for OrdinalDomain {
    fn default() -> Self {
        Self::new(vec![CROSS_VALUE.to_owned()])
    }
}

impl OrdinalDomain {
    #[must_use]
    pub fn new(value_names: Vec<String>) -> Self {
        Self {
            value_names,
            orient: Orientation::Horizontal,
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orient: Orientation) -> Self {
        self.orient = orient;
        self
    }

    #[must_use]
    pub fn value_names(&self) -> &[String] {
        &self.value_names
    }

    /// Category key of one row.
    ///
    /// List values join their segments with `|`; with several value names the
    /// per-name keys are joined the same way. Rows missing every field map to
    /// the empty key.
    #[must_use]
    pub fn key_of(&self, row: &Row) -> String {
        let mut parts = self
            .value_names
            .iter()
            .filter_map(|name| row.get(name).map(|v| v.category_key()));
        let Some(first) = parts.next() else {
            return String::new();
        };
        parts.fold(first, |mut key, part| {
            key.push_str(COMPOSITE_KEY_DELIMITER);
            key.push_str(&part);
            key
        })
    }

    /// Unique keys in first-seen order, reversed for vertical axes so the
    /// first category is drawn at the top.
    #[must_use]
    pub fn compute(&self, data: &[Datum]) -> Vec<String> {
        let rows = flatten_rows(data);
        let keys: IndexSet<String> = rows.iter().map(|row| self.key_of(row)).collect();
        let mut keys: Vec<String> = keys.into_iter().collect();
        if self.orient == Orientation::Vertical {
            keys.reverse();
        }
        trace!(rows = rows.len(), categories = keys.len(), "ordinal domain");
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Value, row};

    #[test]
    fn multiple_value_names_form_composite_key() {
        let domain = OrdinalDomain::new(vec!["a".to_owned(), "b".to_owned()]);
        let r = row([("a", Value::from("x")), ("b", Value::from(vec!["y", "z"]))]);
        assert_eq!(domain.key_of(&r), "x|y|z");
    }

    #[test]
    fn vertical_orientation_reverses_keys() {
        let data: Vec<Datum> = ["a", "b", "c"]
            .into_iter()
            .map(|k| Datum::Row(row([(CROSS_VALUE, k)])))
            .collect();
        let keys = OrdinalDomain::default()
            .with_orientation(Orientation::Vertical)
            .compute(&data);
        assert_eq!(keys, vec!["c", "b", "a"]);
    }
}
