//! Labeled Series Module
//! Label-to-value mappings and their sorted projection for charting.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Value for label '{label}' is not a finite number: {value}")]
    NonFiniteValue { label: String, value: f64 },
    #[error("Failed to parse series JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Series JSON must be an object of label -> number, got {0}")]
    NotAnObject(&'static str),
    #[error("Value for label '{0}' is not a number")]
    NotANumber(String),
}

/// Raw chart input: unique string labels mapped to numeric measurements.
///
/// Keys are unordered; ordering only exists on the [`SortedSeries`]
/// projection. Values are validated finite at construction so malformed
/// input fails loudly instead of producing garbage bars downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledSeries {
    entries: HashMap<String, f64>,
}

impl LabeledSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from (label, value) pairs.
    ///
    /// Rejects NaN and infinite values. A repeated label keeps the last
    /// value seen, matching map-literal semantics.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut entries = HashMap::new();
        for (label, value) in pairs {
            let label = label.into();
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { label, value });
            }
            entries.insert(label, value);
        }
        Ok(Self { entries })
    }

    /// Parse a JSON object of label -> number, e.g. `{"mon": 42, "tue": 48}`.
    ///
    /// This is the wire form in which a hosting page supplies chart data.
    pub fn from_json_str(json: &str) -> Result<Self, SeriesError> {
        let root: serde_json::Value = serde_json::from_str(json)?;
        let object = match root {
            serde_json::Value::Object(map) => map,
            other => return Err(SeriesError::NotAnObject(json_kind(&other))),
        };

        let mut entries = HashMap::with_capacity(object.len());
        for (label, value) in object {
            let Some(number) = value.as_f64() else {
                return Err(SeriesError::NotANumber(label));
            };
            if !number.is_finite() {
                return Err(SeriesError::NonFiniteValue {
                    label,
                    value: number,
                });
            }
            entries.insert(label, number);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project into parallel label/value sequences ordered ascending by
    /// label under standard string comparison. Empty input yields empty
    /// output sequences.
    pub fn sort_by_label(&self) -> SortedSeries {
        let mut pairs: Vec<(&String, f64)> =
            self.entries.iter().map(|(label, &value)| (label, value)).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut labels = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (label, value) in pairs {
            labels.push(label.clone());
            values.push(value);
        }
        SortedSeries { labels, values }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Chart-ready projection of a series: `labels[i]` pairs with `values[i]`,
/// labels ascending under string comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SortedSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_labels_ascending() {
        let series =
            LabeledSeries::from_pairs([("b", 2.0), ("a", 1.0), ("c", 3.0)]).unwrap();
        let sorted = series.sort_by_label();
        assert_eq!(sorted.labels, vec!["a", "b", "c"]);
        assert_eq!(sorted.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn numeric_looking_labels_use_string_order() {
        let series = LabeledSeries::from_pairs([("10", 5.0), ("2", 9.0)]).unwrap();
        let sorted = series.sort_by_label();
        assert_eq!(sorted.labels, vec!["10", "2"]);
        assert_eq!(sorted.values, vec![5.0, 9.0]);
    }

    #[test]
    fn empty_series_sorts_to_empty_sequences() {
        let sorted = LabeledSeries::new().sort_by_label();
        assert!(sorted.labels.is_empty());
        assert!(sorted.values.is_empty());
        assert!(sorted.is_empty());
    }

    #[test]
    fn output_sequences_stay_parallel() {
        let pairs = [("wed", 41.0), ("mon", 38.0), ("tue", 44.0), ("fri", 52.0)];
        let series = LabeledSeries::from_pairs(pairs).unwrap();
        let sorted = series.sort_by_label();

        assert_eq!(sorted.len(), series.len());
        assert_eq!(sorted.labels.len(), sorted.values.len());
        for (label, value) in pairs {
            let hits: Vec<usize> = sorted
                .labels
                .iter()
                .enumerate()
                .filter(|(_, l)| l.as_str() == label)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(hits.len(), 1, "label {label} must appear exactly once");
            assert_eq!(sorted.values[hits[0]], value);
        }
        assert!(sorted.labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = LabeledSeries::from_pairs([("a", f64::NAN)]).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonFiniteValue { ref label, .. } if label == "a"
        ));

        let err = LabeledSeries::from_pairs([("b", f64::INFINITY)]).unwrap_err();
        assert!(matches!(err, SeriesError::NonFiniteValue { .. }));
    }

    #[test]
    fn repeated_label_keeps_last_value() {
        let series = LabeledSeries::from_pairs([("a", 1.0), ("a", 7.0)]).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.sort_by_label().values, vec![7.0]);
    }

    #[test]
    fn parses_json_object() {
        let series = LabeledSeries::from_json_str(r#"{"b": 2, "a": 1, "c": 3}"#).unwrap();
        let sorted = series.sort_by_label();
        assert_eq!(sorted.labels, vec!["a", "b", "c"]);
        assert_eq!(sorted.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_json_non_number_value() {
        let err = LabeledSeries::from_json_str(r#"{"a": "fast"}"#).unwrap_err();
        assert!(matches!(err, SeriesError::NotANumber(label) if label == "a"));
    }

    #[test]
    fn rejects_json_non_object_root() {
        let err = LabeledSeries::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, SeriesError::NotAnObject("an array")));
    }
}
