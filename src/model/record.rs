use crate::model::date_key::{DateKey, compare_field_names};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the golfer's display name.
pub const NAMES_FIELD: &str = "Names";

/// One golfer document: `Names` plus one field per league week.
///
/// The shape is open-ended, so the document is kept as a JSON map and read
/// through the typed accessors below.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct GolferRecord {
    fields: Map<String, Value>,
}

/// A week field of a record with its key decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreEntry<'a> {
    pub key: &'a str,
    pub date: DateKey,
    pub score: Option<i32>,
}

impl GolferRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(NAMES_FIELD.to_string(), Value::String(name.into()));
        Self { fields }
    }

    #[must_use]
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder used mostly by fixtures.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAMES_FIELD).and_then(Value::as_str)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove_field(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// Every date-keyed field in chronological order, including weeks with
    /// no score. Fields whose key is not a date-key are skipped.
    #[must_use]
    pub fn entries(&self) -> Vec<ScoreEntry<'_>> {
        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort_by(|a, b| compare_field_names(a, b));

        keys.into_iter()
            .filter_map(|key| {
                let date = DateKey::parse(key)?;
                Some(ScoreEntry {
                    key: key.as_str(),
                    date,
                    score: self.fields.get(key.as_str()).and_then(score_from_value),
                })
            })
            .collect()
    }
}

/// Decode a stored score. Absent, `null`, empty, negative, fractional or
/// non-numeric values all count as "no round played".
#[must_use]
pub fn score_from_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).ok().filter(|s| *s >= 0);
            }
            let f = n.as_f64()?;
            if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(i32::MAX) {
                #[allow(clippy::cast_possible_truncation)]
                return Some(f as i32);
            }
            None
        }
        Value::String(s) => s.trim().parse::<i32>().ok().filter(|s| *s >= 0),
        _ => None,
    }
}
