use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Placeholder shown in the report summary when nobody qualifies.
pub const NO_RESULT: &str = "?";

/// Inclusive `(year, week)` window for a golfer's history. A bound is only
/// applied when its year is set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter {
    pub start_year: Option<i32>,
    pub start_week: Option<i32>,
    pub end_year: Option<i32>,
    pub end_week: Option<i32>,
}

impl RangeFilter {
    #[must_use]
    pub fn start_ordinal(&self) -> Option<i32> {
        self.start_year
            .map(|year| year.saturating_mul(100).saturating_add(self.start_week.unwrap_or(0)))
    }

    #[must_use]
    pub fn end_ordinal(&self) -> Option<i32> {
        self.end_year
            .map(|year| year.saturating_mul(100).saturating_add(self.end_week.unwrap_or(99)))
    }

    #[must_use]
    pub fn contains(&self, ordinal: i32) -> bool {
        self.start_ordinal().is_none_or(|start| ordinal >= start)
            && self.end_ordinal().is_none_or(|end| ordinal <= end)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GolferStats {
    pub handicap: i32,
    pub avg_score: f64,
    pub trend: [f64; 2],
    pub scores: Vec<i32>,
    pub dates: Vec<String>,
    pub x_values: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flight {
    A,
    B,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub golfer_name: String,
    pub flight: Flight,
    pub gross: i32,
    pub net: i32,
    pub handicap: i32,
    pub ytd_mean: f64,
    pub handicap_round_count: usize,
}

/// Report entries in flight order. Serializes as an object keyed by
/// golfer name, so names are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightMap {
    entries: Vec<LeagueEntry>,
}

impl FlightMap {
    #[must_use]
    pub fn new(entries: Vec<LeagueEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, golfer_name: &str) -> Option<&LeagueEntry> {
        self.entries.iter().find(|e| e.golfer_name == golfer_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeagueEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FlightMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.golfer_name, entry)?;
        }
        map.end()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub a_winner: String,
    pub b_winner: String,
    pub low_net: String,
    pub mean_score: String,
}

impl Default for ReportSummary {
    fn default() -> Self {
        Self {
            a_winner: NO_RESULT.to_string(),
            b_winner: NO_RESULT.to_string(),
            low_net: NO_RESULT.to_string(),
            mean_score: NO_RESULT.to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueReport {
    pub flight_map: FlightMap,
    pub summary: ReportSummary,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMetadata {
    pub names: Vec<Option<String>>,
    pub years: Vec<i32>,
    pub weeks: Vec<i32>,
    pub years_to_weeks: BTreeMap<i32, Vec<i32>>,
    pub latest_year: Option<i32>,
    /// Empty string when no week has been recorded.
    pub latest_week: String,
}
