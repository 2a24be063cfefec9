use crate::error::CoreError;
use crate::model::RangeFilter;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::hash::BuildHasher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRequest {
    pub name: String,
    pub filter: Option<RangeFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub year: i32,
    pub week: i32,
}

/// Body of a single score update. `score` arrives as a number or a numeric
/// string depending on the client.
#[derive(Deserialize, Debug, Clone)]
pub struct ScoreUpdate {
    pub name: String,
    pub date: String,
    pub score: Value,
}

/// Body of a remove-week request: one field name or several.
#[derive(Deserialize, Debug, Clone)]
pub struct RemoveWeek {
    pub key: FieldNames,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldNames {
    One(String),
    Many(Vec<String>),
}

impl FieldNames {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FieldNames::One(key) => vec![key],
            FieldNames::Many(keys) => keys,
        }
    }
}

fn optional_int<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    key: &str,
) -> Result<Option<i32>, CoreError> {
    match query.get(key).map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| CoreError::Parse(format!("{key} must be an integer, got '{raw}'"))),
    }
}

/// Years are four digits, as in a date-key.
fn optional_year<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    key: &str,
) -> Result<Option<i32>, CoreError> {
    match optional_int(query, key)? {
        Some(year) if !(0..=9999).contains(&year) => Err(CoreError::Parse(format!(
            "{key} must be a four-digit year, got {year}"
        ))),
        year => Ok(year),
    }
}

fn required_int<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    key: &str,
) -> Result<i32, CoreError> {
    optional_int(query, key)?
        .ok_or_else(|| CoreError::Parse(format!("{key} parameter is required")))
}

/// Parse `name` and the optional `startYear`/`startWeek`/`endYear`/`endWeek`.
///
/// # Errors
/// Returns an error if `name` is missing or a range parameter is not an integer.
pub fn parse_stats_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<StatsRequest, CoreError> {
    let name = query
        .get("name")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Parse("name parameter is required".into()))?;

    let filter = RangeFilter {
        start_year: optional_year(query, "startYear")?,
        start_week: optional_int(query, "startWeek")?,
        end_year: optional_year(query, "endYear")?,
        end_week: optional_int(query, "endWeek")?,
    };
    let filter = (filter.start_year.is_some() || filter.end_year.is_some()).then_some(filter);

    Ok(StatsRequest { name, filter })
}

/// Parse the target `year` and `week` of a league report.
///
/// # Errors
/// Returns an error if either parameter is missing or not an integer.
pub fn parse_report_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<ReportRequest, CoreError> {
    Ok(ReportRequest {
        year: required_int(query, "year")?,
        week: required_int(query, "week")?,
    })
}

/// Read a submitted score the way the old front end sent it.
///
/// # Errors
/// Returns an error unless the value is a non-negative integer or a string
/// holding one.
pub fn parse_score_input(value: &Value) -> Result<i32, CoreError> {
    crate::model::score_from_value(value)
        .ok_or_else(|| CoreError::Parse(format!("score must be a non-negative integer, got {value}")))
}
