use crate::error::CoreError;
use crate::league::LeagueEngine;
use crate::model::{
    DateKey, GolferRecord, GolferStats, LeagueMetadata, LeagueReport, RangeFilter,
};
use crate::stats::HandicapStrategy;
use crate::storage::{Storage, WriteResult};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Load every golfer document.
///
/// # Errors
/// Returns an error if the storage read fails.
pub async fn load_all_records(storage: &dyn Storage) -> Result<Vec<GolferRecord>, CoreError> {
    let records = storage.fetch_all_records().await?;
    debug!(count = records.len(), "loaded golfer documents");
    Ok(records)
}

/// # Errors
/// Returns an error if the storage read fails.
pub async fn load_metadata<H: HandicapStrategy>(
    engine: &LeagueEngine<H>,
    storage: &dyn Storage,
) -> Result<LeagueMetadata, CoreError> {
    let records = load_all_records(storage).await?;
    Ok(engine.metadata(&records))
}

/// Stats for one golfer by name.
///
/// # Errors
/// Returns `CoreError::NotFound` if no golfer has that name, or an error if
/// the storage read fails.
pub async fn load_golfer_stats<H: HandicapStrategy>(
    engine: &LeagueEngine<H>,
    storage: &dyn Storage,
    name: &str,
    filter: Option<&RangeFilter>,
) -> Result<GolferStats, CoreError> {
    let Some(record) = storage.fetch_one_record(name).await? else {
        warn!(golfer = name, "stats requested for unknown golfer");
        return Err(CoreError::NotFound(format!("golfer '{name}'")));
    };
    let stats = engine.golfer_stats(&record, filter);
    debug!(golfer = name, rounds = stats.scores.len(), "computed golfer stats");
    Ok(stats)
}

/// # Errors
/// Returns an error if the storage read fails.
pub async fn load_league_report<H: HandicapStrategy>(
    engine: &LeagueEngine<H>,
    storage: &dyn Storage,
    year: i32,
    week: i32,
) -> Result<LeagueReport, CoreError> {
    let records = load_all_records(storage).await?;
    let report = engine.league_report(&records, year, week);
    debug!(year, week, golfers = report.flight_map.len(), "built league report");
    Ok(report)
}

fn require_date_key(key: &str) -> Result<DateKey, CoreError> {
    DateKey::parse(key).ok_or_else(|| {
        warn!(key, "rejected field that is not a date-key");
        CoreError::Parse(format!("'{key}' is not a date-key like '2024 Wk 3'"))
    })
}

/// Open one or more weeks on every golfer, usually with an empty score.
///
/// # Errors
/// Returns an error if a field name is not a date-key or the write fails.
pub async fn add_week(
    storage: &dyn Storage,
    fields: &Map<String, Value>,
) -> Result<WriteResult, CoreError> {
    if fields.is_empty() {
        return Err(CoreError::Parse("no week fields given".into()));
    }
    for key in fields.keys() {
        require_date_key(key)?;
    }
    let result = storage.apply_bulk_field_set(fields).await?;
    let weeks: Vec<&String> = fields.keys().collect();
    info!(weeks = ?weeks, modified = result.modified_count, "added week");
    Ok(result)
}

/// Drop one or more weeks from every golfer.
///
/// # Errors
/// Returns an error if a field name is not a date-key or the write fails.
pub async fn remove_week(storage: &dyn Storage, keys: &[String]) -> Result<WriteResult, CoreError> {
    if keys.is_empty() {
        return Err(CoreError::Parse("no week fields given".into()));
    }
    for key in keys {
        require_date_key(key)?;
    }
    let result = storage.apply_bulk_field_unset(keys).await?;
    info!(weeks = ?keys, modified = result.modified_count, "removed week");
    Ok(result)
}

/// Insert a new golfer document.
///
/// # Errors
/// Returns an error if the document has no name, the name is taken, or the
/// write fails.
pub async fn add_golfer(
    storage: &dyn Storage,
    record: GolferRecord,
) -> Result<WriteResult, CoreError> {
    let Some(name) = record.name().map(str::to_string) else {
        return Err(CoreError::Parse("golfer document needs a Names field".into()));
    };
    if name.trim().is_empty() {
        return Err(CoreError::Parse("golfer name is empty".into()));
    }
    if storage.fetch_one_record(&name).await?.is_some() {
        warn!(golfer = %name, "golfer already exists");
        return Err(CoreError::Conflict(format!("golfer '{name}' already exists")));
    }
    let result = storage.insert_record(record).await?;
    info!(golfer = %name, "added golfer");
    Ok(result)
}

/// Record one golfer's score for a week. An existing field for that week is
/// overwritten whatever its marker; otherwise the canonical key is used.
///
/// # Errors
/// Returns `CoreError::NotFound` for an unknown golfer, a parse error for a
/// bad date-key, or an error if the write fails.
pub async fn record_score(
    storage: &dyn Storage,
    name: &str,
    date_key: &str,
    score: i32,
) -> Result<WriteResult, CoreError> {
    let date = require_date_key(date_key)?;
    let Some(record) = storage.fetch_one_record(name).await? else {
        warn!(golfer = name, "score submitted for unknown golfer");
        return Err(CoreError::NotFound(format!("golfer '{name}'")));
    };

    let key = record
        .entries()
        .iter()
        .find(|e| e.date == date)
        .map_or_else(|| date.canonical_key(), |e| e.key.to_string());

    let result = storage.update_single_field(name, &key, score).await?;
    info!(golfer = name, week = %key, score, "recorded score");
    Ok(result)
}
