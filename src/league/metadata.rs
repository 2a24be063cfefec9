use crate::model::{GolferRecord, LeagueMetadata};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet};

/// Names, seasons and weeks present anywhere in the collection.
#[must_use]
pub fn metadata(records: &[GolferRecord]) -> LeagueMetadata {
    let mut names: Vec<Option<String>> = records
        .iter()
        .map(|r| r.name().map(str::to_string))
        .collect();
    // Nameless documents go last; duplicates are kept.
    names.sort_by(|a, b| match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut weeks = BTreeSet::new();
    let mut years_to_weeks: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
    for record in records {
        for entry in record.entries() {
            weeks.insert(entry.date.week);
            years_to_weeks
                .entry(entry.date.year)
                .or_default()
                .insert(entry.date.week);
        }
    }

    let mut years: Vec<i32> = years_to_weeks.keys().copied().collect();
    years.sort_by_key(|y| Reverse(*y));

    let latest_year = years.first().copied();
    let latest_week = latest_year
        .and_then(|y| years_to_weeks.get(&y))
        .and_then(|w| w.last())
        .map(ToString::to_string)
        .unwrap_or_default();

    LeagueMetadata {
        names,
        years,
        weeks: weeks.into_iter().collect(),
        years_to_weeks: years_to_weeks
            .into_iter()
            .map(|(year, weeks)| (year, weeks.into_iter().collect()))
            .collect(),
        latest_year,
        latest_week,
    }
}
