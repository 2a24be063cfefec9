use crate::model::{
    DateKey, Flight, FlightMap, GolferRecord, LeagueEntry, LeagueReport, NO_RESULT, ReportSummary,
};
use crate::stats::{HandicapStrategy, average};
use std::collections::HashSet;

struct Qualifier {
    golfer_name: String,
    gross: i32,
    handicap: i32,
    ytd_mean: f64,
    handicap_round_count: usize,
}

/// Walk one golfer's weeks up to `target`. Returns `None` when the golfer
/// has no score for the target week or no name.
fn qualify<H: HandicapStrategy + ?Sized>(
    strategy: &H,
    record: &GolferRecord,
    target: DateKey,
) -> Option<Qualifier> {
    let golfer_name = record.name()?;

    let mut handicap_scores = Vec::new();
    let mut ytd_scores = Vec::new();
    let mut gross = None;

    for entry in record.entries() {
        let Some(score) = entry.score else {
            continue;
        };
        if entry.date < target {
            handicap_scores.push(score);
            if entry.date.year == target.year {
                ytd_scores.push(score);
            }
        } else if entry.date == target {
            gross = Some(score);
            ytd_scores.push(score);
        }
    }

    let gross = gross?;
    Some(Qualifier {
        golfer_name: golfer_name.to_string(),
        gross,
        handicap: strategy.handicap(&handicap_scores),
        ytd_mean: average(&ytd_scores),
        handicap_round_count: handicap_scores.len(),
    })
}

/// Weekly report for `(year, week)`: every golfer who posted a score that
/// week, split into flights by handicap, plus the summary line.
#[must_use]
pub fn league_report<H: HandicapStrategy + ?Sized>(
    strategy: &H,
    records: &[GolferRecord],
    year: i32,
    week: i32,
) -> LeagueReport {
    let target = DateKey::new(year, week);
    // The flight map is keyed by name: a repeated name keeps its first document.
    let mut seen = HashSet::new();
    let mut qualifiers: Vec<Qualifier> = records
        .iter()
        .filter(|&record| record.name().is_some_and(|name| seen.insert(name)))
        .filter_map(|record| qualify(strategy, record, target))
        .collect();

    // Stable: equal handicaps keep snapshot order.
    qualifiers.sort_by_key(|q| q.handicap);
    let a_flight_size = qualifiers.len().div_ceil(2);

    let entries: Vec<LeagueEntry> = qualifiers
        .into_iter()
        .enumerate()
        .map(|(rank, q)| LeagueEntry {
            flight: if rank < a_flight_size {
                Flight::A
            } else {
                Flight::B
            },
            net: q.gross - q.handicap,
            golfer_name: q.golfer_name,
            gross: q.gross,
            handicap: q.handicap,
            ytd_mean: q.ytd_mean,
            handicap_round_count: q.handicap_round_count,
        })
        .collect();

    let flight_map = FlightMap::new(entries);
    let summary = summarize(&flight_map);
    LeagueReport {
        flight_map,
        summary,
    }
}

/// First entry with the strictly lowest net wins.
fn lowest_net<'a>(entries: impl Iterator<Item = &'a LeagueEntry>) -> Option<&'a LeagueEntry> {
    entries.fold(None, |best, entry| match best {
        Some(b) if b.net <= entry.net => Some(b),
        _ => Some(entry),
    })
}

/// Halves round up, so 42.25 shows as 42.3 rather than the formatter's 42.2.
fn round_half_up(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

fn summarize(flight_map: &FlightMap) -> ReportSummary {
    if flight_map.is_empty() {
        return ReportSummary::default();
    }

    let winner_name = |flight: Flight| {
        lowest_net(flight_map.iter().filter(|e| e.flight == flight))
            .map_or_else(|| NO_RESULT.to_string(), |e| e.golfer_name.clone())
    };

    let low_net = lowest_net(flight_map.iter()).map_or_else(
        || NO_RESULT.to_string(),
        |e| format!("{} ({:.2})", e.golfer_name, f64::from(e.net)),
    );

    let grosses: Vec<i32> = flight_map.iter().map(|e| e.gross).collect();

    ReportSummary {
        a_winner: winner_name(Flight::A),
        b_winner: winner_name(Flight::B),
        low_net,
        mean_score: format!("{:.1}", round_half_up(average(&grosses), 10.0)),
    }
}
