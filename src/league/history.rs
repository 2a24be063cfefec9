use crate::model::{GolferRecord, GolferStats, RangeFilter};
use crate::stats::{HandicapStrategy, average, trend};

/// Chronological score series for one golfer, optionally clipped to a range.
///
/// Weeks without a score are dropped. An empty series yields the all-zero
/// stats rather than an error.
#[must_use]
pub fn golfer_stats<H: HandicapStrategy + ?Sized>(
    strategy: &H,
    record: &GolferRecord,
    filter: Option<&RangeFilter>,
) -> GolferStats {
    let mut stats = GolferStats::default();

    for entry in record.entries() {
        let x = entry.date.ordinal();
        if filter.is_some_and(|f| !f.contains(x)) {
            continue;
        }
        let Some(score) = entry.score else {
            continue;
        };
        stats.scores.push(score);
        stats.dates.push(entry.key.to_string());
        stats.x_values.push(x);
    }

    if stats.scores.is_empty() {
        return stats;
    }

    stats.handicap = strategy.handicap(&stats.scores);
    stats.avg_score = average(&stats.scores);
    stats.trend = trend(&stats.scores);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BestOfRecent;
    use serde_json::json;

    fn al() -> GolferRecord {
        serde_json::from_value(json!({
            "Names": "Al",
            "2021 Wk 1": 90,
            "2021 Wk 2": "",
            "2021 Wk 3": 85
        }))
        .unwrap()
    }

    #[test]
    fn skips_missing_weeks() {
        let stats = golfer_stats(&BestOfRecent::default(), &al(), None);
        assert_eq!(stats.scores, vec![90, 85]);
        assert_eq!(stats.dates, vec!["2021 Wk 1", "2021 Wk 3"]);
        assert_eq!(stats.x_values, vec![202_101, 202_103]);
        assert_eq!(stats.avg_score, 87.5);
        assert_eq!(stats.trend, [-5.0, 90.0]);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let filter = RangeFilter {
            start_year: Some(2021),
            start_week: Some(3),
            ..RangeFilter::default()
        };
        let stats = golfer_stats(&BestOfRecent::default(), &al(), Some(&filter));
        assert_eq!(stats.scores, vec![85]);
        assert_eq!(stats.trend, [0.0, 85.0]);
    }

    #[test]
    fn empty_range_gives_zero_stats() {
        let filter = RangeFilter {
            start_year: Some(2030),
            ..RangeFilter::default()
        };
        let stats = golfer_stats(&BestOfRecent::default(), &al(), Some(&filter));
        assert_eq!(stats, GolferStats::default());
        assert_eq!(stats.trend, [0.0, 0.0]);
    }

    #[test]
    fn oversized_ranges_and_weeks_do_not_overflow() {
        let record: GolferRecord = serde_json::from_value(json!({
            "Names": "Al",
            "2021 Wk 1": 40,
            "2021 Wk 2147483000": 40
        }))
        .unwrap();
        let filter = RangeFilter {
            start_year: Some(30_000_000),
            ..RangeFilter::default()
        };
        let stats = golfer_stats(&BestOfRecent::default(), &record, Some(&filter));
        assert_eq!(stats, GolferStats::default());

        let stats = golfer_stats(&BestOfRecent::default(), &record, None);
        assert_eq!(stats.dates, vec!["2021 Wk 1"]);
    }

    #[test]
    fn handicap_comes_from_the_strategy() {
        let count = |scores: &[i32]| i32::try_from(scores.len()).unwrap_or(0);
        let stats = golfer_stats(&count, &al(), None);
        assert_eq!(stats.handicap, 2);
    }
}
