use crate::league::{golfer_stats, league_report, metadata};
use crate::model::{GolferRecord, GolferStats, LeagueMetadata, LeagueReport, RangeFilter};
use crate::stats::{BestOfRecent, HandicapStrategy};

/// Entry point for all league computations. Holds the handicap formula and
/// nothing else; every call works on the snapshot it is handed.
#[derive(Debug, Clone, Default)]
pub struct LeagueEngine<H = BestOfRecent> {
    strategy: H,
}

impl<H: HandicapStrategy> LeagueEngine<H> {
    #[must_use]
    pub fn new(strategy: H) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn strategy(&self) -> &H {
        &self.strategy
    }

    #[must_use]
    pub fn handicap(&self, scores: &[i32]) -> i32 {
        self.strategy.handicap(scores)
    }

    #[must_use]
    pub fn golfer_stats(&self, record: &GolferRecord, filter: Option<&RangeFilter>) -> GolferStats {
        golfer_stats(&self.strategy, record, filter)
    }

    #[must_use]
    pub fn league_report(&self, records: &[GolferRecord], year: i32, week: i32) -> LeagueReport {
        league_report(&self.strategy, records, year, week)
    }

    #[must_use]
    pub fn metadata(&self, records: &[GolferRecord]) -> LeagueMetadata {
        metadata(records)
    }
}
