use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Last year whose score fields were written with an upper-case `WK` marker.
pub const LAST_UPPERCASE_MARKER_YEAR: i32 = 2020;

/// A league week, decoded from a score field name such as `"2021 Wk 3"`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub year: i32,
    pub week: i32,
}

fn date_key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // The marker is any two word characters; old documents mix "WK" and "Wk".
    REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{4}) [0-9A-Za-z_]{2} ([0-9]+)$")
            .expect("Invalid regex pattern - this is a programming error")
    })
}

impl DateKey {
    #[must_use]
    pub fn new(year: i32, week: i32) -> Self {
        Self { year, week }
    }

    /// Parse a score field name. Returns `None` for anything that is not a
    /// date-key, e.g. `"Names"`.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let caps = date_key_regex().captures(key)?;
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let week: i32 = caps.get(2)?.as_str().parse().ok()?;
        // The ordinal must stay representable.
        year.checked_mul(100)?.checked_add(week)?;
        Some(Self { year, week })
    }

    /// Scalar position used for range filtering and charting.
    ///
    /// Assumes no season runs past week 99. Saturates instead of wrapping.
    #[must_use]
    pub fn ordinal(&self) -> i32 {
        self.year.saturating_mul(100).saturating_add(self.week)
    }

    /// The field name new scores for this week are written under.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        let marker = if self.year <= LAST_UPPERCASE_MARKER_YEAR {
            "WK"
        } else {
            "Wk"
        };
        format!("{} {marker} {}", self.year, self.week)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_key())
    }
}

/// Orders raw field names chronologically; keys that are not date-keys sort
/// after every date-key.
#[must_use]
pub fn compare_field_names(a: &str, b: &str) -> Ordering {
    match (DateKey::parse(a), DateKey::parse(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
