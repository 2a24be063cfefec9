use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::stats::BestOfRecent;

/// # Errors
///
/// Will return `Err` if the handicap settings are inconsistent
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the handicap settings are inconsistent
    pub fn validate(&self) -> Result<(), String> {
        if self.handicap_counted == 0 {
            return Err("handicap-counted must be at least 1".to_string());
        }
        if self.handicap_counted > self.handicap_window {
            return Err(format!(
                "handicap-counted ({}) cannot exceed handicap-window ({})",
                self.handicap_counted, self.handicap_window
            ));
        }
        if !(self.handicap_allowance > 0.0 && self.handicap_allowance <= 1.0) {
            return Err("handicap-allowance must be in (0, 1]".to_string());
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind: args.bind,
            port: args.port,
            db_populate_json: args.db_populate_json,
            handicap: BestOfRecent {
                window: args.handicap_window,
                counted: args.handicap_counted,
                par: args.handicap_par,
                allowance: args.handicap_allowance,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_league_formula() {
        let args = Args::try_parse_from(["golf-league"]).unwrap();
        assert!(args.validate().is_ok());
        let clean = CleanArgs::new(args);
        assert_eq!(clean.port, 5038);
        assert_eq!(clean.handicap, BestOfRecent::default());
    }

    #[test]
    fn counted_cannot_exceed_window() {
        let args = Args::try_parse_from([
            "golf-league",
            "--handicap-window",
            "3",
            "--handicap-counted",
            "5",
        ])
        .unwrap();
        assert!(args.validate().is_err());
    }
}
