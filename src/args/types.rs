use clap::Parser;
use serde_json::Value;

use crate::stats::{DEFAULT_ALLOWANCE, DEFAULT_COUNTED, DEFAULT_PAR, DEFAULT_WINDOW};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "GOLF_LEAGUE_BIND", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, env = "GOLF_LEAGUE_PORT", default_value_t = 5038)]
    pub port: u16,
    /// JSON array of golfer documents to start with.
    #[arg(
        long,
        value_name = "GOLFERS_JSON",
        env = "GOLF_LEAGUE_POPULATE_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
    /// Most recent rounds considered for a handicap.
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub handicap_window: usize,
    /// Lowest rounds within the window that are averaged.
    #[arg(long, default_value_t = DEFAULT_COUNTED)]
    pub handicap_counted: usize,
    #[arg(long, default_value_t = DEFAULT_PAR)]
    pub handicap_par: i32,
    #[arg(long, default_value_t = DEFAULT_ALLOWANCE)]
    pub handicap_allowance: f64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub db_populate_json: Option<Value>,
    pub handicap: crate::stats::BestOfRecent,
}
