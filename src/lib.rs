pub mod args;
pub mod controller;
pub mod error;
pub mod league;
pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod storage;

pub use error::CoreError;
pub use league::LeagueEngine;
pub use model::{DateKey, GolferRecord};
pub use stats::{BestOfRecent, HandicapStrategy};
