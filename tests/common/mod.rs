#![allow(dead_code)]

use golf_league::league::LeagueEngine;
use golf_league::model::GolferRecord;
use golf_league::storage::MemoryStorage;
use serde_json::Value;

pub struct TestContext {
    pub engine: LeagueEngine,
    pub storage: MemoryStorage,
}

pub fn league_fixture() -> Value {
    serde_json::from_str(include_str!("../league.json")).expect("fixture is valid json")
}

pub fn league_records() -> Vec<GolferRecord> {
    serde_json::from_value(league_fixture()).expect("fixture holds golfer documents")
}

pub fn setup_test_context() -> TestContext {
    let storage = MemoryStorage::from_json(&league_fixture()).expect("fixture seeds storage");
    TestContext {
        engine: LeagueEngine::default(),
        storage,
    }
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
