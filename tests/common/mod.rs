#![allow(dead_code)]

use std::{fs, path::PathBuf};

use market_overview::AssetRecord;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn asset(symbol: &str, sector: &str, change_24h: f64) -> AssetRecord {
    AssetRecord::new(symbol, symbol, sector, 1_000.0, change_24h)
}

/// The three-stock scenario used throughout the dashboard tests.
pub fn scenario_assets() -> Vec<AssetRecord> {
    vec![
        asset("TCS", "IT", 1.2),
        asset("INFY", "IT", -0.5),
        asset("HDFC", "Banking", 0.0),
    ]
}

pub fn symbols(assets: &[AssetRecord]) -> Vec<&str> {
    assets.iter().map(|a| a.symbol.as_str()).collect()
}
