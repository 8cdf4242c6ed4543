//! Core components of the `market-overview` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The primary [`MarketError`] type.
//! - Shared data models like [`AssetRecord`] and [`IndexSnapshot`].
//! - The collaborator seams: [`MarketDataProvider`] and [`CurrencyFormatter`].

/// Currency formatting (`CurrencyFormatter`) and the default rupee formatter.
pub mod currency;
/// The primary error type (`MarketError`) for the crate.
pub mod error;
/// Shared data models used across modules (e.g., `AssetRecord`, `IndexSnapshot`).
pub mod models;
/// The read-only market data provider seam and its in-memory snapshot.
pub mod provider;

// convenient re-exports so most code can just `use crate::core::AssetRecord`
pub use currency::{CurrencyFormatter, InrFormatter, format_index_value};
pub use error::MarketError;
pub use models::{AssetRecord, IndexSnapshot};
pub use provider::{MarketDataProvider, StaticMarketData};

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Intended for tests; repeated calls are ignored.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
