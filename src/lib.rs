//! market-overview: view-model shaping for a market overview dashboard.
//!
//! The crate turns a read-only market snapshot into what the markets page displays:
//! benchmark index cards, stocks grouped by sector, and a news feed.
//!
//! - [`group`] partitions assets by sector, keeping first-seen sector order and the
//!   scan order of assets within each sector.
//! - [`classify`] turns a percentage change into a [`Trend`] and a signed label
//!   (`+1.2`, `-0.5`, `+0`).
//! - [`MarketOverview::builder`] runs both over a [`MarketDataProvider`] and renders
//!   prices through a [`CurrencyFormatter`].
//!
//! Nothing here fetches, validates or persists market data.
//!
//! # Example
//!
//! ```
//! use market_overview::{AssetRecord, Trend, classify, group};
//!
//! let assets = vec![
//!     AssetRecord::new("TCS", "Tata Consultancy Services", "IT", 3_842.5, 1.2),
//!     AssetRecord::new("INFY", "Infosys", "IT", 1_456.8, -0.5),
//!     AssetRecord::new("HDFC", "HDFC Bank", "Banking", 1_652.3, 0.0),
//! ];
//!
//! let groups = group(&assets);
//! assert_eq!(groups.sectors().collect::<Vec<_>>(), ["IT", "Banking"]);
//! assert_eq!(classify(0.0).direction, Trend::Up);
//! ```

/// Core components: models, error type and collaborator seams.
pub mod core;
/// The markets page news feed.
pub mod news;
/// The assembled page view model and its builder.
pub mod overview;
/// Grouping of assets by sector.
pub mod sector;
/// Up/down classification of percentage changes.
pub mod trend;

pub use crate::core::{
    AssetRecord, CurrencyFormatter, IndexSnapshot, InrFormatter, MarketDataProvider,
    MarketError, StaticMarketData, format_index_value,
};
#[cfg(feature = "tracing-subscriber")]
pub use crate::core::init_tracing_for_tests;
pub use news::{NewsItem, default_headlines, relative_time_label};
pub use overview::{IndexCard, MarketOverview, MarketOverviewBuilder, SectorSection, StockCard};
pub use sector::{SectorGroups, group};
pub use trend::{Trend, TrendLabel, classify};
