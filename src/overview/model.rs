use serde::Serialize;

use crate::news::NewsItem;
use crate::trend::Trend;

/// A benchmark index card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexCard {
    /// Index name (e.g. "NIFTY 50").
    pub name: String,
    /// Grouped index level (e.g. "21,845.25").
    pub value_label: String,
    /// Signed change with a percent suffix (e.g. "+0.75%").
    pub change_label: String,
    pub trend: Trend,
}

/// A single stock tile within a sector section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockCard {
    pub symbol: String,
    pub name: String,
    /// Price as rendered by the configured currency formatter.
    pub price_label: String,
    /// Signed 24h change with a percent suffix (e.g. "-0.5%").
    pub change_label: String,
    pub trend: Trend,
}

/// All stocks of one sector, in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorSection {
    pub sector: String,
    pub stocks: Vec<StockCard>,
}

/// The full markets page view model, consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketOverview {
    pub indices: Vec<IndexCard>,
    pub sectors: Vec<SectorSection>,
    pub news: Vec<NewsItem>,
}
