//! Assembly of the markets page view model.

mod model;

pub use model::{IndexCard, MarketOverview, SectorSection, StockCard};

use crate::core::{
    AssetRecord, CurrencyFormatter, IndexSnapshot, InrFormatter, MarketDataProvider,
    MarketError, format_index_value,
};
use crate::news::{NewsItem, default_headlines};
use crate::sector::group;

impl MarketOverview {
    /// Starts building an overview from the given provider's current snapshot.
    pub fn builder<P: MarketDataProvider + ?Sized>(provider: &P) -> MarketOverviewBuilder<'_, P> {
        MarketOverviewBuilder::new(provider)
    }

    /// Serializes the view model for the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, MarketError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Total number of stock cards across all sectors.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.sectors.iter().map(|s| s.stocks.len()).sum()
    }
}

/// A builder for a single render of the markets page.
///
/// Every call to [`build`](Self::build) regroups the provider's assets and reclassifies
/// every change, so the result always reflects the snapshot at that moment.
///
/// # Example
///
/// ```
/// use market_overview::{AssetRecord, MarketOverview, StaticMarketData};
///
/// let data = StaticMarketData::new(vec![
///     AssetRecord::new("TCS", "Tata Consultancy Services", "IT", 3_842.5, 1.2),
///     AssetRecord::new("HDFCBANK", "HDFC Bank", "Banking", 1_652.3, -0.4),
/// ]);
///
/// let page = MarketOverview::builder(&data).news_limit(1).build();
/// assert_eq!(page.sectors[0].sector, "IT");
/// assert_eq!(page.sectors[0].stocks[0].price_label, "₹3,842.50");
/// assert_eq!(page.news.len(), 1);
/// ```
pub struct MarketOverviewBuilder<'a, P: ?Sized> {
    provider: &'a P,
    formatter: Box<dyn CurrencyFormatter>,
    indices: Option<Vec<IndexSnapshot>>,
    news: Vec<NewsItem>,
    news_limit: Option<usize>,
}

impl<'a, P: MarketDataProvider + ?Sized> MarketOverviewBuilder<'a, P> {
    /// Creates a builder with the rupee formatter and the default headlines.
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            formatter: Box::new(InrFormatter),
            indices: None,
            news: default_headlines(),
            news_limit: None,
        }
    }

    /// Sets the formatter used for stock prices.
    #[must_use]
    pub fn formatter(mut self, formatter: impl CurrencyFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Overrides the provider's benchmark indices for this render.
    #[must_use]
    pub fn indices(mut self, indices: Vec<IndexSnapshot>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Replaces the news feed.
    #[must_use]
    pub fn news(mut self, news: Vec<NewsItem>) -> Self {
        self.news = news;
        self
    }

    /// Caps the number of headlines shown.
    #[must_use]
    pub const fn news_limit(mut self, limit: usize) -> Self {
        self.news_limit = Some(limit);
        self
    }

    /// Builds the view model.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    #[must_use]
    pub fn build(self) -> MarketOverview {
        let indices = self
            .indices
            .as_deref()
            .unwrap_or_else(|| self.provider.indices())
            .iter()
            .map(index_card)
            .collect();

        let sectors: Vec<SectorSection> = group(self.provider.assets())
            .into_iter()
            .map(|(sector, assets)| SectorSection {
                sector,
                stocks: assets
                    .iter()
                    .map(|a| stock_card(a, self.formatter.as_ref()))
                    .collect(),
            })
            .collect();

        let mut news = self.news;
        if let Some(limit) = self.news_limit {
            news.truncate(limit);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sectors = sectors.len(),
            news = news.len(),
            "built market overview"
        );

        MarketOverview {
            indices,
            sectors,
            news,
        }
    }
}

fn index_card(index: &IndexSnapshot) -> IndexCard {
    let change = index.change_label();
    IndexCard {
        name: index.name.clone(),
        value_label: format_index_value(index.value),
        change_label: change.percent(),
        trend: change.direction,
    }
}

fn stock_card(asset: &AssetRecord, formatter: &dyn CurrencyFormatter) -> StockCard {
    let change = asset.change_label();
    StockCard {
        symbol: asset.symbol.clone(),
        name: asset.name.clone(),
        price_label: formatter.format(asset.price),
        change_label: change.percent(),
        trend: change.direction,
    }
}
