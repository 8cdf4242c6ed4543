use serde::Deserialize;

use crate::core::{AssetRecord, IndexSnapshot, MarketError};

/// Read-only access to the current market snapshot.
///
/// The overview only needs synchronous reads of whatever the provider holds right now;
/// there is no subscription or streaming contract. Implementations must be shareable
/// across threads so independent renders can read the same snapshot.
pub trait MarketDataProvider: Send + Sync {
    /// Tradable assets, in the order the page should scan them.
    fn assets(&self) -> &[AssetRecord];

    /// Benchmark indices shown above the sector sections.
    fn indices(&self) -> &[IndexSnapshot];
}

/// An owned, in-memory market snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticMarketData {
    assets: Vec<AssetRecord>,
    indices: Vec<IndexSnapshot>,
}

#[derive(Deserialize)]
struct SnapshotWire {
    #[serde(default)]
    assets: Vec<AssetRecord>,
    indices: Option<Vec<IndexSnapshot>>,
}

impl StaticMarketData {
    /// Creates a snapshot from assets, using [`StaticMarketData::default_indices`].
    #[must_use]
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        Self {
            assets,
            indices: Self::default_indices(),
        }
    }

    /// Replaces the benchmark indices.
    #[must_use]
    pub fn with_indices(mut self, indices: Vec<IndexSnapshot>) -> Self {
        self.indices = indices;
        self
    }

    /// The two benchmarks the dashboard shows when no others are supplied.
    #[must_use]
    pub fn default_indices() -> Vec<IndexSnapshot> {
        vec![
            IndexSnapshot::new("NIFTY 50", 21_845.25, 0.75),
            IndexSnapshot::new("SENSEX", 72_012.15, 0.68),
        ]
    }

    /// Parses a snapshot of the form `{ "assets": [...], "indices": [...] }`.
    ///
    /// Asset fields use camelCase (`change24h`). When `indices` is absent the default
    /// benchmarks are used; an explicit empty list is kept empty. Records are taken as
    /// supplied: duplicate symbols are not rejected and a missing sector groups under `""`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Json`] if the input is not a valid snapshot document.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(json), err, fields(len = json.len())))]
    pub fn from_json(json: &str) -> Result<Self, MarketError> {
        let wire: SnapshotWire = serde_json::from_str(json)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            assets = wire.assets.len(),
            indices = wire.indices.as_ref().map(Vec::len),
            "parsed market snapshot"
        );

        Ok(Self {
            assets: wire.assets,
            indices: wire.indices.unwrap_or_else(Self::default_indices),
        })
    }
}

impl MarketDataProvider for StaticMarketData {
    fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    fn indices(&self) -> &[IndexSnapshot] {
        &self.indices
    }
}
