use serde::{Deserialize, Deserializer, Serialize};

use crate::trend::{Trend, TrendLabel, classify};

/* ----- ASSETS (shared by sector/ and overview/) ----- */

/// A tradable asset as supplied by the market data provider.
///
/// Records are immutable snapshots; nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Ticker symbol, unique within a snapshot (e.g. `"TCS"`).
    pub symbol: String,
    /// Display name (e.g. `"Tata Consultancy Services"`).
    pub name: String,
    /// Categorical sector used as the grouping key. Compared by exact string equality.
    /// A missing or `null` sector becomes the literal `""` key.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sector: String,
    /// Current price in the snapshot's currency.
    pub price: f64,
    /// 24-hour change, in percent.
    #[serde(rename = "change24h")]
    pub change_24h: f64,
}

impl AssetRecord {
    /// Creates a new record.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        price: f64,
        change_24h: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector: sector.into(),
            price,
            change_24h,
        }
    }

    /// Direction of the 24-hour change.
    #[must_use]
    pub fn trend(&self) -> Trend {
        Trend::from_delta(self.change_24h)
    }

    /// Direction and signed label of the 24-hour change.
    #[must_use]
    pub fn change_label(&self) -> TrendLabel {
        classify(self.change_24h)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/* ----- INDICES ----- */

/// A benchmark index reading. The trend is derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    /// Index identifier as displayed (e.g. `"NIFTY 50"`).
    pub name: String,
    /// Current index level.
    pub value: f64,
    /// Change, in percent.
    pub change: f64,
}

impl IndexSnapshot {
    /// Creates a new index snapshot.
    pub fn new(name: impl Into<String>, value: f64, change: f64) -> Self {
        Self {
            name: name.into(),
            value,
            change,
        }
    }

    #[must_use]
    pub fn trend(&self) -> Trend {
        Trend::from_delta(self.change)
    }

    #[must_use]
    pub fn change_label(&self) -> TrendLabel {
        classify(self.change)
    }
}
