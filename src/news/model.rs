use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single headline in the market news feed. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// The headline.
    pub title: String,
    /// Relative publication time as displayed (e.g. "2 hours ago").
    pub time: String,
    /// The publisher (e.g. "Economic Times").
    pub source: String,
}

impl NewsItem {
    /// Creates an item with a pre-rendered time label.
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            source: source.into(),
        }
    }

    /// Creates an item whose time label is derived from `published` relative to `now`.
    pub fn published(
        title: impl Into<String>,
        source: impl Into<String>,
        published: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(title, super::relative_time_label(published, now), source)
    }
}
