use thiserror::Error;

/// The primary error type for the fallible edges of this crate.
///
/// Grouping and trend classification are total and never produce this error; it only
/// surfaces when loading a market snapshot or serializing a view model.
#[derive(Debug, Error)]
pub enum MarketError {
    /// A snapshot or view model could not be (de)serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
