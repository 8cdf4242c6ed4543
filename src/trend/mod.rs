//! Sign-based trend classification for percentage changes.

use serde::Serialize;

/// Direction of a change, used by the presentation layer to pick colors and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Classifies a delta. Zero (and negative zero) is `Up`; `NaN` is `Down`.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta >= 0.0 { Self::Up } else { Self::Down }
    }

    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }

    /// Tag consumed by the presentation layer: `"up"` or `"down"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`classify`]: the direction plus the sign-adjusted display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendLabel {
    pub direction: Trend,
    pub signed_label: String,
}

impl TrendLabel {
    /// The signed label with a `%` suffix, as shown next to a change (`+1.2%`).
    #[must_use]
    pub fn percent(&self) -> String {
        format!("{}%", self.signed_label)
    }
}

/// Classifies `delta` and renders it with an explicit `+` when non-negative.
///
/// The number is rendered with its shortest round-trip representation; rounding and
/// locale separators are left to the caller.
///
/// ```
/// use market_overview::{Trend, classify};
///
/// let up = classify(1.2);
/// assert_eq!((up.direction, up.signed_label.as_str()), (Trend::Up, "+1.2"));
///
/// let flat = classify(0.0);
/// assert_eq!((flat.direction, flat.signed_label.as_str()), (Trend::Up, "+0"));
///
/// let down = classify(-0.5);
/// assert_eq!((down.direction, down.signed_label.as_str()), (Trend::Down, "-0.5"));
/// ```
#[must_use]
pub fn classify(delta: f64) -> TrendLabel {
    let direction = Trend::from_delta(delta);
    // -0.0 is non-negative but would render as "-0".
    let shown = if delta == 0.0 { 0.0 } else { delta };
    let signed_label = match direction {
        Trend::Up => format!("+{shown}"),
        Trend::Down => shown.to_string(),
    };
    TrendLabel {
        direction,
        signed_label,
    }
}
