mod model;

pub use model::NewsItem;

use chrono::{DateTime, Utc};

/// The headlines shown on the markets page when no feed is supplied.
#[must_use]
pub fn default_headlines() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "RBI Keeps Repo Rate Unchanged at 6.5%",
            "2 hours ago",
            "Economic Times",
        ),
        NewsItem::new(
            "IT Sector Leads Market Rally on Strong Q4 Outlook",
            "3 hours ago",
            "Business Standard",
        ),
        NewsItem::new(
            "FIIs Turn Net Buyers in Indian Markets",
            "4 hours ago",
            "Moneycontrol",
        ),
    ]
}

/// Renders how long ago `published` was, as of `now`.
///
/// Under a minute (or in the future) is `"just now"`; otherwise the largest whole unit
/// of minutes, hours or days is used, e.g. `"1 hour ago"`, `"3 days ago"`.
#[must_use]
pub fn relative_time_label(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(published);
    let (n, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };
    let plural = if n == 1 { "" } else { "s" };
    format!("{n} {unit}{plural} ago")
}
