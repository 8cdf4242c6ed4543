use chrono::{Duration, TimeZone, Utc};
use market_overview::{NewsItem, default_headlines, relative_time_label};

#[test]
fn default_headlines_match_the_page() {
    let news = default_headlines();
    assert_eq!(news.len(), 3);
    assert_eq!(news[0].title, "RBI Keeps Repo Rate Unchanged at 6.5%");
    assert_eq!(news[0].time, "2 hours ago");
    assert_eq!(news[0].source, "Economic Times");
    assert_eq!(news[2].source, "Moneycontrol");
}

#[test]
fn relative_labels_pick_the_largest_unit() {
    let now = Utc.with_ymd_and_hms(2024, 4, 12, 15, 0, 0).unwrap();
    let cases = [
        (Duration::seconds(0), "just now"),
        (Duration::seconds(59), "just now"),
        (Duration::minutes(1), "1 minute ago"),
        (Duration::minutes(45), "45 minutes ago"),
        (Duration::minutes(61), "1 hour ago"),
        (Duration::hours(2), "2 hours ago"),
        (Duration::hours(25), "1 day ago"),
        (Duration::days(9), "9 days ago"),
    ];
    for (ago, expected) in cases {
        assert_eq!(relative_time_label(now - ago, now), expected, "{ago}");
    }
}

#[test]
fn future_timestamps_are_just_now() {
    let now = Utc.with_ymd_and_hms(2024, 4, 12, 15, 0, 0).unwrap();
    assert_eq!(relative_time_label(now + Duration::hours(3), now), "just now");
}

#[test]
fn published_items_carry_a_relative_label() {
    let now = Utc.with_ymd_and_hms(2024, 4, 12, 15, 0, 0).unwrap();
    let item = NewsItem::published(
        "FIIs Turn Net Buyers in Indian Markets",
        "Moneycontrol",
        now - Duration::hours(4),
        now,
    );
    assert_eq!(
        item,
        NewsItem::new("FIIs Turn Net Buyers in Indian Markets", "4 hours ago", "Moneycontrol")
    );
}
