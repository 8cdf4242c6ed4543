use market_overview::{
    IndexSnapshot, MarketOverview, MarketOverviewBuilder, NewsItem, SectorGroups,
    StaticMarketData, Trend, classify,
};

use crate::common::scenario_assets;

#[test]
fn sections_follow_grouping_order() {
    let data = StaticMarketData::new(scenario_assets());
    let page = MarketOverview::builder(&data).build();

    let sectors: Vec<&str> = page.sectors.iter().map(|s| s.sector.as_str()).collect();
    assert_eq!(sectors, ["IT", "Banking"]);

    let it: Vec<&str> = page.sectors[0].stocks.iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(it, ["TCS", "INFY"]);
    assert_eq!(page.stock_count(), 3);
}

#[test]
fn stock_cards_carry_classified_changes() {
    let data = StaticMarketData::new(scenario_assets());
    let page = MarketOverview::builder(&data).build();

    let cards: Vec<_> = page.sectors.iter().flat_map(|s| &s.stocks).collect();
    assert_eq!(cards[0].change_label, "+1.2%");
    assert_eq!(cards[0].trend, Trend::Up);
    assert_eq!(cards[1].change_label, "-0.5%");
    assert_eq!(cards[1].trend, Trend::Down);
    assert_eq!(cards[2].change_label, "+0%");
    assert_eq!(cards[2].trend, classify(0.0).direction);
}

#[test]
fn default_indices_render_as_on_the_page() {
    let data = StaticMarketData::new(Vec::new());
    let page = MarketOverview::builder(&data).build();

    assert_eq!(page.indices.len(), 2);
    assert_eq!(page.indices[0].name, "NIFTY 50");
    assert_eq!(page.indices[0].value_label, "21,845.25");
    assert_eq!(page.indices[0].change_label, "+0.75%");
    assert_eq!(page.indices[1].name, "SENSEX");
    assert_eq!(page.indices[1].value_label, "72,012.15");
    assert!(page.sectors.is_empty());
}

#[test]
fn index_override_replaces_provider_indices() {
    let data = StaticMarketData::new(Vec::new());
    let page = MarketOverview::builder(&data)
        .indices(vec![IndexSnapshot::new("NIFTY IT", 35_120.0, -1.25)])
        .build();

    assert_eq!(page.indices.len(), 1);
    assert_eq!(page.indices[0].value_label, "35,120");
    assert_eq!(page.indices[0].change_label, "-1.25%");
    assert_eq!(page.indices[0].trend, Trend::Down);
}

#[test]
fn custom_formatter_is_used_for_prices() {
    let data = StaticMarketData::new(scenario_assets());
    let page = MarketOverview::builder(&data)
        .formatter(|amount: f64| format!("INR {amount}"))
        .build();
    assert_eq!(page.sectors[0].stocks[0].price_label, "INR 1000");
}

#[test]
fn news_can_be_replaced_and_limited() {
    let data = StaticMarketData::new(Vec::new());

    let page = MarketOverview::builder(&data).news_limit(2).build();
    assert_eq!(page.news.len(), 2);

    let page = MarketOverview::builder(&data)
        .news(vec![NewsItem::new("Markets open flat", "just now", "Mint")])
        .news_limit(5)
        .build();
    assert_eq!(page.news.len(), 1);
    assert_eq!(page.news[0].source, "Mint");

    let page = MarketOverview::builder(&data).news_limit(0).build();
    assert!(page.news.is_empty());
}

#[test]
fn repeated_builds_are_equal() {
    let data = StaticMarketData::new(scenario_assets());
    assert_eq!(
        MarketOverview::builder(&data).build(),
        MarketOverview::builder(&data).build()
    );
}

#[test]
fn provider_can_be_a_trait_object() {
    use market_overview::MarketDataProvider;

    let data = StaticMarketData::new(scenario_assets());
    let provider: &dyn MarketDataProvider = &data;
    let page = MarketOverview::builder(provider).build();
    assert_eq!(page.sectors.len(), 2);
}

#[test]
fn snapshot_indices_can_be_replaced() {
    let data = StaticMarketData::new(scenario_assets())
        .with_indices(vec![IndexSnapshot::new("NIFTY BANK", 46_210.4, -0.31)]);
    let page = MarketOverview::builder(&data).build();
    assert_eq!(page.indices.len(), 1);
    assert_eq!(page.indices[0].value_label, "46,210.4");
    assert_eq!(page.indices[0].trend, Trend::Down);
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn parallel_renders_share_one_snapshot() {
    assert_send_sync::<SectorGroups>();
    assert_send_sync::<MarketOverview>();
    assert_send_sync::<MarketOverviewBuilder<'_, StaticMarketData>>();
    assert_send_sync::<StaticMarketData>();

    let data = StaticMarketData::new(scenario_assets());
    let (left, right) = std::thread::scope(|s| {
        let a = s.spawn(|| MarketOverview::builder(&data).build());
        let b = s.spawn(|| MarketOverview::builder(&data).build());
        (a.join().unwrap(), b.join().unwrap())
    });
    assert_eq!(left, right);
    assert_eq!(left.sectors.len(), 2);
}
