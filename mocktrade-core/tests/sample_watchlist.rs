//! End-to-end checks against the built-in sample watchlist.

use mocktrade_core::{Direction, InfoTab, QuoteHeader, Selection, Watchlist};

#[test]
fn initial_load_shows_samsung_down() {
    let w = Watchlist::sample();
    let sel = Selection::initial(&w);
    let header = sel.header(&w);

    assert_eq!(header.name, "삼성전자");
    assert_eq!(header.price_text, "107,900");
    assert_eq!(header.change_text, "-0.46%");
    assert_eq!(header.direction, Direction::Down);
}

#[test]
fn sample_directions() {
    let w = Watchlist::sample();
    let directions: Vec<(&str, Direction)> =
        w.items().map(|i| (i.id.as_str(), i.direction())).collect();
    assert_eq!(
        directions,
        vec![
            ("005930", Direction::Down),
            ("086520", Direction::Down),
            ("034020", Direction::Flat),
            ("AAPL", Direction::Down),
            ("MSFT", Direction::Up),
            ("TSLA", Direction::Up),
            ("BTC", Direction::Up),
        ]
    );
}

#[test]
fn every_sample_item_has_a_logo() {
    let w = Watchlist::sample();
    assert!(w.items().all(|i| i.logo_text.is_some()));
    assert_eq!(w.find("BTC").map(|i| i.logo()), Some("₿".to_string()));
}

#[test]
fn exported_toml_loads_from_disk() {
    let dir = std::env::temp_dir().join("mocktrade_watchlist_export");
    let path = dir.join("watchlist.toml");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, Watchlist::sample().to_toml().unwrap()).unwrap();

    let loaded = Watchlist::from_file(&path).unwrap();
    assert_eq!(loaded, Watchlist::sample());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn duplicate_ids_in_file_are_rejected() {
    let text = r#"
        [[groups]]
        title = "가상화폐"

        [[groups.items]]
        id = "BTC"
        name = "비트코인"
        code = "BTC"
        market_label = "KRW"
        price_text = "137,473,000"
        change_text = "+0.70%"

        [[groups.items]]
        id = "BTC"
        name = "비트코인 2"
        code = "BTC"
        market_label = "KRW"
        price_text = "1"
        change_text = "-0.10%"
    "#;
    let err = Watchlist::from_toml(text).unwrap_err();
    assert!(err.to_string().contains("BTC"));
}

#[test]
fn every_tab_has_its_own_card() {
    let cards: Vec<&str> = InfoTab::ALL.iter().map(|t| t.placeholder()).collect();
    assert_eq!(
        cards,
        vec![
            "요약 영역(추후 서버 데이터)",
            "재무 영역(추후 서버 데이터)",
            "이슈 영역(추후 서버 데이터)",
        ]
    );
}

#[test]
fn fallback_header_for_unknown_id() {
    let w = Watchlist::sample();
    assert_eq!(QuoteHeader::from(w.find("NOPE")), QuoteHeader::fallback());
}
