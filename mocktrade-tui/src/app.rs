//! Application state — single-owner, main-thread only.
//!
//! The page has two pieces of real state: the selected instrument id and the
//! active info tab. Everything else here (search input, overlay, status line,
//! hit map) is terminal plumbing around them.

use mocktrade_core::{InfoTab, QuoteHeader, Selection, StockItem, Watchlist};

use crate::hit_map::{HitMap, HitTarget};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Search,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Buttons that are drawn but have no backend yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Login,
    AddSymbol,
    Favorite,
    Buy,
    Sell,
}

impl PageAction {
    pub fn label(self) -> &'static str {
        match self {
            PageAction::Login => "로그인",
            PageAction::AddSymbol => "＋ 종목추가",
            PageAction::Favorite => "☆",
            PageAction::Buy => "매수",
            PageAction::Sell => "매도",
        }
    }

    /// Status-bar notice shown when the button is used.
    pub fn notice(self) -> String {
        let feature = match self {
            PageAction::Login => "로그인",
            PageAction::AddSymbol => "종목추가",
            PageAction::Favorite => "즐겨찾기",
            PageAction::Buy => "매수",
            PageAction::Sell => "매도",
        };
        format!("{feature} 기능은 준비 중입니다")
    }
}

/// Top-level application state.
pub struct AppState {
    pub watchlist: Watchlist,
    pub selection: Selection,
    pub active_tab: InfoTab,
    pub running: bool,

    pub focus: Focus,
    pub search_input: String,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    /// Clickable regions from the last rendered frame.
    pub hit_map: HitMap,
}

impl AppState {
    pub fn new(watchlist: Watchlist) -> Self {
        let selection = Selection::initial(&watchlist);
        Self {
            watchlist,
            selection,
            active_tab: InfoTab::default(),
            running: true,
            focus: Focus::Page,
            search_input: String::new(),
            overlay: Overlay::None,
            status_message: None,
            hit_map: HitMap::default(),
        }
    }

    pub fn selected_id(&self) -> &str {
        self.selection.id()
    }

    /// The selected row, if the id still matches one.
    pub fn selected_item(&self) -> Option<&StockItem> {
        self.selection.resolve(&self.watchlist)
    }

    pub fn header(&self) -> QuoteHeader {
        self.selection.header(&self.watchlist)
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selection.select(id);
    }

    pub fn select_next(&mut self) {
        self.selection.select_next(&self.watchlist);
    }

    pub fn select_prev(&mut self) {
        self.selection.select_prev(&self.watchlist);
    }

    pub fn select_first(&mut self) {
        self.selection.select_first(&self.watchlist);
    }

    pub fn select_last(&mut self) {
        self.selection.select_last(&self.watchlist);
    }

    pub fn set_tab(&mut self, tab: InfoTab) {
        if self.active_tab != tab {
            log::debug!("tab {} -> {}", self.active_tab, tab);
            self.active_tab = tab;
        }
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn cancel_search(&mut self) {
        self.focus = Focus::Page;
        self.search_input.clear();
    }

    /// Jump to the first row matching the search input.
    pub fn submit_search(&mut self) {
        let query = self.search_input.trim().to_string();
        self.focus = Focus::Page;
        self.search_input.clear();
        if query.is_empty() {
            return;
        }
        let hit = self
            .watchlist
            .search(&query)
            .map(|item| (item.id.clone(), item.name.clone()));
        match hit {
            Some((id, name)) => {
                self.select(id);
                self.set_status(format!("{name} 선택"));
            }
            None => {
                log::debug!("search {query:?}: no match");
                self.set_warning(format!("'{query}' 검색 결과가 없습니다"));
            }
        }
    }

    pub fn trigger(&mut self, action: PageAction) {
        log::info!("placeholder action {action:?}");
        self.set_warning(action.notice());
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }

    /// Apply a left click at a terminal cell.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.overlay != Overlay::None {
            self.overlay = Overlay::None;
            return;
        }
        let target = self.hit_map.target_at(column, row).cloned();
        if self.focus == Focus::Search && target != Some(HitTarget::Search) {
            self.cancel_search();
        }
        match target {
            Some(HitTarget::Row(id)) => self.select(id),
            Some(HitTarget::Tab(tab)) => self.set_tab(tab),
            Some(HitTarget::Search) => self.focus_search(),
            Some(HitTarget::Action(action)) => self.trigger(action),
            None => {}
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn starts_on_first_item_and_summary() {
        let app = AppState::new(Watchlist::sample());
        assert_eq!(app.selected_id(), "005930");
        assert_eq!(app.active_tab, InfoTab::Summary);
        assert!(app.running);
    }

    #[test]
    fn empty_watchlist_starts_with_fallback_header() {
        let app = AppState::new(Watchlist::default());
        assert_eq!(app.selected_id(), "");
        assert!(app.selected_item().is_none());
        assert_eq!(app.header().name, "-");
    }

    #[test]
    fn search_selects_first_match() {
        let mut app = AppState::new(Watchlist::sample());
        app.focus_search();
        app.search_input = "테슬".into();
        app.submit_search();
        assert_eq!(app.selected_id(), "TSLA");
        assert_eq!(app.focus, Focus::Page);
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn search_miss_keeps_selection_and_warns() {
        let mut app = AppState::new(Watchlist::sample());
        app.search_input = "없는종목".into();
        app.submit_search();
        assert_eq!(app.selected_id(), "005930");
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn empty_search_is_ignored() {
        let mut app = AppState::new(Watchlist::sample());
        app.search_input = "  ".into();
        app.submit_search();
        assert_eq!(app.selected_id(), "005930");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn actions_only_set_a_notice() {
        let mut app = AppState::new(Watchlist::sample());
        app.trigger(PageAction::Buy);
        assert_eq!(app.selected_id(), "005930");
        assert_eq!(app.active_tab, InfoTab::Summary);
        let (msg, level) = app.status_message.clone().unwrap();
        assert!(msg.contains("매수"));
        assert_eq!(level, StatusLevel::Warning);
    }

    #[test]
    fn click_dispatches_hit_targets() {
        let mut app = AppState::new(Watchlist::sample());
        app.hit_map.push(Rect::new(0, 5, 20, 2), HitTarget::Row("MSFT".into()));
        app.hit_map.push(Rect::new(60, 3, 6, 1), HitTarget::Tab(InfoTab::Issue));
        app.hit_map.push(Rect::new(20, 0, 30, 3), HitTarget::Search);

        app.click(3, 6);
        assert_eq!(app.selected_id(), "MSFT");

        app.click(62, 3);
        assert_eq!(app.active_tab, InfoTab::Issue);

        app.click(25, 1);
        assert_eq!(app.focus, Focus::Search);

        // Clicking empty space leaves state alone but drops search focus.
        app.click(100, 100);
        assert_eq!(app.selected_id(), "MSFT");
        assert_eq!(app.focus, Focus::Page);
    }

    #[test]
    fn clicking_away_from_search_drops_the_query() {
        let mut app = AppState::new(Watchlist::sample());
        app.hit_map.push(Rect::new(20, 0, 30, 3), HitTarget::Search);
        app.click(25, 1);
        app.search_input.push_str("테슬");

        app.click(100, 100);
        assert_eq!(app.focus, Focus::Page);
        assert!(app.search_input.is_empty());
        assert_eq!(app.selected_id(), "005930");

        app.focus_search();
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn click_closes_help_first() {
        let mut app = AppState::new(Watchlist::sample());
        app.hit_map.push(Rect::new(0, 0, 10, 10), HitTarget::Row("BTC".into()));
        app.toggle_help();
        app.click(1, 1);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.selected_id(), "005930");
    }
}
