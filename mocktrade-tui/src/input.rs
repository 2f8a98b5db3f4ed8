//! Input dispatch — overlay → search box → global page keys, plus mouse.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use mocktrade_core::InfoTab;

use crate::app::{AppState, Focus, Overlay, PageAction};

type Bindings = &'static [(&'static str, &'static str)];

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Focused search box.
    if app.focus == Focus::Search {
        handle_search_key(app, key);
        return;
    }

    // 3. Page keys.
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char('s') | KeyCode::Char('S') = key.code {
            app.focus_search();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('/') => app.focus_search(),

        // Watchlist
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Tabs
        KeyCode::Char('1') => app.set_tab(InfoTab::Summary),
        KeyCode::Char('2') => app.set_tab(InfoTab::Finance),
        KeyCode::Char('3') => app.set_tab(InfoTab::Issue),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.set_tab(app.active_tab.prev());
            } else {
                app.set_tab(app.active_tab.next());
            }
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            app.set_tab(app.active_tab.prev());
        }

        // Buttons without a backend
        KeyCode::Char('L') => app.trigger(PageAction::Login),
        KeyCode::Char('a') => app.trigger(PageAction::AddSymbol),
        KeyCode::Char('f') => app.trigger(PageAction::Favorite),
        KeyCode::Char('b') => app.trigger(PageAction::Buy),
        KeyCode::Char('s') => app.trigger(PageAction::Sell),

        _ => {}
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.search_input.push(c);
        }
        _ => {}
    }
}

/// Handle a mouse event: left click hits a region, the wheel moves the selection.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown if app.overlay == Overlay::None => app.select_next(),
        MouseEventKind::ScrollUp if app.overlay == Overlay::None => app.select_prev(),
        _ => {}
    }
}

const GLOBAL_KEYS: Bindings = &[
    ("q / Esc", "Quit"),
    ("Ctrl+C", "Quit"),
    ("?", "Toggle this help"),
    ("Alt+s / /", "Focus search box"),
    ("click", "Select row / tab / button"),
];

const WATCHLIST_KEYS: Bindings = &[
    ("↑/k, ↓/j", "Previous / next instrument"),
    ("g / G", "First / last instrument"),
    ("wheel", "Previous / next instrument"),
];

const TAB_KEYS: Bindings = &[
    ("1 / 2 / 3", "요약 / 재무 / 이슈"),
    ("Tab, l / h", "Next / previous tab"),
];

const SEARCH_KEYS: Bindings = &[("Enter", "Jump to first match"), ("Esc", "Cancel")];

const PLACEHOLDER_KEYS: Bindings = &[
    ("L", "로그인"),
    ("a", "종목추가"),
    ("f", "즐겨찾기"),
    ("b / s", "매수 / 매도"),
];

/// Key bindings help text, by section.
pub fn key_bindings_help() -> Vec<(&'static str, Bindings)> {
    vec![
        ("전체", GLOBAL_KEYS),
        ("관심목록", WATCHLIST_KEYS),
        ("종목정보", TAB_KEYS),
        ("검색", SEARCH_KEYS),
        ("준비 중", PLACEHOLDER_KEYS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use mocktrade_core::Watchlist;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn app() -> AppState {
        AppState::new(Watchlist::sample())
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn test_vim_style_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_id(), "086520");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_id(), "034020");
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_id(), "086520");
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_id(), "BTC");
        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_id(), "005930");
    }

    #[test]
    fn test_tab_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab, InfoTab::Issue);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, InfoTab::Summary);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, InfoTab::Issue);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab, InfoTab::Finance);
    }

    #[test]
    fn test_alt_s_focuses_search_and_types() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT));
        assert_eq!(app.focus, Focus::Search);
        assert!(app.status_message.is_none());

        for c in "btc".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' while typing is text, not quit.
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_input, "btc");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_id(), "BTC");
        assert_eq!(app.focus, Focus::Page);
    }

    #[test]
    fn test_search_escape_cancels() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Page);
        assert!(app.search_input.is_empty());
        assert!(app.running);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_id(), "005930");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn test_sell_key_sets_notice_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        let (msg, _) = app.status_message.clone().unwrap();
        assert!(msg.contains("매도"));
        assert_eq!(app.selected_id(), "005930");
    }

    #[test]
    fn test_mouse_wheel_moves_selection() {
        let mut app = app();
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.selected_id(), "086520");
        handle_mouse(&mut app, wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.selected_id(), "005930");
    }

    #[test]
    fn test_key_bindings_help() {
        let bindings = key_bindings_help();
        assert_eq!(bindings.len(), 5);
        assert_eq!(bindings[0].1[0].0, "q / Esc");
    }
}
