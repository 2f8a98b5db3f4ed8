//! Top bar — brand, search box, login button.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus, PageAction};
use crate::hit_map::{HitMap, HitTarget};
use crate::theme::{self, ButtonKind};

pub const BRAND: &str = "모의투자";
pub const SEARCH_PLACEHOLDER: &str = "종목 검색 (Alt + s)";

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(12),
        ])
        .split(area);

    // Brand, vertically centered.
    let brand_row = Rect {
        y: cols[0].y + cols[0].height / 2,
        height: cols[0].height.min(1),
        ..cols[0]
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {BRAND}"), theme::accent_bold())),
        brand_row,
    );

    render_search(f, cols[1], app);
    hits.push(cols[1], HitTarget::Search);

    let login = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let inner = login.inner(cols[2]);
    f.render_widget(login, cols[2]);
    super::button(
        f,
        inner,
        PageAction::Login.label(),
        theme::button(ButtonKind::Outline),
        HitTarget::Action(PageAction::Login),
        hits,
    );
    // The border is part of the button too.
    hits.push(cols[2], HitTarget::Action(PageAction::Login));
}

fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused));

    let line = if focused {
        Line::from(vec![
            Span::styled(" ⌕ ", theme::accent()),
            Span::styled(app.search_input.as_str(), theme::text()),
            Span::styled("_", theme::accent()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ⌕ ", theme::muted()),
            Span::styled(SEARCH_PLACEHOLDER, theme::muted()),
        ])
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
