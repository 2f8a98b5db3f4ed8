//! Right pane — tab strip and the active tab's placeholder card.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use mocktrade_core::InfoTab;

use crate::app::AppState;
use crate::hit_map::{HitMap, HitTarget};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let inner = super::pane(f, area, "종목정보", false);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    render_tabs(f, rows[0], app.active_tab, hits);
    render_card(f, rows[1], app.active_tab);
}

fn render_tabs(f: &mut Frame, area: Rect, active: InfoTab, hits: &mut HitMap) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(InfoTab::ALL.map(|_| Constraint::Ratio(1, InfoTab::ALL.len() as u32)))
        .split(area);

    for (tab, slot) in InfoTab::ALL.into_iter().zip(slots.iter()) {
        let is_active = tab == active;
        let label = Line::from(Span::styled(tab.label(), theme::tab(is_active)));
        let rule = if is_active { "━" } else { "─" };
        let underline = Line::from(Span::styled(
            rule.repeat(slot.width as usize),
            theme::panel_border(is_active),
        ));
        f.render_widget(
            Paragraph::new(vec![label, underline]).alignment(Alignment::Center),
            *slot,
        );
        hits.push(*slot, HitTarget::Tab(tab));
    }
}

/// Exactly one card: the active tab's.
fn render_card(f: &mut Frame, area: Rect, active: InfoTab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let para = Paragraph::new(Span::styled(active.placeholder(), theme::muted()))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
