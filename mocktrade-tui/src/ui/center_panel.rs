//! Center pane — selected instrument header, order buttons, chart placeholders.
//!
//! The chart and volume blocks are stand-ins until a data feed and a chart
//! widget are wired up.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, PageAction};
use crate::hit_map::{HitMap, HitTarget};
use crate::theme::{self, ButtonKind};

pub const CHART_HINT: &str = "[주가 차트 영역]";
pub const CHART_SUB_HINT: &str =
    "나중에 서버 데이터 + 차트 라이브러리(TradingView, Recharts 등)로 연결";
pub const VOLUME_HINT: &str = "[거래량 영역]";

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let inner = super::pane(f, area, "차트", false);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(inner);

    render_header(f, rows[0], app, hits);
    render_chart_placeholder(f, rows[2]);
    render_volume_placeholder(f, rows[3]);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(17)])
        .split(area);

    let header = app.header();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", header.name),
                theme::text().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(header.code_line(), theme::muted()),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {}", header.price_text),
                theme::text().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(header.change_text.clone(), theme::direction(header.direction)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), cols[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(6),
        ])
        .split(Rect {
            height: cols[1].height.min(1),
            ..cols[1]
        });

    for (slot, action, kind) in [
        (buttons[0], PageAction::Favorite, ButtonKind::Outline),
        (buttons[2], PageAction::Buy, ButtonKind::Buy),
        (buttons[4], PageAction::Sell, ButtonKind::Sell),
    ] {
        super::button(
            f,
            slot,
            action.label(),
            theme::button(kind),
            HitTarget::Action(action),
            hits,
        );
    }
}

fn render_chart_placeholder(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let pad = inner.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(CHART_HINT, theme::secondary())));
    lines.push(Line::from(Span::styled(CHART_SUB_HINT, theme::muted())));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_volume_placeholder(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let pad = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(VOLUME_HINT, theme::secondary())));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
