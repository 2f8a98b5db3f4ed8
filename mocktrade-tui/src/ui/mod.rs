//! Top-level UI layout — top bar, three-pane body, status bar.

pub mod center_panel;
pub mod info_panel;
pub mod overlays;
pub mod status_bar;
pub mod top_bar;
pub mod watchlist_panel;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{AppState, Overlay};
use crate::hit_map::{HitMap, HitTarget};
use crate::theme;

const TOP_BAR_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 36;
const RIGHT_PANE_WIDTH: u16 = 32;

/// Draw the entire UI and return the clickable regions of this frame.
pub fn draw(f: &mut Frame, app: &AppState) -> HitMap {
    let mut hits = HitMap::default();
    let area = f.area();
    f.render_widget(Block::default().style(theme::base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    top_bar::render(f, chunks[0], app, &mut hits);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(20),
            Constraint::Length(RIGHT_PANE_WIDTH),
        ])
        .split(chunks[1]);

    watchlist_panel::render(f, body[0], app, &mut hits);
    center_panel::render(f, body[1], app, &mut hits);
    info_panel::render(f, body[2], app, &mut hits);

    status_bar::render(f, chunks[2], app);

    // Overlays swallow clicks, so their regions are not recorded.
    if app.overlay == Overlay::Help {
        overlays::render_help(f, area);
    }

    hits
}

/// Bordered pane with a title, returning the inner area.
pub(crate) fn pane(f: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Centered label filling `area`, registered as an action region.
pub(crate) fn button(
    f: &mut Frame,
    area: Rect,
    label: &str,
    style: ratatui::style::Style,
    target: HitTarget,
    hits: &mut HitMap,
) {
    let row = Rect {
        y: area.y + area.height.saturating_sub(1) / 2,
        height: area.height.min(1),
        ..area
    };
    f.render_widget(
        Paragraph::new(Span::styled(label.to_string(), style)).alignment(Alignment::Center),
        row,
    );
    hits.push(area, target);
}

/// Truncate or pad to exactly `width` terminal cells (left aligned).
pub fn fit(text: &str, width: usize) -> String {
    let (mut out, used) = truncate(text, width);
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Truncate or pad to exactly `width` terminal cells (right aligned).
pub fn fit_right(text: &str, width: usize) -> String {
    let (out, used) = truncate(text, width);
    let mut padded: String = std::iter::repeat(' ').take(width - used).collect();
    padded.push_str(&out);
    padded
}

fn truncate(text: &str, width: usize) -> (String, usize) {
    if text.width() <= width {
        return (text.to_string(), text.width());
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    (out, used)
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_double_width_text() {
        assert_eq!(fit("삼성전자", 10), "삼성전자  ");
        assert_eq!(fit("AAPL", 6), "AAPL  ");
    }

    #[test]
    fn fit_truncates_on_cell_boundary() {
        // 두산에너빌리티 is 14 cells; a 5-cell budget fits two syllables.
        assert_eq!(fit("두산에너빌리티", 5), "두산 ");
        assert_eq!(fit("두산에너빌리티", 5).width(), 5);
    }

    #[test]
    fn fit_right_aligns() {
        assert_eq!(fit_right("+0.20%", 8), "  +0.20%");
        assert_eq!(fit_right("137,473,000", 4), "137,");
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}
