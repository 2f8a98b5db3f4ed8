//! Left pane — watchlist groups with clickable instrument rows.

use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use mocktrade_core::{StockItem, Watchlist};

use crate::app::{AppState, PageAction};
use crate::hit_map::{HitMap, HitTarget};
use crate::theme::{self, ButtonKind};
use crate::ui::{fit, fit_right};

pub const TITLE: &str = "≡ 새 관심목록";
const ROW_HEIGHT: u16 = 2;
const NUM_WIDTH: usize = 12;

/// One vertical slot in the scrolled list.
#[derive(Debug, Clone, Copy)]
enum Entry<'a> {
    GroupTitle(&'a str),
    Row(&'a StockItem),
}

impl Entry<'_> {
    fn height(&self) -> u16 {
        match self {
            Entry::GroupTitle(_) => 1,
            Entry::Row(_) => ROW_HEIGHT,
        }
    }
}

fn entries(watchlist: &Watchlist) -> Vec<Entry<'_>> {
    let mut out = Vec::new();
    for group in &watchlist.groups {
        out.push(Entry::GroupTitle(group.title.as_str()));
        out.extend(group.items.iter().map(Entry::Row));
    }
    out
}

/// First line to draw so the selected row stays on screen.
///
/// Lines are counted in `usize`; a long watchlist outgrows `u16`.
fn scroll_offset(entries: &[Entry<'_>], selected_id: &str, height: u16) -> usize {
    let mut top = 0usize;
    for entry in entries {
        if let Entry::Row(item) = entry {
            if item.id == selected_id {
                let bottom = top + usize::from(entry.height());
                return bottom.saturating_sub(usize::from(height));
            }
        }
        top += usize::from(entry.height());
    }
    0
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let inner = super::pane(f, area, "관심종목", false);
    if inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    render_header(f, rows[0], hits);

    let list_area = rows[1];
    let entries = entries(&app.watchlist);
    let offset = scroll_offset(&entries, app.selected_id(), list_area.height);

    let width = list_area.width as usize;
    let mut y = 0usize;
    for entry in &entries {
        let top = y;
        y += usize::from(entry.height());
        if top < offset {
            continue;
        }
        let Ok(rel) = u16::try_from(top - offset) else {
            break;
        };
        if rel.saturating_add(entry.height()) > list_area.height {
            break;
        }
        let slot = Rect::new(list_area.x, list_area.y + rel, list_area.width, entry.height());
        match entry {
            Entry::GroupTitle(title) => {
                let line = Line::from(Span::styled(
                    fit(&format!(" {title}"), width),
                    theme::secondary().add_modifier(Modifier::BOLD),
                ));
                f.render_widget(Paragraph::new(line), slot);
            }
            Entry::Row(item) => {
                let active = app.selection.is_selected(item);
                f.render_widget(Paragraph::new(row_lines(item, width, active)), slot);
                hits.push(slot, HitTarget::Row(item.id.clone()));
            }
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(area);
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {TITLE}"), theme::text().add_modifier(Modifier::BOLD))),
        cols[0],
    );
    super::button(
        f,
        cols[1],
        PageAction::AddSymbol.label(),
        theme::button(ButtonKind::Outline),
        HitTarget::Action(PageAction::AddSymbol),
        hits,
    );
}

/// Two lines: logo · name · price, then code · change.
fn row_lines(item: &StockItem, width: usize, active: bool) -> Vec<Line<'static>> {
    let name_width = width.saturating_sub(NUM_WIDTH + 5);
    let num_width = NUM_WIDTH.min(width.saturating_sub(5));
    let direction = item.direction();

    let marker = if active {
        Span::styled("▌", theme::accent())
    } else {
        Span::raw(" ")
    };

    let first = Line::from(vec![
        marker.clone(),
        Span::styled(fit(&item.logo(), 2), theme::accent_bold()),
        Span::raw(" "),
        Span::styled(fit(&item.name, name_width), theme::text()),
        Span::raw(" "),
        Span::styled(fit_right(&item.price_text, num_width), theme::text()),
    ]);
    let second = Line::from(vec![
        marker,
        Span::raw("   "),
        Span::styled(fit(&item.code, name_width), theme::muted()),
        Span::raw(" "),
        Span::styled(fit_right(&item.change_text, num_width), theme::direction(direction)),
    ]);

    if active {
        vec![first.style(theme::active_row()), second.style(theme::active_row())]
    } else {
        vec![first, second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_interleave_titles_and_rows() {
        let w = Watchlist::sample();
        let e = entries(&w);
        assert_eq!(e.len(), 3 + 7);
        assert!(matches!(e[0], Entry::GroupTitle("국내종목")));
        assert!(matches!(e[4], Entry::GroupTitle("해외종목")));
    }

    #[test]
    fn scroll_keeps_selected_visible() {
        let w = Watchlist::sample();
        let e = entries(&w);
        // BTC is the last row: 3 titles + 6 rows above it = 15 lines, bottom at 17.
        assert_eq!(scroll_offset(&e, "BTC", 10), 7);
        assert_eq!(scroll_offset(&e, "005930", 10), 0);
        assert_eq!(scroll_offset(&e, "BTC", 40), 0);
        assert_eq!(scroll_offset(&e, "MISSING", 4), 0);
    }

    #[test]
    fn scroll_offset_past_u16_range() {
        let items = (0..40_000)
            .map(|i| StockItem::new(format!("X{i}"), "종목", format!("X{i}"), "코스피", "1", "+1%"))
            .collect();
        let w = Watchlist::new(vec![mocktrade_core::StockGroup::new("대량", items)]).unwrap();
        let e = entries(&w);
        // 1 title line + 40,000 two-line rows.
        assert_eq!(scroll_offset(&e, "X39999", 20), 80_001 - 20);
    }

    #[test]
    fn row_lines_carry_price_and_change() {
        let w = Watchlist::sample();
        let item = w.find("MSFT").unwrap();
        let lines = row_lines(item, 34, false);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        let second: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains("마이크로소프트"));
        assert!(first.ends_with("$492.02"));
        assert!(second.contains("MSFT"));
        assert!(second.ends_with("+0.20%"));
    }
}
