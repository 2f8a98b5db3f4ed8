//! Overlay widgets — key binding help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" 도움말 [?/Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    for (section, bindings) in key_bindings_help() {
        lines.push(Line::from(Span::styled(section, theme::accent_bold())));
        for (keys, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:>14}  "), theme::accent()),
                Span::styled(*desc, theme::muted()),
            ]));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
