//! Key binding reference popup, toggled with `?`.

use crate::theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("↑/k ↓/j", "Move selection"),
    ("Enter", "Connect to selection"),
    ("→/l", "Cities of country"),
    ("←/h/Esc", "Back to countries"),
    ("Tab", "Countries / groups"),
    ("c", "Quick connect"),
    ("d", "Disconnect"),
    ("r", "Refresh everything"),
    ("f", "Toggle firewall"),
    ("K", "Toggle kill switch"),
    ("n", "Toggle notifications"),
    ("6", "Toggle IPv6"),
    ("q", "Quit"),
];

/// Render the key binding overlay
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame) {
    let max_label_len = BINDINGS.iter().map(|(_, l)| l.len()).max().unwrap_or(20);
    let max_key_len = BINDINGS
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(1);
    let width = (max_key_len + max_label_len + 8).min(60) as u16; // key + padding + label
    let height = (BINDINGS.len() + 2) as u16; // items + borders

    let area = centered_rect(width, height, frame.area());

    // Clear background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(" Keys ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = BINDINGS
        .iter()
        .map(|(key, label)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {key:<max_key_len$} "),
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(*label, Style::default().fg(theme::TEXT_PRIMARY)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
