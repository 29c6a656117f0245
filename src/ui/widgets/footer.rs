//! Footer widget with keybinding hints

use crate::app::{App, ListKind};
use crate::theme;
use nordtray::constants;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render dashboard footer with context-aware shortcuts
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    if app.show_help {
        render_hints(frame, area, &[("any key", "Close")]);
        return;
    }

    let switch_to = match app.list_kind {
        ListKind::Countries => "Groups",
        ListKind::Groups | ListKind::Cities => "Countries",
    };

    let mut hints = Vec::new();

    // Only offer selection when there is something to select
    if !app.visible_names().is_empty() {
        hints.push(("↵", "Connect"));
        match app.list_kind {
            ListKind::Countries => hints.push(("→", "Cities")),
            ListKind::Cities => hints.push(("←", "Back")),
            ListKind::Groups => {}
        }
    }

    hints.extend_from_slice(&[
        ("c", "Quick"),
        ("d", "Disconnect"),
        ("Tab", switch_to),
        ("r", "Refresh"),
        ("?", "Keys"),
        ("q", "Quit"),
    ]);

    render_hints(frame, area, &hints);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),     // Hints (left)
        Constraint::Length(16), // Branding (right)
    ])
    .split(area);

    // 1. Render hints on the left
    let mut hint_spans = vec![Span::raw(" ")];
    let mut current_width = 1;
    let max_width = chunks[0].width as usize;

    for (i, (key, action)) in hints.iter().enumerate() {
        // "key" + " " + "action", plus " │ " before every item but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.chars().count() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(theme::BORDER_DEFAULT),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(
            *action,
            Style::default().fg(theme::TEXT_SECONDARY),
        ));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), chunks[0]);

    // 2. Render branding on the right
    let branding = Line::from(vec![Span::styled(
        format!("{} v{} ", constants::APP_NAME, constants::APP_VERSION),
        Style::default().fg(theme::TEXT_SECONDARY),
    )]);
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
