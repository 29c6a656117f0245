use crate::app::App;
use nordtray::constants;
use nordtray::state::{ConnectionState, SettingName};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::widgets;
use crate::theme;

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // 1. Status Header (1 row)
    // 2. Main Content (Flexible)
    // 3. Command Footer (1 row)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    widgets::footer::render_dashboard(frame, app, chunks[2]);

    // Main Content: Left Sidebar (Servers) | Right Workspace
    let main_layout = Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    render_server_list(frame, app, main_layout[0]);

    // Right Workspace: Top (Details + Settings) | Bottom (Logs)
    let workspace_chunks =
        Layout::vertical([Constraint::Length(12), Constraint::Min(0)]).split(main_layout[1]);

    let top = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(workspace_chunks[0]);

    render_connection_details(frame, app, top[0]);
    render_settings(frame, app, top[1]);
    render_activity_log(frame, app, workspace_chunks[1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.status.state;
    let symbol = match state {
        ConnectionState::Connected => "●",
        ConnectionState::Connecting => "◐",
        ConnectionState::Disconnected => "○",
    };

    let separator = || Span::styled(" │ ", Style::default().fg(theme::TEXT_SECONDARY));

    let mut spans = vec![
        Span::styled(
            format!(" {} ", constants::APP_NAME.to_uppercase()),
            Style::default()
                .fg(theme::ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("{symbol} {}", state.as_str().to_uppercase()),
            Style::default()
                .fg(theme::state_color(state))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({})", app.status.summary())),
    ];

    for warning in &app.status.warnings {
        spans.push(separator());
        spans.push(Span::styled(
            warning.message(),
            Style::default().fg(theme::WARNING),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_server_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(app.list_title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.visible_names().is_empty() {
        frame.render_widget(
            Paragraph::new(constants::CLI_MSG_NO_ENTRIES)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::TEXT_SECONDARY)),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .visible_names()
        .iter()
        .map(|name| ListItem::new(name.replace('_', " ")))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .highlight_style(
            Style::default()
                .bg(theme::ROW_SELECTED_BG)
                .fg(theme::ROW_SELECTED_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, inner, &mut app.list_state);
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(value, Style::default().fg(theme::TEXT_PRIMARY)),
    ])
}

fn render_connection_details(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(" Connection Details ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(details) = &app.status.details {
        let text = vec![
            Line::from(vec![
                Span::styled("Server     : ", Style::default().fg(theme::TEXT_SECONDARY)),
                Span::styled(
                    &details.server,
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            field("Country    : ", &details.country),
            field("City       : ", &details.city),
            field("Server IP  : ", &details.ip),
            field("Technology : ", &details.technology),
            field("Protocol   : ", &details.protocol),
            Line::from(""),
            field("Transfer   : ", &details.transfer),
            field("Uptime     : ", &details.uptime),
        ];

        frame.render_widget(Paragraph::new(text), inner);
    } else {
        frame.render_widget(
            Paragraph::new("No active connection")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::TEXT_SECONDARY)),
            inner,
        );
    }
}

fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(" Settings ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let settings = &app.settings;
    let technology = settings
        .technology
        .map_or_else(|| constants::MSG_NO_DATA.to_string(), |t| t.to_string());

    let mut lines = vec![Line::from(vec![
        Span::styled("Technology  : ", Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(technology, Style::default().fg(theme::ACCENT_SECONDARY)),
    ])];

    for setting in SettingName::ALL {
        if matches!(
            setting,
            SettingName::Technology | SettingName::WhitelistedSubnets
        ) {
            continue;
        }
        let value = settings.flag(setting);
        let text = match value {
            Some(true) => constants::VALUE_ON,
            Some(false) => constants::VALUE_OFF,
            None => constants::MSG_NO_DATA,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}: ", setting.label()),
                Style::default().fg(theme::TEXT_SECONDARY),
            ),
            Span::styled(text, Style::default().fg(theme::flag_color(value))),
        ]));
    }

    if !settings.whitelisted_subnets.is_empty() {
        lines.push(field("Whitelisted : ", ""));
        for subnet in &settings.whitelisted_subnets {
            lines.push(Line::from(Span::styled(
                format!("  {subnet}"),
                Style::default().fg(theme::TEXT_PRIMARY),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_activity_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(" Activity Log ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let logs: Vec<Line> = app
        .logs
        .iter()
        .map(|msg| {
            let (timestamp, content) = msg.split_once(' ').unwrap_or(("", msg.as_str()));

            let style = if content.starts_with("ERROR") {
                Style::default().fg(theme::ERROR)
            } else if content.starts_with("SUCCESS") {
                Style::default().fg(theme::SUCCESS)
            } else if content.starts_with("WARN") {
                Style::default().fg(theme::WARNING)
            } else if content.starts_with("STATUS") {
                Style::default().fg(theme::ACCENT_SECONDARY)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            };

            Line::from(vec![
                Span::styled(
                    format!("[{timestamp}] "),
                    Style::default().fg(theme::TEXT_SECONDARY),
                ),
                Span::styled(content, style),
            ])
        })
        .collect();

    // Keep the newest lines in view.
    #[allow(clippy::cast_possible_truncation)]
    let scroll_offset = logs.len().saturating_sub(inner.height as usize) as u16;

    frame.render_widget(Paragraph::new(logs).scroll((scroll_offset, 0)), inner);
}
