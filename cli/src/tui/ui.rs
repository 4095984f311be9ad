use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Task list
            Constraint::Length(3), // Input bar
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("TASKPAD")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_task_list(f, app, main_chunks[1]);
    draw_input_bar(f, app, main_chunks[2]);

    let help = match app.mode {
        Mode::Normal => "j/k: Navigate | Space: Toggle | a: Add | e: Edit | d: Delete | q: Quit",
        Mode::Adding | Mode::Editing(_) => "Enter: Submit | Esc: Cancel",
        Mode::ConfirmRemove(_) => "y: Remove | n: Keep",
        Mode::Alert(_) => "Enter: Dismiss",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    match &app.mode {
        Mode::ConfirmRemove(id) => draw_confirm_dialog(f, app, *id, size),
        Mode::Alert(message) => draw_alert_dialog(f, message, size),
        _ => {}
    }
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app
        .tasks
        .iter()
        .map(|task| {
            let marker = if task.done { "✔" } else { "☐" };
            let marker_style = if task.done {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };

            let title_style = if task.done {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            Row::new(vec![
                Span::styled(marker, marker_style),
                Span::styled(task.title.clone(), title_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3), // Done marker
            Constraint::Min(10),   // Title
        ],
    )
    .block(
        Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_input_bar(f: &mut Frame, app: &App, area: Rect) {
    let (title, text, style) = match app.mode {
        Mode::Adding => (" New task ", app.input.as_str(), Style::default()),
        Mode::Editing(_) => (" Rename task ", app.input.as_str(), Style::default()),
        _ => (
            " Input ",
            "press 'a' to add a task",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);

    if matches!(app.mode, Mode::Adding | Mode::Editing(_)) {
        // Cursor sits after the glyphs left of it, not after the chars
        let prefix: String = app.input.chars().take(app.cursor_position).collect();
        let x = area.x + 1 + prefix.width() as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn draw_confirm_dialog(f: &mut Frame, app: &App, id: u64, size: Rect) {
    let title = app
        .tasks
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.title.as_str())
        .unwrap_or("this task");

    let area = centered_rect(60, 5, size);
    f.render_widget(Clear, area);

    let body = vec![
        Line::from(format!("Remove '{}'?", title)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::Green)),
        ]),
    ];
    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Remove task ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(dialog, area);
}

fn draw_alert_dialog(f: &mut Frame, message: &str, size: Rect) {
    let area = centered_rect(60, 5, size);
    f.render_widget(Clear, area);

    let body = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Yellow))),
    ];
    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Duplicate task ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(dialog, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
