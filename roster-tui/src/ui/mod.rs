//! Screen layout
//!
//! ```text
//! ┌ header: title, total, location, latest notification ┐
//! │ employee table                                      │
//! │ pager                                               │
//! │ logs                                                │
//! └ command bar / key help                              ┘
//! ```
//! Dialogs are drawn on top.

mod dialogs;
mod table;

use crate::app::{App, InputMode};
use ratatui::{prelude::*, widgets::*};
use roster_core::Dialog;
use shared::NotificationLevel;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Table
            Constraint::Length(3), // Pager
            Constraint::Length(8), // Logs
            Constraint::Length(3), // Command bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    table::render_table(f, chunks[1], app);
    table::render_pager(f, chunks[2], app);
    render_logs(f, chunks[3], app);
    render_command_bar(f, chunks[4], app);

    match app.manager.active_dialog() {
        Some(Dialog::ConfirmDelete(id)) => {
            // confirmation overlays the form
            if app.manager.form().is_open() {
                dialogs::render_form(f, app);
            }
            dialogs::render_confirm(f, app, id);
        }
        Some(Dialog::Form(_)) => dialogs::render_form(f, app),
        None => {}
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " Employee Management ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::raw(format!("Total Employees: {}", app.manager.total())),
        Span::raw(" | "),
        Span::styled(
            app.manager.location().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(toast) = app.manager.notifier().latest() {
        let color = match toast.level {
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Info => Color::Blue,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", toast.message),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_logs(f: &mut Frame, area: Rect, app: &App) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    if app.input_mode() != InputMode::Command {
        let help = match app.input_mode() {
            InputMode::Form => "Tab/↑↓ field  ←→ gender  Enter save  Esc close",
            InputMode::Confirm => "y/Enter delete  n/Esc cancel",
            _ => "a add  e edit  x delete  1/2 sort  ←→ page  +/- rows  / command  q quit",
        };
        let hint = Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Keys "));
        f.render_widget(hint, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Command Input (Type /help) ");
    let width = area.width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(Style::default().fg(Color::Yellow))
        .scroll((0, scroll as u16))
        .block(block);
    f.render_widget(input, area);

    f.set_cursor_position((
        area.x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
        area.y + 1,
    ));
}

/// Rect of `percent_x` × `height` centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
