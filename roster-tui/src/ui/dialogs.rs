use super::centered_rect;
use crate::app::{App, InputMode};
use ratatui::{prelude::*, widgets::*};
use roster_core::Field;
use shared::models::EmployeeId;

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Nguyen Van A",
        Field::DateOfBirth => "YYYY-MM-DD",
        Field::Gender => "Select gender",
        Field::Email => "example@gmail.com",
        Field::Address => "Ha Noi",
    }
}

pub fn render_form(f: &mut Frame, app: &App) {
    let mode = app.manager.form();
    let area = centered_rect(60, (Field::ALL.len() as u16) * 3 + 4, f.area());
    let focused = app.input_mode() == InputMode::Form;

    let mut lines = Vec::new();
    let mut cursor = None;
    for field in Field::ALL {
        let is_focus = focused && field == app.focus;
        let label_style = if is_focus {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("{}:", field.label()), label_style)));

        let value = if field == Field::Gender {
            app.manager
                .draft()
                .gender
                .map(|g| format!("◀ {g} ▶"))
                .unwrap_or_default()
        } else if is_focus {
            app.input.value().to_string()
        } else {
            app.manager.draft().value(field)
        };

        if is_focus && field != Field::Gender {
            // +2: border and the leading space
            cursor = Some((
                area.x + 2 + app.input.visual_cursor() as u16,
                area.y + 1 + lines.len() as u16,
            ));
        }

        let value_line = if value.is_empty() {
            Span::styled(
                format!(" {}", placeholder(field)),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(format!(" {value}"))
        };
        lines.push(Line::from(value_line));

        let error = app.manager.errors().get(field).unwrap_or("");
        lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!(" [Enter] {} ", mode.submit_label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(" [Esc] Cancel ", Style::default().fg(Color::Gray)),
    ]));

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", mode.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }
}

pub fn render_confirm(f: &mut Frame, app: &App, id: EmployeeId) {
    let area = centered_rect(40, 8, f.area());
    let name = app
        .manager
        .find_by_id(id)
        .map(|e| e.name.as_str())
        .unwrap_or("?");

    let lines = vec![
        Line::from(Span::styled(
            "Are you sure?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("You will not be able to recover this employee!"),
        Line::from(Span::styled(
            format!("{name} (#{id})"),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " [y] Yes, delete it! ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" [n] Cancel ", Style::default().fg(Color::Gray)),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Delete Employee ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
