use crate::app::{App, InputMode};
use ratatui::{prelude::*, widgets::*};
use roster_core::{PageIndicator, PageLimit, SortKey};

fn sort_arrow(app: &App, key: SortKey) -> &'static str {
    match app.manager.sort_direction(key) {
        Some(true) => "↑",
        Some(false) => "↓",
        None => "↕",
    }
}

pub fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Employees ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if app.manager.total() == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No employees found.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press 'a' to create your first employee.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let page = app.manager.page();
    let header = Row::new(vec![
        Cell::from("No"),
        Cell::from("ID"),
        Cell::from(format!("Name {}", sort_arrow(app, SortKey::Name))),
        Cell::from("Date of Birth"),
        Cell::from("Gender"),
        Cell::from("Email"),
        Cell::from(format!("Address {}", sort_arrow(app, SortKey::Address))),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = page
        .data
        .iter()
        .enumerate()
        .map(|(idx, e)| {
            Row::new(vec![
                Cell::from(page.row_number(idx).to_string()),
                Cell::from(e.id.to_string()),
                Cell::from(e.name.clone()),
                Cell::from(e.date_of_birth.format("%Y-%m-%d").to_string()),
                Cell::from(e.gender.as_str()),
                Cell::from(e.email.clone()),
                Cell::from(e.address.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(18),
        Constraint::Percentage(20),
        Constraint::Length(13),
        Constraint::Length(7),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];

    let highlight = if app.input_mode() == InputMode::Normal {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !page.data.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

pub fn render_pager(f: &mut Frame, area: Rect, app: &App) {
    let page = app.manager.page();
    let mut spans = vec![Span::raw(if page.has_prev() { " ◀ " } else { "   " })];

    for indicator in app.manager.page_indicators() {
        let span = match indicator {
            PageIndicator::Page(n) if n == page.page => Span::styled(
                format!(" {n} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            other => Span::raw(format!(" {other} ")),
        };
        spans.push(span);
    }

    spans.push(Span::raw(if page.has_next() { " ▶ " } else { "   " }));
    spans.push(Span::raw("   Rows per page: "));
    for limit in PageLimit::ALL {
        let style = if limit == app.manager.limit() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{limit} "), style));
    }

    let pager = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(pager, area);
}
