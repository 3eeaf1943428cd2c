use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::QuizItem;

use super::{difficulty_style, question_text, render_controls};

const LINES_PER_ITEM: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_status(frame, chunks[1], app);
    render_items(frame, chunks[2], app);
    render_controls(
        frame,
        chunks[3],
        "j/k navigate  ·  enter open  ·  r refresh  ·  q quit",
    );
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        "RANDOM TRIVIA",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.store();
    let mut spans = Vec::new();

    if store.is_loading() {
        spans.push(Span::styled("Loading...", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::styled(
            format!("{} questions", app.items().len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(error) = store.last_error() {
        spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_items(frame: &mut Frame, area: Rect, app: &App) {
    let items = app.items();

    if items.is_empty() {
        let message = if app.store().is_loading() {
            "Fetching questions..."
        } else {
            "No questions yet. Press r to fetch."
        };
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| item_lines(item, index == app.cursor()))
        .collect();

    let scroll = scroll_offset(app.cursor(), area.height as usize);
    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn item_lines(item: &QuizItem, is_selected: bool) -> [Line<'_>; LINES_PER_ITEM] {
    let marker = if is_selected { "> " } else { "  " };
    let question_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    [
        Line::from(vec![
            Span::raw("  "),
            Span::styled(item.category.as_str(), Style::default().fg(Color::DarkGray)),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                item.difficulty.as_str(),
                difficulty_style(item.difficulty_color()),
            ),
        ]),
        Line::from(vec![
            Span::styled(marker, question_style),
            Span::styled(question_text(&item.question.text), question_style),
        ]),
        Line::from(""),
    ]
}

/// Smallest scroll that keeps the selected item fully visible.
fn scroll_offset(cursor: usize, height: usize) -> usize {
    let bottom = (cursor + 1) * LINES_PER_ITEM;
    bottom.saturating_sub(height)
}
