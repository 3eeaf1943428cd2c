mod detail;
mod list;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, AppState};
use crate::models::DifficultyColor;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match (app.state, app.context()) {
        (AppState::Detail, Some(context)) => detail::render(frame, area, context),
        (AppState::Result, Some(context)) => result::render(frame, area, context),
        _ => list::render(frame, area, app),
    }
}

fn difficulty_style(color: DifficultyColor) -> Style {
    let fg = match color {
        DifficultyColor::Green => Color::Green,
        DifficultyColor::Yellow => Color::Yellow,
        DifficultyColor::Red => Color::Red,
        DifficultyColor::Secondary => Color::DarkGray,
    };
    Style::default().fg(fg)
}

fn question_text(text: &str) -> &str {
    if text.is_empty() {
        "No Question Available"
    } else {
        text
    }
}

fn render_controls(frame: &mut Frame, area: Rect, controls: &str) {
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
