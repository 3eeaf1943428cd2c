use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{evaluate, Verdict, ViewingContext};

use super::{question_text, render_controls};

pub fn render(frame: &mut Frame, area: Rect, context: &ViewingContext) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let item = context.item();
    let selection = context.selection().unwrap_or_default();
    let (symbol, headline, color) = match evaluate(item, selection) {
        Verdict::Correct => ("✓", "CORRECT", Color::Green),
        Verdict::Incorrect => ("✗", "INCORRECT", Color::Red),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  {}", symbol, headline),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question_text(&item.question.text),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your Answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(selection, Style::default().fg(color)),
        ]),
        Line::from(""),
        Line::from("Correct Answer:".bold()),
        Line::from(Span::styled(
            item.correct_answer.as_str(),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from("Incorrect Answers:".bold()),
    ];
    lines.extend(item.incorrect_answers.iter().map(|answer| {
        Line::from(Span::styled(
            answer.as_str(),
            Style::default().fg(Color::Red),
        ))
    }));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, chunks[0]);

    render_controls(frame, chunks[1], "esc back  ·  q quit");
}
