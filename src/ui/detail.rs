use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::ViewingContext;

use super::{difficulty_style, question_text, render_controls};

pub fn render(frame: &mut Frame, area: Rect, context: &ViewingContext) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let item = context.item();
    let header = Line::from(vec![
        Span::styled(item.category.as_str(), Style::default().fg(Color::DarkGray)),
        Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            item.difficulty.as_str(),
            difficulty_style(item.difficulty_color()),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let question = Paragraph::new(question_text(&item.question.text))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(question, chunks[1]);

    render_answers(frame, chunks[2], context.answers(), context.cursor());
    render_controls(
        frame,
        chunks[3],
        "j/k navigate  ·  enter answer  ·  esc back  ·  q quit",
    );
}

fn render_answers(frame: &mut Frame, area: Rect, answers: &[String], cursor: usize) {
    let lines: Vec<Line> = answers
        .iter()
        .enumerate()
        .flat_map(|(index, answer)| {
            let is_selected = index == cursor;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            [
                Line::from(vec![
                    Span::styled(format!(" {} ", marker), style),
                    Span::styled(answer.as_str(), style),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    let scroll = (cursor * 2 + 2).saturating_sub(area.height.saturating_sub(2) as usize);
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Answers ")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}
