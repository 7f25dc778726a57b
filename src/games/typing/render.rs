//! Typing Test rendering: per-character diff of the snippet plus stats.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::session::SessionStatus;
use crate::widgets::OverlayPanel;

use super::state::TypingState;
use super::START_RUN;

pub fn render(
    state: &TypingState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(area);

    render_stats(state, f, chunks[0]);

    match state.session.status() {
        SessionStatus::Running => {
            render_snippet(state, f, chunks[1]);
            render_input_line(state, f, chunks[2]);
        }
        SessionStatus::Idle => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Typing Test", "[Enter] Start", START_RUN)
                .line("Type the snippet before the clock runs out.")
                .render(f, chunks[1], &mut cs);
        }
        SessionStatus::Terminal => {
            let mut cs = click_state.borrow_mut();
            if state.completed {
                OverlayPanel::new("Perfect!", "[R] Next Challenge", START_RUN)
                    .title_color(Color::Green)
                    .line(format!(
                        "{} WPM at {}% accuracy",
                        state.wpm, state.accuracy
                    ))
                    .render(f, chunks[1], &mut cs);
            } else {
                OverlayPanel::new("Time's Up!", "[R] Try Again", START_RUN)
                    .line(format!(
                        "{} WPM at {}% accuracy",
                        state.wpm, state.accuracy
                    ))
                    .render(f, chunks[1], &mut cs);
            }
        }
    }
}

fn render_stats(state: &TypingState, f: &mut Frame, area: Rect) {
    let best = state
        .best_wpm
        .map(|b| b.to_string())
        .unwrap_or_else(|| "--".to_string());
    let line = Line::from(vec![
        Span::styled("WPM ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.wpm.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Accuracy ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}%", state.accuracy),
            Style::default().fg(Color::Green),
        ),
        Span::styled("   Time ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}s", state.time_left),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("   Best ", Style::default().fg(Color::Gray)),
        Span::styled(best, Style::default().fg(Color::Magenta)),
    ]);
    let stats = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(stats, area);
}

/// The snippet with each character colored by its judgement: green for a
/// correct position, red for a miss, dim for not yet reached.
fn render_snippet(state: &TypingState, f: &mut Frame, area: Rect) {
    let typed: Vec<char> = state.typed.chars().collect();
    let spans: Vec<Span> = state
        .target
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let style = match typed.get(i) {
                Some(t) if *t == c => Style::default().fg(Color::Green),
                Some(_) => Style::default().fg(Color::Red).add_modifier(Modifier::UNDERLINED),
                None => Style::default().fg(Color::DarkGray),
            };
            Span::styled(c.to_string(), style)
        })
        .collect();

    let snippet = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(snippet, area);
}

fn render_input_line(state: &TypingState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(state.typed.clone(), Style::default().fg(Color::White)),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]);
    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" type here "),
    );
    f.render_widget(input, area);
}
