//! Ski Slalom rendering: the virtual field projected onto terminal cells.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::session::SessionStatus;
use crate::widgets::OverlayPanel;

use super::state::{SkiingState, BAND_BOTTOM, BAND_TOP, FIELD_H, FIELD_W, GATE_WIDTH};
use super::START_RUN;

/// Field viewport in terminal cells.
const VIEW_COLS: usize = 40;
const VIEW_ROWS: usize = 20;

fn col_of(x: f64) -> usize {
    ((x / FIELD_W * VIEW_COLS as f64) as usize).min(VIEW_COLS - 1)
}

fn row_of(y: f64) -> Option<usize> {
    if y < 0.0 || y >= FIELD_H {
        return None;
    }
    Some(((y / FIELD_H * VIEW_ROWS as f64) as usize).min(VIEW_ROWS - 1))
}

pub fn render(
    state: &SkiingState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(VIEW_ROWS as u16 + 2),
            ])
            .split(area);
        render_stats(state, f, chunks[0]);
        render_field_area(state, f, chunks[1], click_state);
    } else {
        let h_chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Length(VIEW_COLS as u16 + 2), Constraint::Min(24)])
            .split(area);
        let right = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(h_chunks[1]);

        render_field_area(state, f, h_chunks[0], click_state);
        render_stats(state, f, right[0]);
        render_top_runs(state, f, right[1]);
    }
}

fn render_stats(state: &SkiingState, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Score ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.session.score().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}x", state.speed),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    let stats = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(stats, area);
}

fn render_field_area(
    state: &SkiingState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match state.session.status() {
        SessionStatus::Running => render_field(state, f, area),
        SessionStatus::Idle => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Ski Slalom", "[Enter] Hit the Slopes", START_RUN)
                .line("Steer with the arrow keys.")
                .line("Miss a gate and the run is over.")
                .render(f, area, &mut cs);
        }
        SessionStatus::Terminal => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Missed a Gate!", "[R] Try Again", START_RUN)
                .title_color(Color::Red)
                .line(format!("Score: {}", state.session.score()))
                .render(f, area, &mut cs);
        }
    }
}

fn render_field(state: &SkiingState, f: &mut Frame, area: Rect) {
    let mut buf = vec![vec![(' ', Color::White); VIEW_COLS]; VIEW_ROWS];

    for gate in &state.gates {
        let Some(row) = row_of(gate.y) else { continue };
        let left = col_of(gate.x);
        let right = col_of(gate.x + GATE_WIDTH);
        let color = if gate.passed {
            Color::DarkGray
        } else {
            Color::Red
        };
        buf[row][left] = ('█', color);
        buf[row][right] = ('█', color);
        for cell in buf[row].iter_mut().take(right).skip(left + 1) {
            *cell = ('╌', color);
        }
    }

    // Skier sits mid-band.
    if let Some(row) = row_of((BAND_TOP + BAND_BOTTOM) / 2.0) {
        buf[row][col_of(state.skier_x)] = ('◉', Color::Cyan);
    }

    let lines: Vec<Line> = buf
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, color)| Span::styled(ch.to_string(), Style::default().fg(color)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let field = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(field, area);
}

fn render_top_runs(state: &SkiingState, f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    if state.board.is_empty() {
        lines.push(Line::from(Span::styled(
            "No runs recorded yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, entry) in state.board.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:<10}", entry.name), Style::default().fg(Color::Gray)),
            Span::styled(entry.score.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Top Runs "),
    );
    f.render_widget(board, area);
}
