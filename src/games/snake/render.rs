//! Snake rendering: the grid as two-column cells plus a score panel.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::OverlayPanel;

use super::state::{Cell, SnakeState, GRID_SIZE};
use super::START_RUN;

/// Grid width in terminal columns: two columns per cell plus borders.
const GRID_COLS: u16 = GRID_SIZE as u16 * 2 + 2;
const GRID_ROWS: u16 = GRID_SIZE as u16 + 2;

pub fn render(
    state: &SnakeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(GRID_ROWS)])
            .split(area);
        render_stats(state, f, chunks[0]);
        render_board_area(state, f, chunks[1], click_state);
    } else {
        let h_chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Length(GRID_COLS), Constraint::Min(24)])
            .split(area);
        let right = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(h_chunks[1]);

        render_board_area(state, f, h_chunks[0], click_state);
        render_stats(state, f, right[0]);
        render_top_runs(state, f, right[1]);
    }
}

fn render_stats(state: &SnakeState, f: &mut Frame, area: Rect) {
    let best = state
        .best
        .map(|b| b.to_string())
        .unwrap_or_else(|| "--".to_string());
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
            Span::styled("Best  ", Style::default().fg(Color::Gray)),
            Span::styled(best, Style::default().fg(Color::Yellow)),
        ]),
    ];
    let stats = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(stats, area);
}

fn render_board_area(
    state: &SnakeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if state.session.is_running() {
        render_grid(state, f, area);
    } else if state.session.is_terminal() {
        let mut cs = click_state.borrow_mut();
        OverlayPanel::new("Game Over", "[R] Play Again", START_RUN)
            .title_color(Color::Red)
            .line(format!("Score: {}", state.session.score()))
            .render(f, area, &mut cs);
    } else {
        let mut cs = click_state.borrow_mut();
        OverlayPanel::new("Snake", "[Enter] Start", START_RUN)
            .line("Use arrow keys to steer.")
            .line("Eat food, avoid walls and yourself.")
            .render(f, area, &mut cs);
    }
}

fn render_grid(state: &SnakeState, f: &mut Frame, area: Rect) {
    let head = state.body.front().copied();
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_SIZE as usize);

    for y in 0..GRID_SIZE {
        let mut spans: Vec<Span> = Vec::with_capacity(GRID_SIZE as usize);
        for x in 0..GRID_SIZE {
            let cell = Cell { x, y };
            let span = if Some(cell) == head {
                Span::styled(
                    "██",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if state.body.contains(&cell) {
                Span::styled("██", Style::default().fg(Color::Blue))
            } else if cell == state.food {
                Span::styled("◆ ", Style::default().fg(Color::Red))
            } else {
                Span::styled("· ", Style::default().fg(Color::Black))
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(grid, area);
}

fn render_top_runs(state: &SnakeState, f: &mut Frame, area: Rect) {
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
            Span::styled(
                entry.score.to_string(),
                Style::default().fg(Color::Cyan),
            ),
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

