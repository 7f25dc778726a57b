//! Traffic Dodge rendering: three lanes with a detection-overlay readout.

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

use super::state::{TrafficState, VehicleKind, FIELD_H, LANES, PLAYER_Y};
use super::START_RUN;

/// Road viewport in terminal cells.
const VIEW_COLS: usize = 30;
const VIEW_ROWS: usize = 20;
const LANE_COLS: usize = VIEW_COLS / LANES;

fn row_of(y: f64) -> Option<usize> {
    if y < 0.0 || y >= FIELD_H {
        return None;
    }
    Some(((y / FIELD_H * VIEW_ROWS as f64) as usize).min(VIEW_ROWS - 1))
}

fn lane_col(lane: usize) -> usize {
    lane * LANE_COLS + LANE_COLS / 2
}

pub fn render(
    state: &TrafficState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(VIEW_ROWS as u16 + 2),
            ])
            .split(area);
        render_stats(state, f, chunks[0]);
        render_road_area(state, f, chunks[1], click_state);
    } else {
        let h_chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Length(VIEW_COLS as u16 + 2), Constraint::Min(24)])
            .split(area);
        let right = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(5)])
            .split(h_chunks[1]);

        render_road_area(state, f, h_chunks[0], click_state);
        render_stats(state, f, right[0]);
        render_top_trackers(state, f, right[1]);
    }
}

fn render_stats(state: &TrafficState, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Tracked ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.detected.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Score   ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.session.score().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed   ", Style::default().fg(Color::Gray)),
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

fn render_road_area(
    state: &TrafficState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match state.session.status() {
        SessionStatus::Running => render_road(state, f, area),
        SessionStatus::Idle => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Traffic Dodge", "[Enter] Start Tracking", START_RUN)
                .line("Change lanes with the arrow keys.")
                .line("Every vehicle you dodge is tracked.")
                .render(f, area, &mut cs);
        }
        SessionStatus::Terminal => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Collision Detected!", "[R] Restart", START_RUN)
                .title_color(Color::Red)
                .line(format!("Vehicles tracked: {}", state.detected))
                .line(format!("Score: {}", state.session.score()))
                .render(f, area, &mut cs);
        }
    }
}

fn render_road(state: &TrafficState, f: &mut Frame, area: Rect) {
    let mut buf = vec![vec![(' ', Color::White); VIEW_COLS]; VIEW_ROWS];

    // Lane dividers.
    for row in buf.iter_mut() {
        for lane in 1..LANES {
            row[lane * LANE_COLS] = ('┊', Color::Yellow);
        }
    }

    for v in &state.vehicles {
        let Some(row) = row_of(v.y) else { continue };
        let col = lane_col(v.lane);
        let (ch, color) = match v.kind {
            VehicleKind::Car => ('▄', Color::Blue),
            VehicleKind::Truck => ('█', Color::Yellow),
        };
        buf[row][col] = (ch, color);
    }

    if let Some(row) = row_of(PLAYER_Y) {
        buf[row][lane_col(state.player_lane)] = ('▲', Color::Cyan);
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

    let road = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" live: {} vehicles ", state.vehicles.len())),
    );
    f.render_widget(road, area);
}

fn render_top_trackers(state: &TrafficState, f: &mut Frame, area: Rect) {
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
            Span::styled(entry.score.to_string(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Top Trackers "),
    );
    f.render_widget(board, area);
}
