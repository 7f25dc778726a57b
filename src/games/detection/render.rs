//! Detection-demo rendering: a frame of labelled boxes plus a readout.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::session::SessionStatus;
use crate::widgets::{OverlayPanel, TabBar};

use super::actions::{START_DEMO, START_WEBCAM, STOP_FEED};
use super::state::{DetectionState, CATALOG, FRAME_SIZE};

/// Frame viewport in terminal cells.
const VIEW_COLS: usize = 40;
const VIEW_ROWS: usize = 16;

/// One display color per catalog class.
const CLASS_COLORS: [Color; 5] = [
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
];

fn col_of(x: f64) -> usize {
    ((x / FRAME_SIZE * VIEW_COLS as f64) as usize).min(VIEW_COLS - 1)
}

fn row_of(y: f64) -> usize {
    ((y / FRAME_SIZE * VIEW_ROWS as f64) as usize).min(VIEW_ROWS - 1)
}

pub fn render(
    state: &DetectionState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(VIEW_ROWS as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    render_mode_tabs(state, f, chunks[0], click_state);
    render_stats(state, f, chunks[1]);

    match state.session.status() {
        SessionStatus::Running => render_frame(state, f, chunks[2]),
        SessionStatus::Idle => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("AI Detection Demo", "[Enter] Run Simulation", START_DEMO)
                .line("A simulated real-time detection feed.")
                .line("Press W to try the webcam instead.")
                .render(f, chunks[2], &mut cs);
        }
        SessionStatus::Terminal => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Feed Complete", "[Enter] Run Again", START_DEMO)
                .title_color(Color::Green)
                .line(format!("Frames analyzed: {}", state.total()))
                .render(f, chunks[2], &mut cs);
        }
    }

    render_notice(state, f, chunks[3]);
}

fn render_mode_tabs(
    state: &DetectionState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);

    let mut cs = click_state.borrow_mut();
    if state.session.is_running() {
        TabBar::new(" │ ")
            .tab("Simulated", active, START_DEMO)
            .tab("Webcam", inactive, START_WEBCAM)
            .tab("[S]top", inactive, STOP_FEED)
            .render(f, area, &mut cs);
    } else {
        TabBar::new(" │ ")
            .tab("[D]emo", active, START_DEMO)
            .tab("[W]ebcam", inactive, START_WEBCAM)
            .render(f, area, &mut cs);
    }
}

fn render_stats(state: &DetectionState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("FPS ", Style::default().fg(Color::Gray)),
        Span::styled(state.fps.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled("   Objects ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.boxes.len().to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::styled("   Frames ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.total().to_string(),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled("   Accuracy ", Style::default().fg(Color::Gray)),
        Span::styled("95%", Style::default().fg(Color::Yellow)),
    ]);
    let stats = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(stats, area);
}

fn render_frame(state: &DetectionState, f: &mut Frame, area: Rect) {
    let mut buf = vec![vec![(' ', Color::White); VIEW_COLS]; VIEW_ROWS];

    for b in &state.boxes {
        let color = CLASS_COLORS[b.class % CLASS_COLORS.len()];
        let left = col_of(b.x);
        let right = col_of(b.x + b.w);
        let top = row_of(b.y);
        let bottom = row_of(b.y + b.h);

        for col in left..=right {
            buf[top][col] = ('─', color);
            buf[bottom][col] = ('─', color);
        }
        for row in buf.iter_mut().take(bottom + 1).skip(top) {
            row[left] = ('│', color);
            row[right] = ('│', color);
        }
        buf[top][left] = ('┌', color);
        buf[top][right] = ('┐', color);
        buf[bottom][left] = ('└', color);
        buf[bottom][right] = ('┘', color);

        // Label + confidence inside the top edge, clipped to the frame.
        let (label, _) = CATALOG[b.class];
        let tag = format!("{} {:.0}%", label, b.confidence * 100.0);
        for (i, ch) in tag.chars().enumerate() {
            let col = left + 1 + i;
            if col >= right.min(VIEW_COLS - 1) {
                break;
            }
            if top + 1 < VIEW_ROWS {
                buf[top + 1][col] = (ch, color);
            }
        }
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

    let frame_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" live feed (simulated) "),
    );
    f.render_widget(frame_widget, area);
}

fn render_notice(state: &DetectionState, f: &mut Frame, area: Rect) {
    if let Some(notice) = &state.notice {
        let widget = Paragraph::new(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )));
        f.render_widget(widget, area);
    }
}
