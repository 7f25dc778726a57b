//! Memory Match rendering: a 4×4 card grid with per-card click targets.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::session::SessionStatus;
use crate::widgets::OverlayPanel;

use super::actions::{CARD_BASE, START_RUN};
use super::state::{format_time, MemoryCard, MemoryState};

const GRID_SIDE: usize = 4;
/// Card footprint in terminal cells.
const CARD_W: u16 = 7;
const CARD_H: u16 = 3;

pub fn render(
    state: &MemoryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(CARD_H * GRID_SIDE as u16 + 2),
        ])
        .split(area);

    render_stats(state, f, chunks[0]);

    match state.session.status() {
        SessionStatus::Running => render_cards(state, f, chunks[1], click_state),
        SessionStatus::Idle => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("Memory Match", "[Enter] Start", START_RUN)
                .line("Tap cards (or press a–p) to flip them.")
                .line("Match all eight pairs.")
                .render(f, chunks[1], &mut cs);
        }
        SessionStatus::Terminal => {
            let mut cs = click_state.borrow_mut();
            OverlayPanel::new("You Won!", "[R] Play Again", START_RUN)
                .title_color(Color::Green)
                .line(format!("Time: {}", format_time(state.elapsed_secs())))
                .line(format!("Moves: {}", state.moves))
                .render(f, chunks[1], &mut cs);
        }
    }
}

fn render_stats(state: &MemoryState, f: &mut Frame, area: Rect) {
    let best = state
        .best_time_secs
        .map(format_time)
        .unwrap_or_else(|| "--".to_string());
    let line = Line::from(vec![
        Span::styled("Time ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_time(state.elapsed_secs()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("   Moves ", Style::default().fg(Color::Gray)),
        Span::styled(state.moves.to_string(), Style::default().fg(Color::Magenta)),
        Span::styled("   Pairs ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/8", state.matches),
            Style::default().fg(Color::Green),
        ),
        Span::styled("   Best ", Style::default().fg(Color::Gray)),
        Span::styled(best, Style::default().fg(Color::Yellow)),
    ]);
    let stats = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(stats, area);
}

fn render_cards(
    state: &MemoryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let board = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = board.inner(area);
    f.render_widget(board, area);

    let mut cs = click_state.borrow_mut();
    for (idx, card) in state.cards.iter().enumerate() {
        let row = idx / GRID_SIDE;
        let col = idx % GRID_SIDE;
        let rect = Rect::new(
            inner.x + col as u16 * CARD_W,
            inner.y + row as u16 * CARD_H,
            CARD_W.min(inner.width.saturating_sub(col as u16 * CARD_W)),
            CARD_H.min(inner.height.saturating_sub(row as u16 * CARD_H)),
        );
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        render_card(idx, card, f, rect);
        cs.add_click_target(rect, CARD_BASE + idx as u16);
    }
}

fn render_card(idx: usize, card: &MemoryCard, f: &mut Frame, rect: Rect) {
    let (face, style) = if card.matched {
        (
            card.symbol.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::DIM),
        )
    } else if card.face_up {
        (
            card.symbol.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        // Face-down cards show their keyboard shortcut.
        (
            ((b'a' + idx as u8) as char).to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let border_color = if card.matched {
        Color::Green
    } else if card.face_up {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let widget = Paragraph::new(Line::from(Span::styled(face, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(widget, rect);
}
