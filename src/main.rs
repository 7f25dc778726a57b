mod games;
mod input;
mod leaderboard;
mod menu;
mod rng;
mod session;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use games::{create_game, AppState, Game, GameChoice};
use input::{pixel_x_to_col, pixel_y_to_row, Arrow, ClickState, InputEvent};
use time::TickClock;

/// Click action: leave the current game for the menu (help bar).
pub const BACK_TO_MENU: u16 = 1;

/// Top-level state: which screen is mounted, plus the tick clock that
/// drives the mounted game. The clock is armed only while the game's
/// session is running, so an idle or finished game receives no ticks.
struct App {
    state: AppState,
    clock: TickClock,
    /// Wall-clock of the most recent frame; doubles as the RNG seed
    /// source when mounting a game.
    last_now_ms: f64,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::Menu,
            clock: TickClock::new(100),
            last_now_ms: 0.0,
        }
    }

    fn mount(&mut self, choice: GameChoice) {
        let seed = (self.last_now_ms as u32) | 1;
        let game = create_game(&choice, seed);
        self.clock = TickClock::new(game.tick_interval_ms());
        self.state = AppState::Playing { game };
    }

    fn back_to_menu(&mut self) {
        self.clock.stop();
        self.state = AppState::Menu;
    }

    /// Per-frame update: advance the mounted game by however many whole
    /// ticks elapsed. Arming follows the game's session so that entity
    /// mutation provably stops at terminal and between runs.
    fn frame(&mut self, now_ms: f64) {
        self.last_now_ms = now_ms;
        if let AppState::Playing { game } = &mut self.state {
            if game.is_active() {
                if !self.clock.is_armed() {
                    self.clock.start();
                }
                let ticks = self.clock.advance(now_ms);
                if ticks > 0 {
                    game.tick(ticks);
                }
            } else if self.clock.is_armed() {
                self.clock.stop();
            }
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match &mut self.state {
            AppState::Menu => {
                let choice = match event {
                    InputEvent::Char(c) => menu::choice_for_key(c),
                    InputEvent::Click(id) => menu::choice_for_action(id),
                    _ => None,
                };
                if let Some(choice) = choice {
                    self.mount(choice);
                }
            }
            AppState::Playing { game } => {
                if event == InputEvent::Click(BACK_TO_MENU) {
                    self.back_to_menu();
                } else {
                    game.handle_input(&event);
                }
            }
        }
    }

    fn handle_escape(&mut self) {
        if matches!(self.state, AppState::Playing { .. }) {
            self.back_to_menu();
        }
    }
}

/// Normalize a DOM key event into the game-facing input type.
fn normalize_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        KeyCode::Up => Some(InputEvent::Arrow(Arrow::Up)),
        KeyCode::Down => Some(InputEvent::Arrow(Arrow::Down)),
        KeyCode::Left => Some(InputEvent::Arrow(Arrow::Left)),
        KeyCode::Right => Some(InputEvent::Arrow(Arrow::Right)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        _ => None,
    }
}

/// Query the grid container's bounding rect and convert a pixel click to
/// a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let matched = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = matched {
                app.borrow_mut().handle_event(InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let mut app = app.borrow_mut();
            match key_event.code {
                KeyCode::Esc => app.handle_escape(),
                code => {
                    if let Some(event) = normalize_key(code) {
                        app.handle_event(event);
                    }
                }
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            app.borrow_mut().frame(now_ms());

            let app = app.borrow();
            let size = f.area();

            // Update terminal dimensions and clear click targets; the
            // render pass below re-registers whatever is on screen.
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, &app, chunks[0]);

            match &app.state {
                AppState::Menu => menu::render(f, chunks[1], &click_state),
                AppState::Playing { game } => game.render(f, chunks[1], &click_state),
            }

            render_help(f, &app, chunks[2], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut ratzilla::ratatui::Frame, app: &App, area: Rect) {
    let title = match &app.state {
        AppState::Menu => "Playground".to_string(),
        AppState::Playing { game } => game.title().to_string(),
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_help(
    f: &mut ratzilla::ratatui::Frame,
    app: &App,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let help_text = match &app.state {
        AppState::Menu => "Press 1-6 or tap a row to play",
        AppState::Playing { .. } => "[Esc] Back to menu",
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);

    // The whole help bar doubles as the back button while playing.
    if matches!(app.state, AppState::Playing { .. }) {
        let mut cs = click_state.borrow_mut();
        for row in area.y..area.y + area.height {
            cs.add_row_target(area, row, BACK_TO_MENU);
        }
    }
}
