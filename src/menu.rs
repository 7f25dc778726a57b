//! Game selection menu.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::games::GameChoice;
use crate::input::ClickState;
use crate::widgets::ClickableList;

/// Click actions: `MENU_GAME_BASE + index` selects the game at `index`
/// in [`GameChoice::all`].
pub const MENU_GAME_BASE: u16 = 20;

/// The game selected by a menu click action, if any.
pub fn choice_for_action(action_id: u16) -> Option<GameChoice> {
    let idx = action_id.checked_sub(MENU_GAME_BASE)? as usize;
    GameChoice::all().get(idx).copied()
}

/// The game selected by a number key, if any.
pub fn choice_for_key(key: char) -> Option<GameChoice> {
    let idx = key.to_digit(10)?.checked_sub(1)? as usize;
    GameChoice::all().get(idx).copied()
}

pub fn render(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push(Line::default());
    cl.push(Line::from(Span::styled(
        "  Pick a game:",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::default());

    for (i, choice) in GameChoice::all().iter().enumerate() {
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    format!("  [{}] ", i + 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<18}", choice.title()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(choice.tagline(), Style::default().fg(Color::DarkGray)),
            ]),
            MENU_GAME_BASE + i as u16,
        );
        cl.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Playground ");

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0, 0);
    let widget = Paragraph::new(cl.into_lines()).block(block);
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_map_to_choices_in_order() {
        assert_eq!(choice_for_action(MENU_GAME_BASE), Some(GameChoice::Snake));
        assert_eq!(
            choice_for_action(MENU_GAME_BASE + 5),
            Some(GameChoice::Detection)
        );
        assert_eq!(choice_for_action(MENU_GAME_BASE + 6), None);
        assert_eq!(choice_for_action(0), None);
    }

    #[test]
    fn number_keys_map_to_choices() {
        assert_eq!(choice_for_key('1'), Some(GameChoice::Snake));
        assert_eq!(choice_for_key('6'), Some(GameChoice::Detection));
        assert_eq!(choice_for_key('7'), None);
        assert_eq!(choice_for_key('0'), None);
        assert_eq!(choice_for_key('x'), None);
    }
}
