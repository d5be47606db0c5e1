//! Terminal input handling.
//!
//! Maps crossterm key and mouse events to simulation inputs. Nothing here
//! touches the world directly; the caller queues whatever comes back.

use crate::ui::game_common::rect_contains;
use crate::ui::{Control, UiState};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use skyflap::flappy::RunPhase;
use skyflap::SimInput;

/// Result of handling one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Queue this input for the next tick.
    Sim(SimInput),
    Quit,
    None,
}

/// Space/Up start a run or flap; Enter/r resume; q, Esc and Ctrl-C quit.
pub fn map_key(key: KeyEvent, phase: RunPhase) -> HostAction {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return HostAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HostAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up => match phase {
            RunPhase::Idle => HostAction::Sim(SimInput::Start),
            RunPhase::Running => HostAction::Sim(SimInput::Flap),
            RunPhase::GameOver => HostAction::None,
        },
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => match phase {
            RunPhase::GameOver => HostAction::Sim(SimInput::Resume),
            _ => HostAction::None,
        },
        _ => HostAction::None,
    }
}

/// Pointer handling: movement updates the hover highlight, a left click
/// presses whatever control the last frame drew under it.
pub fn map_mouse(mouse: MouseEvent, phase: RunPhase, ui: &mut UiState) -> HostAction {
    let (col, row) = (mouse.column, mouse.row);
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| rect_contains(r, col, row));

    match mouse.kind {
        MouseEventKind::Moved => {
            ui.hovered = if hit(ui.hitboxes.start) {
                Some(Control::Start)
            } else if hit(ui.hitboxes.resume) {
                Some(Control::Resume)
            } else {
                None
            };
            HostAction::None
        }
        MouseEventKind::Down(MouseButton::Left) => match phase {
            RunPhase::Idle if hit(ui.hitboxes.start) => HostAction::Sim(SimInput::Start),
            RunPhase::Running if hit(ui.hitboxes.play_area) => HostAction::Sim(SimInput::Flap),
            RunPhase::GameOver if hit(ui.hitboxes.resume) => HostAction::Sim(SimInput::Resume),
            _ => HostAction::None,
        },
        _ => HostAction::None,
    }
}
