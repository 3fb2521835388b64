use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::heading::Heading;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ControlInput {
    Heading(Heading),
    Start,
    Stop,
    Resume,
    Quit,
}

/// Reads crossterm events and maps them to [`ControlInput`].
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one event.
    ///
    /// Returns `Ok(None)` on timeout and for events that map to nothing.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<ControlInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps one key event to a control input. Only presses count.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<ControlInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(ControlInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => ControlInput::Heading(Heading::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => ControlInput::Heading(Heading::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => ControlInput::Heading(Heading::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => ControlInput::Heading(Heading::Right),
        KeyCode::Enter => ControlInput::Start,
        KeyCode::Char(' ') => ControlInput::Stop,
        KeyCode::Char('r' | 'R') => ControlInput::Resume,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => ControlInput::Quit,
        _ => return None,
    };

    Some(input)
}
