use crossterm::event::{
    self, Event, KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode,
};
use crossterm::terminal;

use super::KeySource;
use super::event::{KeyEvent, vk};
use crate::error::{Error, Result};

/// Console control-key-state bits the terminal modifiers are mapped onto
pub mod state {
    pub const RIGHT_ALT_PRESSED: u32 = 0x0001;
    pub const LEFT_CTRL_PRESSED: u32 = 0x0008;
    pub const SHIFT_PRESSED: u32 = 0x0010;
}

/// Blocking key reader on the real terminal.
///
/// Raw mode is enabled while the reader is alive and restored on drop.
pub struct ConsoleKeyReader {
    _raw: RawModeGuard,
}

impl ConsoleKeyReader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            _raw: RawModeGuard::enable()?,
        })
    }
}

impl KeySource for ConsoleKeyReader {
    /// Block until the next key record; mouse, resize and focus events are
    /// skipped.
    fn wait_for_key(&mut self) -> Result<KeyEvent> {
        loop {
            let event = event::read().map_err(|e| Error::ConsoleError(e.to_string()))?;
            if let Event::Key(key) = event {
                let decoded = translate(&key);
                tracing::trace!("Read {:?} as {:?}", key, decoded);
                return Ok(decoded);
            }
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| Error::ConsoleError(e.to_string()))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Map a terminal key event onto a console key record
pub fn translate(key: &TermKeyEvent) -> KeyEvent {
    KeyEvent {
        virtual_key_code: virtual_key_code(key.code),
        character: character(key.code),
        key_down: key.kind != KeyEventKind::Release,
        control_key_state: control_key_state(key.modifiers),
        repeat_count: 1,
    }
}

fn control_key_state(modifiers: KeyModifiers) -> u32 {
    let mut bits = 0;
    if modifiers.contains(KeyModifiers::SHIFT) {
        bits |= state::SHIFT_PRESSED;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        bits |= state::LEFT_CTRL_PRESSED;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        bits |= state::RIGHT_ALT_PRESSED;
    }
    bits
}

fn virtual_key_code(code: KeyCode) -> u16 {
    match code {
        KeyCode::Backspace => vk::BACK,
        KeyCode::Tab | KeyCode::BackTab => vk::TAB,
        KeyCode::Enter => vk::RETURN,
        KeyCode::Esc => vk::ESCAPE,
        KeyCode::Left => vk::LEFT,
        KeyCode::Up => vk::UP,
        KeyCode::Right => vk::RIGHT,
        KeyCode::Down => vk::DOWN,
        KeyCode::Delete => vk::DELETE,
        KeyCode::F(n @ 1..=24) => vk::F1 + u16::from(n) - 1,
        KeyCode::Char(' ') => vk::SPACE,
        KeyCode::Char(c) if c.is_ascii_digit() => vk::KEY_0 + (c as u16 - '0' as u16),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            vk::KEY_A + (c.to_ascii_uppercase() as u16 - 'A' as u16)
        }
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => vk::SHIFT,
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => vk::CONTROL,
            ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => vk::MENU,
            _ => 0,
        },
        _ => 0,
    }
}

fn character(code: KeyCode) -> char {
    match code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\r',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\u{8}',
        KeyCode::Esc => '\u{1b}',
        _ => '\0',
    }
}
