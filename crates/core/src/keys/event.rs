use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Modifier masks tested against `control_key_state`.
///
/// These are the historical masks of the key bridge, not single console
/// flags: 0x0012 also catches LEFT_ALT_PRESSED, 0x000C both Ctrl keys and
/// 0x0021 RIGHT_ALT_PRESSED plus ENHANCED_KEY.
pub const SHIFT_MASK: u32 = 0x0012;
pub const CTRL_MASK: u32 = 0x000C;
pub const ALT_MASK: u32 = 0x0021;

/// Virtual key codes with a dedicated display name
pub mod vk {
    pub const BACK: u16 = 0x08;
    pub const TAB: u16 = 0x09;
    pub const RETURN: u16 = 0x0D;
    pub const SHIFT: u16 = 0x10;
    pub const CONTROL: u16 = 0x11;
    pub const MENU: u16 = 0x12;
    pub const ESCAPE: u16 = 0x1B;
    pub const SPACE: u16 = 0x20;
    pub const LEFT: u16 = 0x25;
    pub const UP: u16 = 0x26;
    pub const RIGHT: u16 = 0x27;
    pub const DOWN: u16 = 0x28;
    pub const DELETE: u16 = 0x2E;
    pub const KEY_0: u16 = 0x30;
    pub const KEY_A: u16 = 0x41;
    pub const KEY_Q: u16 = 0x51;
    pub const F1: u16 = 0x70;
}

/// One decoded console key record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyEvent {
    pub virtual_key_code: u16,
    pub character: char,
    pub key_down: bool,
    pub control_key_state: u32,
    pub repeat_count: u16,
}

impl Default for KeyEvent {
    fn default() -> Self {
        Self {
            virtual_key_code: 0,
            character: '\0',
            key_down: true,
            control_key_state: 0,
            repeat_count: 1,
        }
    }
}

impl KeyEvent {
    pub fn new(virtual_key_code: u16, control_key_state: u32) -> Self {
        Self {
            virtual_key_code,
            control_key_state,
            ..Default::default()
        }
    }

    pub fn is_shift(&self) -> bool {
        self.control_key_state & SHIFT_MASK != 0
    }

    pub fn is_ctrl(&self) -> bool {
        self.control_key_state & CTRL_MASK != 0
    }

    pub fn is_alt(&self) -> bool {
        self.control_key_state & ALT_MASK != 0
    }

    /// Five-line report: `VK`, `Char`, `IsDown`, `State`, `Display`
    pub fn report(&self) -> String {
        format!(
            "VK:{}\nChar:{}\nIsDown:{}\nState:{}\nDisplay:{}",
            self.virtual_key_code,
            self.character as u32,
            if self.key_down { "True" } else { "False" },
            self.control_key_state,
            self
        )
    }
}

/// Fixed display name for a virtual key code, `Key(<code>)` otherwise
pub fn key_name(code: u16) -> Cow<'static, str> {
    match code {
        vk::UP => "Up".into(),
        vk::DOWN => "Down".into(),
        vk::LEFT => "Left".into(),
        vk::RIGHT => "Right".into(),
        vk::RETURN => "Enter".into(),
        vk::BACK => "Backspace".into(),
        vk::ESCAPE => "Escape".into(),
        vk::SHIFT => "Shift".into(),
        vk::CONTROL => "Ctrl".into(),
        vk::MENU => "Alt".into(),
        other => format!("Key({other})").into(),
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_shift() {
            f.write_str("Shift+")?;
        }
        if self.is_ctrl() {
            f.write_str("Ctrl+")?;
        }
        if self.is_alt() {
            f.write_str("Alt+")?;
        }
        f.write_str(&key_name(self.virtual_key_code))
    }
}
