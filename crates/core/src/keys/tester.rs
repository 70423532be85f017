use std::io::Write;

use super::KeySource;
use super::event::{KeyEvent, vk};
use crate::error::Result;

pub const BANNER: &str = "Testing keyboard input (press keys, Shift+Enter for desc, Q to quit):";
pub const GOODBYE: &str = "Goodbye!";
pub const SHIFT_ENTER_MARKER: &str = ">>> SHIFT+ENTER DETECTED - SHOWING DESCRIPTION <<<";
pub const ENTER_MARKER: &str = ">>> ENTER DETECTED - SELECTING ITEM <<<";

/// Second quit code accepted alongside `Q`
const QUIT_ALT_CODE: u16 = 0x71;

/// Interactive key echo loop
#[derive(Debug, Clone, Copy)]
pub struct KeyTester {
    /// Quit on the key-down of Q instead of its release, for terminals that
    /// never report releases
    quit_on_press: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TesterStep {
    Quit,
    Print(Vec<String>),
}

impl KeyTester {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            quit_on_press: !reports_releases,
        }
    }

    fn is_quit(&self, event: &KeyEvent) -> bool {
        let quit_key = matches!(event.virtual_key_code, vk::KEY_Q | QUIT_ALT_CODE);
        quit_key && (event.key_down == self.quit_on_press)
    }

    pub fn step(&self, event: &KeyEvent) -> TesterStep {
        if self.is_quit(event) {
            return TesterStep::Quit;
        }

        let mut lines = vec![format!(
            "[{}] {} (VK:{}, Repeat:{})",
            if event.key_down { "PRESSED" } else { "RELEASED" },
            event,
            event.virtual_key_code,
            event.repeat_count
        )];

        if event.virtual_key_code == vk::RETURN && event.key_down {
            lines.push(if event.is_shift() {
                SHIFT_ENTER_MARKER.to_string()
            } else {
                ENTER_MARKER.to_string()
            });
        }

        TesterStep::Print(lines)
    }

    /// Echo events from `source` to `out` until the quit key.
    ///
    /// Lines end in `\r\n` because the console reader runs in raw mode.
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<()>
    where
        S: KeySource + ?Sized,
        W: Write,
    {
        write!(out, "{BANNER}\r\n\r\n")?;
        out.flush()?;

        loop {
            let event = source.wait_for_key()?;
            match self.step(&event) {
                TesterStep::Quit => break,
                TesterStep::Print(lines) => {
                    for line in lines {
                        write!(out, "{line}\r\n")?;
                    }
                    out.flush()?;
                }
            }
        }

        write!(out, "{GOODBYE}\r\n")?;
        out.flush()?;
        Ok(())
    }
}
