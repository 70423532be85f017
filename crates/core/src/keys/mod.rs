//! Console key events.
//!
//! A [`KeyEvent`] mirrors one console key record. Events come either from
//! the real terminal ([`ConsoleKeyReader`]) or, when `POLYRUN_INJECT_KEY` is
//! set, from the injected description without touching the console.

pub mod console;
pub mod event;
pub mod inject;
pub mod tester;

pub use console::ConsoleKeyReader;
pub use event::{ALT_MASK, CTRL_MASK, KeyEvent, SHIFT_MASK, key_name, vk};
pub use inject::{INJECT_ENV_VAR, InjectedKeySource, injected_key, parse_injected_key};
pub use tester::{KeyTester, TesterStep};

use crate::error::Result;

/// Anything that can block until the next key event
pub trait KeySource {
    fn wait_for_key(&mut self) -> Result<KeyEvent>;
}

/// Wait for one key, preferring an injected key over the console
pub fn wait_for_key() -> Result<KeyEvent> {
    if let Some(event) = inject::injected_key_from_env() {
        return Ok(event);
    }
    ConsoleKeyReader::new()?.wait_for_key()
}
