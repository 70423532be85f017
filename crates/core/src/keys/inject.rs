//! Scripted key injection through an environment variable.
//!
//! Format: `vk=13;char=0;down=1;state=18;repeat=1`. Segments are separated
//! by `;`, keys are case-insensitive, anything malformed is skipped and the
//! field keeps its default.

use super::KeySource;
use super::event::KeyEvent;
use crate::error::Result;

pub const INJECT_ENV_VAR: &str = "POLYRUN_INJECT_KEY";

pub fn parse_injected_key(spec: &str) -> KeyEvent {
    let mut event = KeyEvent::default();

    for part in spec.split(';') {
        let mut kv = part.split('=');
        let (Some(key), Some(value), None) = (kv.next(), kv.next(), kv.next()) else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "vk" => {
                if let Ok(vk) = value.parse() {
                    event.virtual_key_code = vk;
                }
            }
            "char" => {
                if let Some(ch) = value
                    .parse::<u16>()
                    .ok()
                    .and_then(|code| char::from_u32(code.into()))
                {
                    event.character = ch;
                }
            }
            "down" => event.key_down = value == "1" || value.eq_ignore_ascii_case("true"),
            "state" => {
                if let Ok(state) = value.parse() {
                    event.control_key_state = state;
                }
            }
            "repeat" => {
                if let Ok(repeat) = value.parse() {
                    event.repeat_count = repeat;
                }
            }
            other => tracing::trace!("Ignoring injection field {:?}", other),
        }
    }

    event
}

/// Injected key from an environment value; blank or missing means none
pub fn injected_key(value: Option<&str>) -> Option<KeyEvent> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    let event = parse_injected_key(value);
    tracing::debug!("Using injected key {:?}", event);
    Some(event)
}

pub fn injected_key_from_env() -> Option<KeyEvent> {
    let value = std::env::var(INJECT_ENV_VAR).ok();
    injected_key(value.as_deref())
}

/// Hands out the same injected event on every call
#[derive(Debug, Clone)]
pub struct InjectedKeySource {
    event: KeyEvent,
}

impl InjectedKeySource {
    pub fn new(event: KeyEvent) -> Self {
        Self { event }
    }
}

impl KeySource for InjectedKeySource {
    fn wait_for_key(&mut self) -> Result<KeyEvent> {
        Ok(self.event)
    }
}
