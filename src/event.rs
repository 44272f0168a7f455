use std::collections::VecDeque;

use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Blocking source of key presses.
///
/// The editor is strictly synchronous: the only suspension point is the next
/// key, so the source is a plain blocking pull rather than a channel. The
/// run loop commits a frame, then asks for the next key.
pub trait KeySource {
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Reads from the real terminal. Non-key events and key releases are
/// swallowed here so callers only ever see presses.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

/// Deterministic key feed for tests.
#[allow(dead_code)] // Used by integration tests
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    #[allow(dead_code)] // Used by integration tests
    pub fn new<I: IntoIterator<Item = KeyEvent>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("scripted keys exhausted"),
        }
    }
}
