//! Input events from the rotary encoder.
//!
//! The encoder driver debounces and quantizes upstream; the engine only ever
//! sees one of these four events per poll.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialError;

/// One quantized encoder event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Nothing happened since the last poll.
    None,
    /// Knob turned one detent counter-clockwise.
    Decrement,
    /// Knob turned one detent clockwise.
    Increment,
    /// Knob pressed.
    Confirm,
}

impl InputEvent {
    /// The step direction for rotation events.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::Decrement => Some(Direction::Decrease),
            InputEvent::Increment => Some(Direction::Increase),
            InputEvent::None | InputEvent::Confirm => None,
        }
    }
}

impl FromStr for InputEvent {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "-" | "ccw" | "up" | "u" | "k" => Ok(InputEvent::Decrement),
            "+" | "cw" | "down" | "d" | "j" => Ok(InputEvent::Increment),
            "enter" | "ok" | "e" | "click" => Ok(InputEvent::Confirm),
            "none" | "." => Ok(InputEvent::None),
            other => Err(DialError::Input(format!("unknown token `{other}`"))),
        }
    }
}

/// Which way a value moves when stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Decrease,
    Increase,
}

/// Source of encoder events, polled once per loop iteration.
pub trait InputSource {
    /// Return the next event, or `InputEvent::None` if there is none.
    fn poll(&mut self) -> InputEvent;
}
