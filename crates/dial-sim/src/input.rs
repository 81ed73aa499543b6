//! Line-based encoder input.
//!
//! Each line of input is one encoder event. An empty line is a click, `q` or
//! end of input closes the source. Unknown tokens are logged and ignored.

use std::io::BufRead;

use dial_types::input::{InputEvent, InputSource};

pub struct LineInput<R: BufRead> {
    reader: R,
    closed: bool,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            closed: false,
        }
    }

    /// True once the reader hit end of input or a quit command.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn poll(&mut self) -> InputEvent {
        if self.closed {
            return InputEvent::None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                return InputEvent::None;
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("Input read failed: {e}");
                self.closed = true;
                return InputEvent::None;
            }
        }
        let token = line.trim();
        match token {
            "" => InputEvent::Confirm,
            "q" | "quit" => {
                self.closed = true;
                InputEvent::None
            }
            _ => token.parse().unwrap_or_else(|e| {
                log::warn!("{e}");
                InputEvent::None
            }),
        }
    }
}
