use std::io::{self, BufRead, Write};

use log::debug;

use crate::term;

/// The sending half of a session: prompts, takes one line at a time from
/// the input source and puts it on the wire with its terminator.
pub struct Writer<I, E> {
    input: I,
    endpoint: E,
}

impl<I: BufRead, E: Write> Writer<I, E> {
    pub fn new(input: I, endpoint: E) -> Writer<I, E> {
        Writer { input, endpoint }
    }

    /// Relays until the input source ends. Ok means end of input, Err
    /// means the prompt or the send failed.
    pub fn handle(&mut self) -> io::Result<()> {
        let mut typed = String::new();

        loop {
            let mut stdout = io::stdout();
            stdout.write_all(term::PROMPT.as_bytes())?;
            stdout.flush()?;

            typed.clear();
            self.input.read_line(&mut typed)?;

            // Without its closing newline the input ended mid line, and
            // a tail the user never finished is not a message.
            if !typed.ends_with('\n') {
                if !typed.is_empty() {
                    debug!("input ended with {} typed bytes unsent", typed.len());
                }

                return Ok(());
            }

            // Exactly one terminator goes on the wire, whatever the
            // input layer left on the end.
            typed.pop();
            if typed.ends_with('\r') {
                typed.pop();
            }
            typed.push('\n');

            // The whole line in one send, or the session is over.
            self.endpoint.write_all(typed.as_bytes())?;
            self.endpoint.flush()?;
        }
    }
}
