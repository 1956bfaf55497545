use std::io::{self, Read, Write};

use log::debug;

use crate::{line, term};

/// The receiving half of a session: drains the endpoint line by line and
/// renders each one on the display behind the peer's label.
pub struct Reader<R, D> {
    source: R,
    display: D,
    label: &'static str,
}

impl<R: Read, D: Write> Reader<R, D> {
    pub fn new(source: R, display: D, label: &'static str) -> Reader<R, D> {
        Reader {
            source,
            display,
            label,
        }
    }

    /// Relays until the source ends. Ok means the peer closed the
    /// connection, Err means the transport or the display failed. Either
    /// way this Reader is done, there is no retry.
    pub fn handle(&mut self) -> io::Result<()> {
        loop {
            let received = match line::next_line(&mut self.source)? {
                Some(received) => received,
                None => {
                    debug!("read side reached end of stream");
                    return Ok(());
                }
            };

            // Malformed UTF-8 turns into replacement characters instead
            // of ending the session.
            let text = String::from_utf8_lossy(&received);

            self.display
                .write_all(term::incoming(self.label, &text).as_bytes())?;
            self.display.flush()?;
        }
    }
}
