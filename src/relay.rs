use std::io::{self, BufReader};
use std::thread;

use crossbeam_channel::unbounded;
use log::debug;

use crate::endpoint::Endpoint;
use crate::reader::Reader;
use crate::writer::Writer;

/// Completion signal each relay thread sends when its loop ends. Ok is a
/// clean end of stream or of input, Err carries the failure.
pub enum Exit {
    Reader(io::Result<()>),
    Writer(io::Result<()>),
}

/// Runs a chat session over the endpoint until either direction stops.
///
/// One thread drains the socket and renders incoming lines, one thread
/// reads the terminal and sends typed lines. The first to finish reports
/// on the exit channel, and the endpoint is closed right there so a
/// sibling parked on the socket wakes up to end-of-stream. A sibling
/// parked on terminal input has nothing to wake it; the process exit
/// that follows abandons it, because the chat is over when either
/// direction is.
pub fn run(endpoint: Endpoint, label: &'static str) -> io::Result<()> {
    let (read_half, write_half) = endpoint.split()?;
    let (exit_tx, exit_rx) = unbounded::<Exit>();

    debug!("relay running against {:?}", endpoint.peer_addr());

    let tx = exit_tx.clone();
    let mut reader = Reader::new(read_half, io::stdout(), label);
    let reader_thread = thread::spawn(move || {
        // The receiver is gone if the session got torn down first.
        let _ = tx.send(Exit::Reader(reader.handle()));
    });

    let tx = exit_tx;
    let mut writer = Writer::new(BufReader::new(io::stdin()), write_half);
    thread::spawn(move || {
        let _ = tx.send(Exit::Writer(writer.handle()));
    });

    let first = exit_rx
        .recv()
        .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "both relay threads vanished"))?;

    // Whichever side is still parked on the socket unblocks now.
    endpoint.close();

    match first {
        Exit::Reader(result) => {
            debug!("reader finished first: {:?}", result);

            if result.is_ok() {
                println!("\n[!] Disconnected.");
            }

            result
        }

        Exit::Writer(result) => {
            debug!("writer finished first: {:?}", result);

            // The reader wakes on the closed socket. Collect it so
            // nothing is still printing when this returns.
            let _ = reader_thread.join();

            result
        }
    }
}
