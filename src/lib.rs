//! Two-way line relay over a single TCP connection.
//!
//! One thread drains the socket and prints whatever arrives, another
//! reads typed lines and sends them. `relay::run` wires both up over a
//! shared endpoint and ends the session as soon as either side stops.

pub mod endpoint;
pub mod line;
pub mod reader;
pub mod relay;
pub mod term;
pub mod writer;
