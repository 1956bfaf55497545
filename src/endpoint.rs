use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

/// The one connected byte stream a chat session runs over.
///
/// `split` hands out one capability per direction, so the reading thread
/// and the writing thread each own exactly the half they use. `close`
/// shuts the underlying socket down for every half at once, which is how
/// the session coordinator unparks whichever thread is still blocked on
/// it.
pub struct Endpoint {
    stream: TcpStream,
}

/// Read capability on the endpoint. Held by the Reader thread.
pub struct ReadHalf {
    stream: TcpStream,
}

/// Write capability on the endpoint. Held by the Writer thread.
pub struct WriteHalf {
    stream: TcpStream,
}

impl Endpoint {
    pub fn new(stream: TcpStream) -> Endpoint {
        Endpoint { stream }
    }

    /// The address of the other side.
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.stream.peer_addr()
    }

    /// Duplicates the socket handle into a read half and a write half.
    /// Both point at the same connection, so closing it reaches both.
    pub fn split(&self) -> io::Result<(ReadHalf, WriteHalf)> {
        let read = self.stream.try_clone()?;
        let write = self.stream.try_clone()?;

        Ok((ReadHalf { stream: read }, WriteHalf { stream: write }))
    }

    /// Shuts the connection down in both directions: pending and future
    /// reads on any half return end-of-stream, writes fail. A socket the
    /// peer already tore down reports NotConnected here, which changes
    /// nothing.
    pub fn close(&self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}

impl Read for ReadHalf {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for WriteHalf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
