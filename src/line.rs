use std::io::{self, ErrorKind::Interrupted, Read};

use log::debug;

/// Reads the next newline-delimited line from the source, one byte per
/// read, so nothing past the terminator is ever consumed.
///
/// Returns the line without its terminator, or None once the source
/// ends. Bytes accumulated without a closing terminator are dropped: a
/// partial fragment is not a line.
pub fn next_line(source: &mut impl Read) -> io::Result<Option<Vec<u8>>> {
    let mut buffer = Vec::new();
    let mut byte = [0; 1];

    loop {
        match source.read(&mut byte) {
            // A zero length read means the other side closed the
            // connection or is done writing, so the line in progress
            // will never finish.
            Ok(0) => {
                if !buffer.is_empty() {
                    debug!("stream ended with {} unterminated bytes", buffer.len());
                }

                return Ok(None);
            }

            Ok(_) => {
                if byte[0] == b'\n' {
                    return Ok(Some(buffer));
                }

                buffer.push(byte[0]);
            }

            // Got interrupted, we'll try again.
            Err(ref err) if err.kind() == Interrupted => continue,

            // Other errors we'll consider fatal.
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_comes_back_without_its_terminator() {
        let mut source = Cursor::new(b"hello\n".to_vec());

        assert_eq!(next_line(&mut source).unwrap(), Some(b"hello".to_vec()));
        assert_eq!(next_line(&mut source).unwrap(), None);
    }

    #[test]
    fn lines_keep_their_wire_order() {
        let mut source = Cursor::new(b"one\ntwo\nthree\n".to_vec());

        assert_eq!(next_line(&mut source).unwrap(), Some(b"one".to_vec()));
        assert_eq!(next_line(&mut source).unwrap(), Some(b"two".to_vec()));
        assert_eq!(next_line(&mut source).unwrap(), Some(b"three".to_vec()));
        assert_eq!(next_line(&mut source).unwrap(), None);
    }

    #[test]
    fn empty_line_is_still_a_line() {
        let mut source = Cursor::new(b"\n".to_vec());

        assert_eq!(next_line(&mut source).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn partial_fragment_at_end_of_stream_is_dropped() {
        let mut source = Cursor::new(b"done\nleftover".to_vec());

        assert_eq!(next_line(&mut source).unwrap(), Some(b"done".to_vec()));
        assert_eq!(next_line(&mut source).unwrap(), None);
    }

    #[test]
    fn bytes_between_terminators_are_untouched() {
        let mut source = Cursor::new("¡héllo wörld!\n".as_bytes().to_vec());

        assert_eq!(
            next_line(&mut source).unwrap(),
            Some("¡héllo wörld!".as_bytes().to_vec())
        );
    }

    #[test]
    fn back_to_back_lines_neither_merge_nor_drop() {
        let count = 100;
        let mut wire = Vec::new();
        for n in 0..count {
            wire.extend_from_slice(format!("line {}\n", n).as_bytes());
        }

        let mut source = Cursor::new(wire);
        for n in 0..count {
            let expected = format!("line {}", n).into_bytes();
            assert_eq!(next_line(&mut source).unwrap(), Some(expected));
        }

        assert_eq!(next_line(&mut source).unwrap(), None);
    }

    /// Fails once with Interrupted, then reads normally.
    struct Flaky {
        tripped: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.tripped {
                self.tripped = true;
                return Err(io::Error::new(Interrupted, "try again"));
            }

            self.inner.read(buf)
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut source = Flaky {
            tripped: false,
            inner: Cursor::new(b"survived\n".to_vec()),
        };

        assert_eq!(next_line(&mut source).unwrap(), Some(b"survived".to_vec()));
    }
}
