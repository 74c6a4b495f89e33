//! Use a fmt::Write as an io::Write.
//!
//! The printer is generic over io::Write so terminals can be written directly,
//! but fmt::Display hands us a fmt::Write.

use std::str::from_utf8;
use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        // The printer only emits whole str slices, so bytes are valid UTF-8.
        let utf = match from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidData, err)),
        };

        match self.fmt_writer.write_str(utf) {
            Ok(()) => Ok(utf.len()),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
