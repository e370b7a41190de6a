//! Output sinks.

use std::io;

/// Destination for rendered bytes.
///
/// Returns how many bytes were accepted. The render engine treats anything
/// other than `bytes.len()` as a fatal short write.
pub trait Sink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize>;
}

/// Every `io::Write` is a sink; `write_all` either takes everything or fails.
impl<W: io::Write + ?Sized> Sink for W {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.write_all(bytes)?;
        Ok(bytes.len())
    }
}
