use std::io::Write;

use log::{debug, trace};

use crate::frame::{Request, MAX_REQUEST_SIZE};
use crate::HexSlice;

/// Writes request frames to a transport.
pub trait WriteFrame: Write {
    /// Writes a [`Request`] frame and flushes the transport.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the write operation failed.
    fn write_frame(&mut self, request: &Request) -> std::io::Result<()> {
        debug!("Writing frame: {request}");
        let mut buffer = heapless::Vec::<u8, MAX_REQUEST_SIZE>::new();
        buffer.extend(request);
        trace!("TX: {}", HexSlice::new(&buffer));
        self.write_all(&buffer)?;
        self.flush()
    }
}

impl<T> WriteFrame for T where T: Write {}
