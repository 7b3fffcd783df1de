use std::io::{Error, ErrorKind, Read};

use log::trace;

use crate::frame::{RawFrame, Response};
use crate::HexSlice;

/// Reads response frames from a transport.
pub trait ReadFrame: Read {
    /// Reads one response frame into `buffer`.
    ///
    /// The frame is delimited structurally: the four prefix bytes announce the payload length,
    /// which is followed by the payload and a single CRC byte.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the read fails or times out.
    fn read_frame(&mut self, buffer: &mut RawFrame) -> std::io::Result<()> {
        buffer.clear();
        let mut prefix = [0; Response::PREFIX_SIZE];
        self.read_exact(&mut prefix)?;
        buffer
            .extend_from_slice(&prefix)
            .map_err(|()| Error::new(ErrorKind::OutOfMemory, "Frame buffer overflow."))?;

        let remaining = usize::from(prefix[Response::PREFIX_SIZE - 1]) + 1;
        let start = buffer.len();
        buffer
            .resize_default(start + remaining)
            .map_err(|()| Error::new(ErrorKind::OutOfMemory, "Frame buffer overflow."))?;
        self.read_exact(&mut buffer[start..])?;
        trace!("RX: {}", HexSlice::new(buffer));
        Ok(())
    }
}

impl<T> ReadFrame for T where T: Read {}
