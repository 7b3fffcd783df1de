//! Reassembly of segmented responses.

use log::{debug, trace};

use crate::error::{Limit, Malformed, Mismatch, Result};
use crate::nhm::{
    CommandId, Header, MessageType, HEADER_SIZE, MAX_REASSEMBLED_SIZE, MAX_SEGMENTS,
};
use crate::utils::HexSlice;

/// A stack-allocated buffer holding a reassembled message up to its maximum size.
pub type Message = heapless::Vec<u8, MAX_REASSEMBLED_SIZE>;

/// Accumulates the response frames of one segmented exchange.
///
/// Frames are appended purely in the order they are pushed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reassembler {
    command_id: CommandId,
    buffer: Message,
    segments: usize,
}

impl Reassembler {
    /// Offset of the segmentation header within a response frame.
    pub const HEADER_OFFSET: usize = 4;

    /// Minimum size of a response frame carrying a segment: outer framing plus header.
    pub const MIN_FRAME_SIZE: usize = Self::HEADER_OFFSET + HEADER_SIZE;

    /// Creates a reassembler expecting responses to `command_id`.
    #[must_use]
    pub const fn new(command_id: CommandId) -> Self {
        Self {
            command_id,
            buffer: Message::new(),
            segments: 0,
        }
    }

    /// Returns the command ID that responses must carry.
    #[must_use]
    pub const fn command_id(&self) -> CommandId {
        self.command_id
    }

    /// Returns the amount of non-final segments consumed so far.
    #[must_use]
    pub const fn segments(&self) -> usize {
        self.segments
    }

    /// Returns the bytes accumulated so far.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes one response frame.
    ///
    /// Returns the complete message once a frame flagged as the last one arrives and
    /// resets the reassembler for the next message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`](crate::Error::Format) if the frame is undersized,
    /// [`Error::ProtocolMismatch`](crate::Error::ProtocolMismatch) on an unexpected command ID
    /// or message type and [`Error::LimitExceeded`](crate::Error::LimitExceeded) if the segment
    /// count or message size bound is violated.
    pub fn push(&mut self, frame: &[u8]) -> Result<Option<Message>> {
        trace!("Segment frame: {:X}", HexSlice::new(frame));

        if frame.len() < Self::MIN_FRAME_SIZE {
            return Err(Malformed::TooShort {
                expected: Self::MIN_FRAME_SIZE,
                found: frame.len(),
            }
            .into());
        }

        let header = Header::decode(&frame[Self::HEADER_OFFSET..])?;

        if header.command_id() != self.command_id {
            return Err(Mismatch::CommandId {
                expected: self.command_id,
                found: header.command_id(),
            }
            .into());
        }

        if header.message_type() != MessageType::Response {
            return Err(Mismatch::MessageType {
                expected: MessageType::Response,
                found: header.message_type(),
            }
            .into());
        }

        let end = Self::MIN_FRAME_SIZE + usize::from(header.length());
        let payload = frame
            .get(Self::MIN_FRAME_SIZE..end)
            .ok_or(Malformed::TooShort {
                expected: end,
                found: frame.len(),
            })?;

        self.buffer.extend_from_slice(payload).map_err(|()| Limit::Size {
            max: MAX_REASSEMBLED_SIZE,
            size: self.buffer.len() + payload.len(),
        })?;

        debug!(
            "Received {header} ({} bytes buffered)",
            self.buffer.len()
        );

        if header.boundary().is_last() {
            self.segments = 0;
            return Ok(Some(std::mem::take(&mut self.buffer)));
        }

        self.segments += 1;

        if self.segments > MAX_SEGMENTS {
            return Err(Limit::Segments(MAX_SEGMENTS).into());
        }

        Ok(None)
    }

    /// Reassembles a message from a source of response frames.
    ///
    /// The source is pulled lazily, one frame per required segment.
    ///
    /// # Errors
    ///
    /// Returns the first error of the source or of [`Self::push`], and
    /// [`Error::Format`](crate::Error::Format) if the source ends before the last segment.
    pub fn reassemble<I, F>(mut self, frames: I) -> Result<Message>
    where
        I: IntoIterator<Item = Result<F>>,
        F: AsRef<[u8]>,
    {
        for frame in frames {
            if let Some(message) = self.push(frame?.as_ref())? {
                return Ok(message);
            }
        }

        Err(Malformed::Incomplete {
            segments: self.segments,
        }
        .into())
    }
}
