//! Outer framing of the modem's serial interface.
//!
//! Requests are sent as `[command][length][payload]`.
//! Responses arrive as `[bridge header (2)][return code][length][payload][crc]`.
//! When the payload carries an NHM segment, the segmentation header starts at offset 4.

pub use request::Request;
pub use response::Response;

mod request;
mod response;

/// Maximum payload of a single frame in either direction.
pub const MAX_PAYLOAD_SIZE: usize = u8::MAX as usize;

/// Maximum size of a request frame: command, length and payload.
pub const MAX_REQUEST_SIZE: usize = 2 + MAX_PAYLOAD_SIZE;

/// Maximum size of a response frame: prefix, payload and CRC byte.
pub const MAX_FRAME_SIZE: usize = Response::PREFIX_SIZE + MAX_PAYLOAD_SIZE + 1;

/// A stack-allocated buffer holding a raw response frame up to its maximum size.
pub type RawFrame = heapless::Vec<u8, MAX_FRAME_SIZE>;

/// A stack-allocated buffer holding a frame payload up to its maximum size.
pub type Payload = heapless::Vec<u8, MAX_PAYLOAD_SIZE>;
