//! NHM segmentation layer.
//!
//! Application messages larger than a single link frame travel as ordered segments, each
//! prefixed with a four byte header:
//!
//! ```text
//! byte 0: message type [7:5] | boundary flag [4] | command ID high nibble [3:0]
//! byte 1: command ID low byte
//! byte 2: reserved (0)
//! byte 3: payload length
//! ```
//!
//! The wire carries no sequence numbers. Segments are matched purely by arrival order, so a
//! transport that reorders or duplicates frames corrupts the reassembled message undetected.

pub use command_id::CommandId;
pub use header::{Boundary, Header, MessageType};
pub use reassembler::{Message, Reassembler};
pub use segments::{Segment, Segments};

mod command_id;
mod header;
mod reassembler;
mod segments;

/// Size of the segmentation header in bytes.
pub const HEADER_SIZE: usize = 4;

/// Maximum payload of a single segment: a 255 byte link frame minus the header.
pub const MAX_SEGMENT_PAYLOAD: usize = 251;

/// Maximum size of a reassembled message.
pub const MAX_REASSEMBLED_SIZE: usize = 700;

/// Maximum number of non-final segments consumed for one message.
pub const MAX_SEGMENTS: usize = 10;
