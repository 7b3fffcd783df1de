//! Host side of the NHM segmentation layer for RAC hardware modems
//!
//! This library talks to a radio modem over a serial link whose frames carry at most 255 payload
//! bytes. Larger messages are split into segments, each tagged by a four byte NHM header, and
//! reassembled on the way back.
//!
//! On top of the link it provides the modem's command API, a fixed-interval poller for radio
//! transaction results and a ping-pong protocol that exercises the radio between two devices.

pub use baud_rate::BaudRate;
pub use command::Command;
pub use error::{Error, ErrorKind, Result};
pub use link::{Link, NextSegments};
pub use modem::Modem;
pub use radio::Radio;
pub use read_frame::ReadFrame;
pub use retry::RetryPolicy;
pub use return_code::ReturnCode;
pub use serial_port::{open, SerialPortImpl, DEFAULT_TIMEOUT};
pub use utils::HexSlice;
pub use write_frame::WriteFrame;

pub mod error;
pub mod frame;
pub mod nhm;
pub mod ping_pong;
pub mod transaction;

mod baud_rate;
mod command;
mod link;
mod modem;
mod radio;
mod read_frame;
mod retry;
mod return_code;
mod serial_port;
mod utils;
mod write_frame;
