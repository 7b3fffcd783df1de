//! Exclusive request/response access to the modem's serial link.

use std::io::{Read, Write};
use std::thread::sleep;
use std::time::Duration;

use log::debug;

use crate::error::Result;
use crate::frame::{RawFrame, Request, Response};
use crate::nhm::{Boundary, CommandId, Header, Message, MessageType, Reassembler, Segments};
use crate::Command;
use crate::read_frame::ReadFrame;
use crate::write_frame::WriteFrame;

pub use next_segments::NextSegments;

mod next_segments;

/// Owns the transport to the modem.
///
/// The link supports exactly one outstanding request at a time.
#[derive(Debug)]
pub struct Link<T> {
    transport: T,
    segment_pause: Duration,
}

impl<T> Link<T> {
    /// Pause between the sends of consecutive segments.
    pub const DEFAULT_SEGMENT_PAUSE: Duration = Duration::from_millis(10);

    /// Creates a new link over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            segment_pause: Self::DEFAULT_SEGMENT_PAUSE,
        }
    }

    /// Sets the pause between the sends of consecutive segments.
    #[must_use]
    pub fn with_segment_pause(mut self, segment_pause: Duration) -> Self {
        self.segment_pause = segment_pause;
        self
    }

    /// Returns the pause between the sends of consecutive segments.
    #[must_use]
    pub const fn segment_pause(&self) -> Duration {
        self.segment_pause
    }

    /// Returns a reference to the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Releases the transport.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl<T> Link<T>
where
    T: Read + Write,
{
    /// Sends a request and reads its response.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the transport fails or the response is malformed.
    pub fn communicate(&mut self, request: &Request) -> Result<Response> {
        self.transport.write_frame(request)?;
        self.read_response()
    }

    /// Reads a single response frame.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the transport fails or the response is malformed.
    pub fn read_response(&mut self) -> Result<Response> {
        let frame = self.read_frame()?;
        let response = Response::try_from(frame.as_slice())?;
        debug!("Received {response}");
        Ok(response)
    }

    /// Sends `payload` as NHM command `command_id`, split into as many segments as needed.
    ///
    /// Segments are sent strictly in order, separated by the segment pause.
    /// If a send fails, the remaining segments are not sent.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`](crate::Error) of the first failing send.
    pub fn write_segmented(&mut self, command_id: CommandId, payload: &[u8]) -> Result<()> {
        let segments = Segments::command(payload, command_id);
        let count = segments.len();

        for (index, segment) in segments.enumerate() {
            if index > 0 {
                sleep(self.segment_pause);
            }

            debug!("Sending segment {}/{count}: {segment}", index + 1);
            self.transport.write_frame(&Request::nhm(&segment))?;
        }

        Ok(())
    }

    /// Like [`Self::write_segmented`], but reads the response following the last segment.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`](crate::Error) of the first failing send or of the response.
    pub fn send_segmented(&mut self, command_id: CommandId, payload: &[u8]) -> Result<Response> {
        self.write_segmented(command_id, payload)?;
        self.read_response()
    }

    /// Sends `payload` as NHM command `command_id` and reassembles the possibly segmented
    /// response by pulling further segments from the modem.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if any exchange fails or the response segments
    /// violate the reassembly rules.
    pub fn request_segmented(&mut self, command_id: CommandId, payload: &[u8]) -> Result<Message> {
        self.write_segmented(command_id, payload)?;
        let first = self.read_frame()?;
        Reassembler::new(command_id).reassemble(NextSegments::new(self, first))
    }

    /// Requests the next segment of a segmented response and reads the frame carrying it.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the transport fails.
    pub fn next_segment(&mut self) -> Result<RawFrame> {
        let header = Header::new(
            MessageType::Command,
            Boundary::CompleteOrLast,
            CommandId::USP_GET_NEXT_SEGMENT,
            0,
        );
        self.transport
            .write_frame(&Request::new(Command::NhmExtended, &header.to_bytes())?)?;
        self.read_frame()
    }

    fn read_frame(&mut self) -> Result<RawFrame> {
        let mut frame = RawFrame::new();
        self.transport.read_frame(&mut frame)?;
        Ok(frame)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind, Read, Write};
    use std::time::{Duration, Instant};

    use super::Link;
    use crate::error::Error;
    use crate::frame::Request;
    use crate::nhm::{CommandId, MessageType, Segments};
    use crate::{Command, ReturnCode};

    /// A transport replaying canned input and recording everything written.
    #[derive(Debug, Default)]
    struct Loopback {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Loopback {
        fn new(input: Vec<u8>) -> Self {
            Self {
                input: Cursor::new(input),
                output: Vec::new(),
            }
        }
    }

    impl Read for Loopback {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for Loopback {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn link(input: Vec<u8>) -> Link<Loopback> {
        Link::new(Loopback::new(input)).with_segment_pause(Duration::ZERO)
    }

    fn response_frames(message: &[u8]) -> Vec<u8> {
        Segments::new(message, MessageType::Response, CommandId::USP_GET_RESULTS)
            .flat_map(|segment| {
                let mut frame = vec![0x01, 0x00, 0x00, u8::try_from(segment.len()).unwrap()];
                frame.extend(&segment);
                frame.push(0x00);
                frame
            })
            .collect()
    }

    #[test]
    fn test_send_segmented() {
        let mut link = link(vec![0x01, 0x00, 0x00, 0x00, 0x00]);
        let payload = [0x55; 300];
        let response = link
            .send_segmented(CommandId::USP_SUBMIT, &payload)
            .unwrap();
        assert_eq!(response.return_code(), Ok(ReturnCode::Ok));

        let output = link.into_inner().output;
        assert_eq!(output.len(), (2 + 255) + (2 + 4 + 49));
        assert_eq!(output[..6], [0xA6, 0xFF, 0x31, 0x00, 0x00, 0xFB]);
        assert_eq!(output[257..263], [0xA6, 0x35, 0x21, 0x00, 0x00, 0x31]);
    }

    #[test]
    fn test_failed_send_stops() {
        struct Broken(usize);

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(ErrorKind::TimedOut.into())
            }
        }

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                self.0 += 1;
                Err(ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut link = Link::new(Broken(0)).with_segment_pause(Duration::ZERO);
        assert!(matches!(
            link.send_segmented(CommandId::USP_SUBMIT, &[0; 600]),
            Err(Error::Transport(_))
        ));
        assert_eq!(link.transport().0, 1);
    }

    #[test]
    fn test_request_segmented() {
        let message: Vec<u8> = (0..=255).cycle().take(600).collect();
        let mut link = link(response_frames(&message));
        let reassembled = link
            .request_segmented(CommandId::USP_GET_RESULTS, &[])
            .unwrap();
        assert_eq!(reassembled.as_slice(), message.as_slice());

        let output = link.into_inner().output;
        assert_eq!(
            output,
            [
                0xA6, 0x04, 0x21, 0x02, 0x00, 0x00, // GET_RESULTS
                0xA6, 0x04, 0x21, 0x03, 0x00, 0x00, // GET_NEXT_SEGMENT
                0xA6, 0x04, 0x21, 0x03, 0x00, 0x00, // GET_NEXT_SEGMENT
            ]
        );
    }

    #[test]
    fn test_truncated_response() {
        let mut link = link(vec![0x01, 0x00, 0x00, 0x02, 0xFF]);
        assert!(matches!(
            link.communicate(&Request::empty(Command::GetVersion)),
            Err(Error::Transport(error)) if error.kind() == ErrorKind::UnexpectedEof
        ));
    }

    #[test]
    fn test_segment_pacing() {
        /// Records when each frame was written.
        struct Clocked(Vec<Instant>);

        impl Read for Clocked {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Ok(0)
            }
        }

        impl Write for Clocked {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.push(Instant::now());
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut link = Link::new(Clocked(Vec::new()));
        assert_eq!(link.segment_pause(), Link::<Clocked>::DEFAULT_SEGMENT_PAUSE);
        let start = Instant::now();
        link.write_segmented(CommandId::USP_SUBMIT, &[0; 600]).unwrap();
        let total = start.elapsed();

        let writes = link.into_inner().0;
        assert_eq!(writes.len(), 3);

        for pair in writes.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(10));
        }

        assert!(total >= Duration::from_millis(20));
        assert!(total < Duration::from_millis(30));
    }
}
