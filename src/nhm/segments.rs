//! Splitting of messages into NHM segments.

use std::fmt::{Display, Formatter};
use std::iter::{Chain, Copied, FusedIterator};
use std::slice::Iter;

use crate::nhm::{Boundary, CommandId, Header, MessageType, HEADER_SIZE, MAX_SEGMENT_PAYLOAD};

/// A single segment: a header and the slice of the message it carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Segment<'a> {
    header: Header,
    payload: &'a [u8],
}

impl<'a> Segment<'a> {
    /// Returns the segment's header.
    #[must_use]
    pub const fn header(&self) -> Header {
        self.header
    }

    /// Returns the part of the message carried by this segment.
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Returns the size of the encoded segment in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }

    /// Returns an iterator over the encoded bytes, header first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        self.into_iter()
    }
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.header, f)
    }
}

impl<'a> IntoIterator for &Segment<'a> {
    type Item = u8;
    type IntoIter = Chain<<[u8; HEADER_SIZE] as IntoIterator>::IntoIter, Copied<Iter<'a, u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.header
            .to_bytes()
            .into_iter()
            .chain(self.payload.iter().copied())
    }
}

/// Iterator over the segments of a message.
///
/// An empty message yields exactly one empty, final segment.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    remaining: Option<&'a [u8]>,
    message_type: MessageType,
    command_id: CommandId,
    max_payload: usize,
}

impl<'a> Segments<'a> {
    /// Creates an iterator over the segments of `message`.
    #[must_use]
    pub const fn new(message: &'a [u8], message_type: MessageType, command_id: CommandId) -> Self {
        Self {
            remaining: Some(message),
            message_type,
            command_id,
            max_payload: MAX_SEGMENT_PAYLOAD,
        }
    }

    /// Creates an iterator over the segments of a host command.
    #[must_use]
    pub const fn command(message: &'a [u8], command_id: CommandId) -> Self {
        Self::new(message, MessageType::Command, command_id)
    }

    /// Limits the payload of each segment to `max_payload` bytes.
    ///
    /// The limit is clamped to `1..=251`.
    #[must_use]
    pub fn with_max_payload(mut self, max_payload: usize) -> Self {
        self.max_payload = max_payload.clamp(1, MAX_SEGMENT_PAYLOAD);
        self
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining.take()?;
        let (payload, rest) = remaining.split_at(remaining.len().min(self.max_payload));

        let boundary = if rest.is_empty() {
            Boundary::CompleteOrLast
        } else {
            self.remaining = Some(rest);
            Boundary::NotLast
        };

        let length = payload.len() as u8;

        Some(Segment {
            header: Header::new(self.message_type, boundary, self.command_id, length),
            payload,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .remaining
            .map_or(0, |remaining| remaining.len().div_ceil(self.max_payload).max(1));
        (len, Some(len))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::Segments;
    use crate::nhm::{Boundary, CommandId, MessageType};

    fn message(len: usize) -> Vec<u8> {
        (0..len).map(|index| index as u8).collect()
    }

    #[test]
    fn test_segment_count() {
        for (len, count) in [
            (0, 1),
            (1, 1),
            (251, 1),
            (252, 2),
            (502, 2),
            (503, 3),
            (700, 3),
        ] {
            let message = message(len);
            let segments = Segments::command(&message, CommandId::USP_SUBMIT);
            assert_eq!(segments.len(), count, "length {len}");
            assert_eq!(segments.count(), count, "length {len}");
        }
    }

    #[test]
    fn test_empty_message() {
        let segments: Vec<_> = Segments::command(&[], CommandId::USP_GET_RESULTS).collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].iter().collect::<Vec<_>>(),
            [0x21, 0x02, 0x00, 0x00]
        );
    }

    #[test]
    fn test_boundary_flags() {
        let message = message(700);
        let segments: Vec<_> = Segments::command(&message, CommandId::USP_SUBMIT).collect();
        let boundaries: Vec<_> = segments
            .iter()
            .map(|segment| segment.header().boundary())
            .collect();
        assert_eq!(
            boundaries,
            [Boundary::NotLast, Boundary::NotLast, Boundary::CompleteOrLast]
        );
        let lengths: Vec<_> = segments
            .iter()
            .map(|segment| segment.header().length())
            .collect();
        assert_eq!(lengths, [251, 251, 198]);
    }

    #[test]
    fn test_byte_order() {
        let message = message(300);
        let segments: Vec<_> = Segments::command(&message, CommandId::USP_SUBMIT).collect();
        assert_eq!(segments[0].iter().take(4).collect::<Vec<_>>(), [0x31, 0x00, 0x00, 251]);
        assert_eq!(segments[1].iter().take(4).collect::<Vec<_>>(), [0x21, 0x00, 0x00, 49]);
        assert_eq!(segments[0].len(), 255);

        let rejoined: Vec<u8> = segments
            .iter()
            .flat_map(|segment| segment.payload().iter().copied())
            .collect();
        assert_eq!(rejoined, message);
    }

    #[test]
    fn test_message_type() {
        let message = message(10);
        let segment = Segments::new(&message, MessageType::Response, CommandId::USP_GET_RESULTS)
            .next()
            .unwrap();
        assert_eq!(segment.header().message_type(), MessageType::Response);
        assert_eq!(segment.iter().next(), Some(0x41));
    }

    #[test]
    fn test_with_max_payload() {
        let message = message(10);
        let segments = Segments::command(&message, CommandId::USP_SUBMIT).with_max_payload(4);
        assert_eq!(segments.len(), 3);
        let lengths: Vec<_> = segments.map(|segment| segment.payload().len()).collect();
        assert_eq!(lengths, [4, 4, 2]);
    }
}
