use std::fmt::{Display, Formatter};

use crate::error::Invalid;

/// Kind of a ping-pong message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Sent by the manager.
    Ping,
    /// Sent by the subordinate in reply to a ping.
    Pong,
}

impl Kind {
    const PING: [u8; 4] = *b"PING";
    const PONG: [u8; 4] = *b"PONG";

    /// Returns the ASCII prefix of this kind.
    #[must_use]
    pub const fn prefix(self) -> [u8; 4] {
        match self {
            Self::Ping => Self::PING,
            Self::Pong => Self::PONG,
        }
    }
}

impl TryFrom<[u8; 4]> for Kind {
    type Error = Invalid;

    fn try_from(prefix: [u8; 4]) -> Result<Self, Self::Error> {
        match prefix {
            Self::PING => Ok(Self::Ping),
            Self::PONG => Ok(Self::Pong),
            other => Err(Invalid::Prefix(other)),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ping => write!(f, "PING"),
            Self::Pong => write!(f, "PONG"),
        }
    }
}

/// A ping-pong message: a four byte prefix, a zero separator and a counter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Message {
    kind: Kind,
    counter: u8,
}

impl Message {
    /// Size of an encoded message.
    pub const SIZE: usize = 6;

    const SEPARATOR: u8 = 0x00;

    /// Creates a new message.
    #[must_use]
    pub const fn new(kind: Kind, counter: u8) -> Self {
        Self { kind, counter }
    }

    /// Creates a ping.
    #[must_use]
    pub const fn ping(counter: u8) -> Self {
        Self::new(Kind::Ping, counter)
    }

    /// Creates a pong.
    #[must_use]
    pub const fn pong(counter: u8) -> Self {
        Self::new(Kind::Pong, counter)
    }

    /// Returns the kind.
    #[must_use]
    pub const fn kind(self) -> Kind {
        self.kind
    }

    /// Returns the counter.
    #[must_use]
    pub const fn counter(self) -> u8 {
        self.counter
    }

    /// Encodes the message.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; Self::SIZE] {
        let [p0, p1, p2, p3] = self.kind.prefix();
        [p0, p1, p2, p3, Self::SEPARATOR, self.counter]
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.counter)
    }
}

/// Parses a received payload.
///
/// The checks run in a fixed order: length, separator, prefix. Bytes beyond the sixth are ignored.
impl TryFrom<&[u8]> for Message {
    type Error = Invalid;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        let [p0, p1, p2, p3, separator, counter, ..] = *payload else {
            return Err(Invalid::TooShort(payload.len()));
        };

        if separator != Self::SEPARATOR {
            return Err(Invalid::Separator(separator));
        }

        Ok(Self {
            kind: Kind::try_from([p0, p1, p2, p3])?,
            counter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Kind, Message};
    use crate::error::Invalid;

    #[test]
    fn test_valid_ping() {
        assert_eq!(
            Message::try_from(b"PING\x00\x05".as_slice()),
            Ok(Message::ping(5))
        );
    }

    #[test]
    fn test_separator_before_prefix() {
        assert_eq!(
            Message::try_from(b"PONG\x01\x07".as_slice()),
            Err(Invalid::Separator(0x01))
        );
        assert_eq!(
            Message::try_from(b"XXXX\x02\x07".as_slice()),
            Err(Invalid::Separator(0x02))
        );
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(
            Message::try_from(b"XXXX\x00\x01".as_slice()),
            Err(Invalid::Prefix(*b"XXXX"))
        );
        assert_eq!(
            Message::try_from(b"ping\x00\x01".as_slice()),
            Err(Invalid::Prefix(*b"ping"))
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            Message::try_from(b"PING\x00".as_slice()),
            Err(Invalid::TooShort(5))
        );
        assert_eq!(Message::try_from(b"".as_slice()), Err(Invalid::TooShort(0)));
    }

    #[test]
    fn test_trailing_bytes() {
        assert_eq!(
            Message::try_from(b"PONG\x00\xFFtrailing".as_slice()),
            Ok(Message::pong(255))
        );
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(&Message::pong(7).to_bytes(), b"PONG\x00\x07");
        assert_eq!(Message::new(Kind::Ping, 0).to_string(), "PING(0)");
    }
}
