use std::fmt::{Display, Formatter, UpperHex};

/// Formats raw link bytes for log output.
///
/// [`Display`] renders the bytes as one contiguous lower-case string (`a6040000`),
/// [`UpperHex`] renders them space-separated (`A6 04 00 00`).
#[derive(Clone, Copy, Debug)]
pub struct HexSlice<'a>(&'a [u8]);

impl<'a> HexSlice<'a> {
    /// Wraps a slice of bytes.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }
}

impl<'a> From<&'a [u8]> for HexSlice<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl Display for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

impl UpperHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{byte:02X}")?;
        }

        Ok(())
    }
}
