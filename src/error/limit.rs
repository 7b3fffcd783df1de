use std::fmt::{Display, Formatter};

/// Safety bounds of the reassembly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Limit {
    /// More than the given amount of segments arrived without a final one.
    Segments(usize),
    /// The reassembled message would grow beyond `max` bytes.
    Size { max: usize, size: usize },
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Segments(max) => write!(f, "more than {max} segments without a final segment"),
            Self::Size { max, size } => write!(f, "reassembled size {size} exceeds {max} bytes"),
        }
    }
}
