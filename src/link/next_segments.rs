use std::io::{Read, Write};

use crate::error::Result;
use crate::frame::RawFrame;
use crate::link::Link;

/// Pulls the frames of a segmented response from the modem.
///
/// The first frame is the response to the original command. Every further call to
/// [`Iterator::next`] issues one `GET_NEXT_SEGMENT` request and yields the frame read in reply.
/// The iterator never ends by itself; the consumer stops pulling once it has seen the last segment.
#[derive(Debug)]
pub struct NextSegments<'link, T> {
    link: &'link mut Link<T>,
    first: Option<RawFrame>,
}

impl<'link, T> NextSegments<'link, T> {
    /// Creates a new segment source starting with the already received `first` frame.
    #[must_use]
    pub fn new(link: &'link mut Link<T>, first: RawFrame) -> Self {
        Self {
            link,
            first: Some(first),
        }
    }
}

impl<T> Iterator for NextSegments<'_, T>
where
    T: Read + Write,
{
    type Item = Result<RawFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.first.take().map_or_else(|| self.link.next_segment(), Ok))
    }
}
