//! Line codec for the command stream.
//!
//! Wraps [`tokio_util::codec::LinesCodec`] with a maximum line length so an
//! unterminated or garbage input stream cannot grow the partial-line buffer
//! without bound.
//!
//! # Usage
//!
//! Use [`CommandCodec`] as the codec parameter for
//! [`tokio_util::codec::FramedRead`]. Lines are delimited by `\n`, with an
//! optional preceding `\r` that is stripped from the decoded line. A
//! non-empty fragment left at end-of-input is yielded as one final line by
//! [`decode_eof`](CommandCodec::decode_eof).

use bytes::BytesMut;
use tokio_util::codec::{Decoder, LinesCodec, LinesCodecError};

use crate::{AppError, Result};

/// Maximum line length accepted by the command codec: 8 KiB.
///
/// Command lines are a handful of bytes; anything longer is noise. A line
/// exceeding this limit is discarded through its terminating newline with a
/// warning, and framing resumes on the following line.
pub const MAX_LINE_BYTES: usize = 8_192;

/// Line-framing decoder for the robot command stream.
///
/// Delegates framing to [`LinesCodec`] with a fixed [`MAX_LINE_BYTES`]
/// limit. Each decoded item is one complete logical line without its
/// terminator; chunks may split a line anywhere, including mid-keyword, and
/// the partial fragment is buffered until its newline arrives.
///
/// The length limit never surfaces as a stream error. `FramedRead` fuses
/// after a decoder error, which would silently drop all remaining input, so
/// oversized lines are absorbed here and only genuine I/O failures
/// propagate.
#[derive(Debug)]
pub struct CommandCodec(LinesCodec);

impl CommandCodec {
    /// Create a new `CommandCodec` with the default [`MAX_LINE_BYTES`] limit.
    #[must_use]
    pub fn new() -> Self {
        Self(LinesCodec::new_with_max_length(MAX_LINE_BYTES))
    }
}

impl Default for CommandCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for CommandCodec {
    type Item = String;
    type Error = AppError;

    /// Decode the next newline-terminated line from `src`.
    ///
    /// Returns `Ok(None)` when `src` contains no complete line yet
    /// (buffering). A line exceeding [`MAX_LINE_BYTES`] is dropped with a
    /// warning and decoding continues with the line after it.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        loop {
            match self.0.decode(src) {
                Ok(item) => return Ok(item),
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    // The inner codec is now in discard mode; polling it
                    // again resumes framing past the next newline.
                    tracing::warn!(limit = MAX_LINE_BYTES, "line too long, discarding");
                }
                Err(LinesCodecError::Io(err)) => return Err(err.into()),
            }
        }
    }

    /// Decode the final, possibly unterminated line when the stream reaches
    /// EOF, with the same oversized-line handling as `decode`.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        loop {
            match self.0.decode_eof(src) {
                Ok(item) => return Ok(item),
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    tracing::warn!(limit = MAX_LINE_BYTES, "line too long, discarding");
                }
                Err(LinesCodecError::Io(err)) => return Err(err.into()),
            }
        }
    }
}
