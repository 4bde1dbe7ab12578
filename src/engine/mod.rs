//! Streaming command pipeline.
//!
//! Wires raw input bytes through line reassembly, parsing, state reduction,
//! and report formatting into an output sink:
//!
//! ```text
//! bytes → [codec] → lines → [parse] → instructions → [reducer] → state
//!                                                       │ (on REPORT)
//!                                                  [formatter] → sink
//! ```
//!
//! Submodules:
//! - `codec`: [`LinesCodec`](tokio_util::codec::LinesCodec)-based line
//!   framing that reassembles logical lines across chunk boundaries.
//! - `reducer`: pure state machine applying instructions under grid bounds.
//! - `formatter`: renders a position report from the current state.
//! - `pipeline`: single-pass orchestration with backpressure end to end.

pub mod codec;
pub mod formatter;
pub mod pipeline;
pub mod reducer;
