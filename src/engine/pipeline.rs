//! Pipeline orchestration.
//!
//! Runs one single-pass simulation: a framed reader half decodes lines from
//! the byte source, parses them, and forwards accepted instructions through
//! a bounded [`mpsc`] channel; an applier half owns the one live
//! [`RobotState`], applies instructions strictly in order, and writes report
//! lines to the byte sink.
//!
//! Backpressure is cooperative at two points with no drops or reordering:
//! the bounded `send(..).await` suspends the reader half (no further chunk
//! is read) while the applier is saturated, and `write_all(..).await`
//! suspends the applier while the sink is. Both halves are polled by
//! [`tokio::try_join!`] inside one task, so processing stays strictly
//! sequential end to end.

use futures_util::StreamExt;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio_util::codec::FramedRead;
use tracing::debug;

use crate::engine::codec::CommandCodec;
use crate::engine::formatter::format_report;
use crate::engine::reducer::reduce;
use crate::models::{Grid, Instruction, RobotState};
use crate::parse::parse_line;
use crate::{AppError, Result};

/// Capacity of the in-flight instruction channel.
///
/// Bounds how far line parsing may run ahead of state reduction before the
/// reader half suspends.
pub const INSTRUCTION_BUFFER: usize = 64;

/// Run the command pipeline from `source` to `sink` over `grid`.
///
/// Consumes the source to end-of-input, including a final unterminated
/// line, then flushes and shuts the sink down. The robot starts
/// [`RobotState::Unpositioned`] and the state is discarded when the run
/// ends.
///
/// # Errors
///
/// Returns [`AppError::Io`] when reading the source or writing the sink
/// fails; the pipeline aborts without processing remaining input. Rejected
/// lines and semantically ignored instructions are not errors and never
/// abort the run.
pub async fn run<R, W>(grid: Grid, source: R, sink: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (instr_tx, instr_rx) = mpsc::channel(INSTRUCTION_BUFFER);

    let reader = read_instructions(source, instr_tx);
    let applier = apply_instructions(grid, instr_rx, sink);

    // One task polls both halves; the bounded channel is the only coupling.
    let ((), ()) = tokio::try_join!(reader, applier)?;
    Ok(())
}

/// Reader half — decode lines, parse them, forward instructions in order.
///
/// Oversized lines are discarded inside the codec, so every decoded item is
/// a real line; unparseable lines are skipped silently at `DEBUG`.
/// Underlying read errors are fatal.
async fn read_instructions<R>(source: R, instr_tx: mpsc::Sender<Instruction>) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = FramedRead::new(source, CommandCodec::new());

    while let Some(item) = lines.next().await {
        let line = item?;
        if let Some(instruction) = parse_line(&line) {
            if instr_tx.send(instruction).await.is_err() {
                // The applier is gone; its error surfaces from try_join.
                debug!("pipeline reader: instruction channel closed, stopping");
                break;
            }
        } else if !line.trim().is_empty() {
            debug!(raw_line = %line, "pipeline reader: skipping unrecognized line");
        }
    }

    Ok(())
}

/// Applier half — own the robot state, apply instructions, emit reports.
///
/// Runs until the instruction channel closes (end of input), then flushes
/// and shuts down the sink. Write failures are fatal; dropping the receiver
/// on the way out also unblocks a suspended reader half.
async fn apply_instructions<W>(
    grid: Grid,
    mut instr_rx: mpsc::Receiver<Instruction>,
    mut sink: W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut state = RobotState::Unpositioned;

    while let Some(instruction) = instr_rx.recv().await {
        if instruction == Instruction::Report {
            if let Some(report) = format_report(&state) {
                let mut bytes = report.into_bytes();
                bytes.push(b'\n');
                sink.write_all(&bytes)
                    .await
                    .map_err(|e| AppError::Io(format!("report write failed: {e}")))?;
            }
        }
        state = reduce(&grid, state, &instruction);
    }

    sink.flush()
        .await
        .map_err(|e| AppError::Io(format!("sink flush failed: {e}")))?;
    sink.shutdown()
        .await
        .map_err(|e| AppError::Io(format!("sink shutdown failed: {e}")))?;

    Ok(())
}
