#![forbid(unsafe_code)]

//! Toy robot simulator core.
//!
//! A robot moves on a rectangular grid, driven by a line-oriented command
//! language (`PLACE x,y,FACING`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`) read
//! from an arbitrary byte source; successful `REPORT`s are written to a
//! byte sink as `x,y,FACING` lines.
//!
//! The crate is agnostic to where the bytes come from or go — the `bot-sim`
//! binary wires a file or stdin to stdout, but any `AsyncRead`/`AsyncWrite`
//! pair works:
//!
//! ```rust,ignore
//! use bot_sim::engine::pipeline;
//! use bot_sim::models::Grid;
//!
//! let mut output = Vec::new();
//! pipeline::run(Grid::default(), &b"PLACE 0,0,NORTH\nMOVE\nREPORT\n"[..], &mut output).await?;
//! assert_eq!(output, b"0,1,NORTH\n");
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod parse;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
