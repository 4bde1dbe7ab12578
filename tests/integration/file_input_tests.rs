//! File-backed source tests.
//!
//! The pipeline is agnostic to where its bytes come from; these tests run
//! it over a real file, the way the `bot-sim` binary does when given a path
//! argument.

use std::io::Write;

use tempfile::NamedTempFile;
use tokio::fs::File;

use bot_sim::engine::pipeline;
use bot_sim::models::Grid;

async fn run_file(contents: &str) -> String {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write commands");
    file.flush().expect("flush commands");

    let source = File::open(file.path()).await.expect("open command file");
    let mut output = Vec::new();
    pipeline::run(Grid::default(), source, &mut output)
        .await
        .expect("pipeline must succeed");
    String::from_utf8(output).expect("UTF-8")
}

/// A command file runs end to end like any other source.
#[tokio::test]
async fn command_file_runs() {
    let output = run_file("PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\n").await;
    assert_eq!(output, "3,3,NORTH\n");
}

/// A file without a trailing newline still processes its last command.
#[tokio::test]
async fn file_without_trailing_newline() {
    let output = run_file("PLACE 0,0,SOUTH\nREPORT").await;
    assert_eq!(output, "0,0,SOUTH\n");
}

/// An empty file is a clean, silent run.
#[tokio::test]
async fn empty_file_is_silent() {
    assert_eq!(run_file("").await, "");
}
