//! Command-line interface orchestration for spantree.
//!
//! The CLI offers a `run` command that loads a graph from a JSON document,
//! the built-in example, or inline edge arguments and prints its minimum
//! spanning tree, and a `save` command that writes the loaded graph back out
//! as a JSON document with layout positions.

mod commands;
mod layout;

pub use commands::{
    Cli, CliError, Command, EdgeSpec, EdgesArgs, ExecutionSummary, FileArgs, GraphSource,
    RunCommand, RunSummary, SaveCommand, SaveSummary, render_summary, run_cli,
};
