//! Command-line surface: argument parsing, interactive commands and screen
//! rendering.

pub mod args;
pub mod render;
pub mod repl;

pub use args::{ActionCommand, ActionRef, CauseCommand, Cli, Command, ProblemArgs, SolutionCommand};
pub use repl::ReplCommand;
