//! Command-line interface module.

mod args;
mod run;

pub use args::{Cli, Commands, PathArgs};
pub use run::{Output, execute, run};
