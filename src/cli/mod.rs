//! Command-line interface module.

mod args;
pub mod generate;
pub mod rebuild;

pub use args::{Cli, Commands, GenerateArgs, SiteArgs};
