mod args;
mod command;

pub use args::Cli;
pub use command::{Command, OutputFormat};

pub use args::{load_env, parse};
