use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List and delete albums of an album REST service",
    long_about = "A small view over an album REST service: fetches the album collection, renders it as a table and deletes records by id.\n\nEnvironment:\n  ALBUM_API_URL         Album service base URL (default http://localhost:8000/)\n  ALBUM_VIEW_LOG_FILE   Also append logs to this file\n  ALBUM_VIEW_LISTEN     Listen address of `serve`\n  DOTENV_PATH           Env file to load (default .env)\n"
)]
pub struct Cli {
    #[arg(
        long,
        env = "ALBUM_API_URL",
        default_value = "http://localhost:8000/",
        value_name = "URL",
        help = "Base URL of the album service"
    )]
    pub api_url: String,

    #[arg(
        long = "log-file",
        env = "ALBUM_VIEW_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Loads `.env` (or `DOTENV_PATH`) into the process environment. Runs
/// before logging starts so `RUST_LOG` can come from the file.
pub fn load_env() -> Option<String> {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok()?;
    Some(dotenv_path)
}

pub fn parse() -> Cli {
    Cli::parse()
}
