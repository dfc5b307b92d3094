use std::path::PathBuf;

use anyhow::{Context as AnyhowContext, Result};
use url::Url;

use crate::client::with_trailing_slash;

/// Runtime settings derived from the command line.
#[derive(Clone, Debug)]
pub struct Context {
    pub api_url: Url,
    pub log_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let api_url = Url::parse(&cli.api_url)
            .with_context(|| format!("invalid --api-url {}", cli.api_url))?;
        anyhow::ensure!(
            matches!(api_url.scheme(), "http" | "https"),
            "--api-url must be http or https, got {}",
            api_url.scheme()
        );

        Ok(Self {
            api_url: with_trailing_slash(api_url),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        })
    }
}
