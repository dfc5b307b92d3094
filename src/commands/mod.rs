use std::io::Write;

use anyhow::{Context as AnyhowContext, Result};

use crate::cli::{Command, OutputFormat};
use crate::client::AlbumApi;
use crate::render::{html, render, text, RenderOptions};
use crate::view::{ViewController, ViewState};

impl Command {
    /// Runs a one-shot command and prints the resulting snapshot to `out`.
    pub async fn run<A: AlbumApi, W: Write>(
        &self,
        controller: &ViewController<A>,
        out: &mut W,
    ) -> Result<()> {
        let mut state = ViewState::new();
        match self {
            Command::List { format } => {
                controller
                    .initialize(&mut state)
                    .await
                    .context("loading albums")?;
                print_snapshot(&state, *format, out)
            }
            Command::Delete { id, format } => {
                controller
                    .remove(&mut state, *id)
                    .await
                    .with_context(|| format!("deleting album #{id}"))?;
                print_snapshot(&state, *format, out)
            }
            Command::Edit { id } => {
                controller.edit(*id);
                Ok(())
            }
            Command::Add => {
                controller.add();
                Ok(())
            }
            Command::Serve { .. } => anyhow::bail!("serve is not a one-shot command"),
        }
    }
}

pub fn print_snapshot<W: Write>(state: &ViewState, format: OutputFormat, out: &mut W) -> Result<()> {
    let view = render(state);
    match format {
        OutputFormat::Table => {
            text::table(&view).print(out)?;
        }
        OutputFormat::Html => {
            out.write_all(html::page(&view, &RenderOptions::default(), None).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, state.albums())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
