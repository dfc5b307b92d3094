mod wiring;

use std::net::SocketAddr;

use anyhow::{Context as AnyhowContext, Result};
use tokio_util::sync::CancellationToken;

use crate::{cli, context, render::RenderOptions, rest};

pub struct App {
    pub ctx: context::Context,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli)?;

        crate::tracing::set_log_file(ctx.log_file.as_deref())
            .context("opening log file")?;
        log::debug!("🔗 Album service: {}", ctx.api_url);
        if let Some(path) = ctx.log_file.as_deref() {
            log::debug!("📝 Log file: {}", path.to_string_lossy());
        }

        Ok((Self { ctx }, cli))
    }
}

pub async fn run_server(app: App, listen: SocketAddr) -> Result<()> {
    log::info!("🚀 Starting album-view");
    log::info!("🔗 Album service: {}", app.ctx.api_url);

    let controller = wiring::build_controller(&app.ctx)?;
    let shutdown = CancellationToken::new();

    let server_shutdown = shutdown.clone();
    let mut server = tokio::spawn(async move {
        rest::serve(listen, controller, RenderOptions::default(), server_shutdown).await
    });

    let finished = tokio::select! {
        _ = tokio::signal::ctrl_c() => None,
        joined = &mut server => Some(joined),
    };
    let joined = match finished {
        Some(joined) => joined,
        None => {
            log::info!("🧨 Ctrl-C received, shutting down");
            shutdown.cancel();
            server.await
        }
    };

    match joined {
        Ok(Ok(())) => {
            log::info!("✅ Shutdown complete");
            Ok(())
        }
        Ok(Err(e)) => Err(e.context("album view server failed")),
        Err(e) => Err(e.into()),
    }
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    match cli.cmd {
        cli::Command::Serve { listen } => run_server(app, listen).await,
        cmd => {
            let controller = wiring::build_controller(&app.ctx)?;
            cmd.run(&controller, &mut std::io::stdout()).await
        }
    }
}
