#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = album_view::cli::load_env();
    album_view::tracing::init();
    if let Some(path) = env_file {
        log::debug!("loaded env from {}", path);
    }
    album_view::app::run().await
}
