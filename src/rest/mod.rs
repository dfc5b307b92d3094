//! Browser surface: serves the rendered album table and maps its buttons
//! onto [`ViewController`] operations.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::client::AlbumApi;
use crate::render::RenderOptions;
use crate::view::{ViewController, ViewState};

mod handlers;
pub mod models;

use handlers::{add, delete, edit, health, index, not_found, refresh};

pub struct AppState<A: AlbumApi> {
    pub controller: Arc<ViewController<A>>,
    pub view: Arc<Mutex<ViewState>>,
    pub options: Arc<RenderOptions>,
    pub started_at: std::time::SystemTime,
}

impl<A: AlbumApi> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            view: self.view.clone(),
            options: self.options.clone(),
            started_at: self.started_at,
        }
    }
}

impl<A: AlbumApi> AppState<A> {
    pub fn new(controller: ViewController<A>, view: ViewState, options: RenderOptions) -> Self {
        Self {
            controller: Arc::new(controller),
            view: Arc::new(Mutex::new(view)),
            options: Arc::new(options),
            started_at: std::time::SystemTime::now(),
        }
    }
}

pub fn router<A: AlbumApi + 'static>(state: AppState<A>) -> Router {
    Router::new()
        .route("/", get(index::<A>))
        .route("/health", get(health::<A>))
        .route("/refresh", post(refresh::<A>))
        .route("/add", post(add::<A>))
        .route("/albums/:id/delete", post(delete::<A>))
        .route("/albums/:id/edit", post(edit::<A>))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve<A: AlbumApi + 'static>(
    addr: SocketAddr,
    controller: ViewController<A>,
    options: RenderOptions,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_listener(listener, controller, options, shutdown).await
}

/// Loads the snapshot once, then serves until `shutdown` fires. A failed
/// initial load is logged and the page starts empty.
pub async fn serve_listener<A: AlbumApi + 'static>(
    listener: TcpListener,
    controller: ViewController<A>,
    options: RenderOptions,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let mut view = ViewState::new();
    match controller.initialize(&mut view).await {
        Ok(()) => log::info!("📀 loaded {} albums", view.len()),
        Err(e) => log::warn!("initial album load failed: {}", e),
    }

    let app = router(AppState::new(controller, view, options));

    log::info!("🌐 album view on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 shutdown requested");
        })
        .await?;
    log::info!("👋 album view exited");
    Ok(())
}
