#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use album_view::Album;
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{delete, get},
    Router,
};

/// In-process stand-in for the album service. Answers like the real one
/// (`null` for an empty table, `"ok"` for deletes) and records every
/// request it sees.
#[derive(Clone)]
pub struct Backend {
    pub url: String,
    state: BackendState,
}

#[derive(Clone)]
struct BackendState {
    albums: Arc<Mutex<Vec<Album>>>,
    requests: Arc<Mutex<Vec<(Method, String)>>>,
    broken_list: Arc<AtomicBool>,
    delete_status: Arc<AtomicU16>,
}

impl Backend {
    pub async fn start(albums: Vec<Album>) -> Self {
        let state = BackendState {
            albums: Arc::new(Mutex::new(albums)),
            requests: Arc::new(Mutex::new(Vec::new())),
            broken_list: Arc::new(AtomicBool::new(false)),
            delete_status: Arc::new(AtomicU16::new(200)),
        };
        let app = Router::new()
            .route("/albums/", get(list_albums))
            .route("/album/:id", delete(delete_album))
            .fallback(unknown)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind backend");
        let addr = listener.local_addr().expect("backend addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            url: format!("http://{}/", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.state.requests.lock().unwrap().clear();
    }

    pub fn break_list_body(&self) {
        self.state.broken_list.store(true, Ordering::SeqCst);
    }

    pub fn answer_deletes_with(&self, status: StatusCode) {
        self.state.delete_status.store(status.as_u16(), Ordering::SeqCst);
    }

    pub fn albums(&self) -> Vec<Album> {
        self.state.albums.lock().unwrap().clone()
    }
}

async fn list_albums(State(state): State<BackendState>) -> impl IntoResponse {
    record(&state, Method::GET, "/albums/");
    if state.broken_list.load(Ordering::SeqCst) {
        return (StatusCode::OK, "<html>upstream exploded</html>".to_string());
    }
    let albums = state.albums.lock().unwrap().clone();
    let body = if albums.is_empty() {
        "null\n".to_string()
    } else {
        serde_json::to_string(&albums).unwrap()
    };
    (StatusCode::OK, body)
}

async fn delete_album(State(state): State<BackendState>, Path(id): Path<i64>) -> impl IntoResponse {
    record(&state, Method::DELETE, &format!("/album/{id}"));
    state.albums.lock().unwrap().retain(|a| a.id != id);
    let status = StatusCode::from_u16(state.delete_status.load(Ordering::SeqCst)).unwrap();
    (status, "\"ok\"\n")
}

async fn unknown(State(state): State<BackendState>, method: Method, uri: Uri) -> impl IntoResponse {
    record(&state, method, uri.path());
    StatusCode::NOT_FOUND
}

fn record(state: &BackendState, method: Method, path: &str) {
    state
        .requests
        .lock()
        .unwrap()
        .push((method, path.to_string()));
}

pub fn sample_albums() -> Vec<Album> {
    vec![
        Album::new(1, "Blue Train", "John Coltrane", 56.99),
        Album::new(2, "Jeru", "Gerry Mulligan", 17.99),
        Album::new(3, "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}
