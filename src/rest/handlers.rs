use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::{
    album::AlbumId,
    client::AlbumApi,
    error::ViewError,
    render::{html, render},
    view::ViewState,
};

use super::{
    models::{ErrorResponse, HealthResponse},
    AppState,
};

pub async fn index<A: AlbumApi + 'static>(State(app): State<AppState<A>>) -> Response {
    let view = app.view.lock().await;
    page(&app, &view, StatusCode::OK, None)
}

pub async fn refresh<A: AlbumApi + 'static>(State(app): State<AppState<A>>) -> Response {
    let mut view = app.view.lock().await;
    let result = app.controller.refresh(&mut view).await;
    outcome(&app, &view, result)
}

pub async fn delete<A: AlbumApi + 'static>(
    State(app): State<AppState<A>>,
    Path(id): Path<AlbumId>,
) -> Response {
    let mut view = app.view.lock().await;
    let result = app.controller.remove(&mut view, id).await;
    outcome(&app, &view, result)
}

pub async fn edit<A: AlbumApi + 'static>(
    State(app): State<AppState<A>>,
    Path(id): Path<AlbumId>,
) -> Response {
    app.controller.edit(id);
    let view = app.view.lock().await;
    page(&app, &view, StatusCode::OK, None)
}

pub async fn add<A: AlbumApi + 'static>(State(app): State<AppState<A>>) -> Response {
    app.controller.add();
    let view = app.view.lock().await;
    page(&app, &view, StatusCode::OK, None)
}

pub async fn health<A: AlbumApi + 'static>(State(app): State<AppState<A>>) -> impl IntoResponse {
    let uptime_secs = app.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "endpoint not found".to_string(),
        }),
    )
}

/// A failed action still shows the (stale) snapshot, with the error on top.
fn outcome<A: AlbumApi>(
    app: &AppState<A>,
    view: &ViewState,
    result: Result<(), ViewError>,
) -> Response {
    match result {
        Ok(()) => page(app, view, StatusCode::OK, None),
        Err(e) => {
            log::warn!("album service request failed: {}", e);
            let message = format!("Album service request failed: {e}");
            page(app, view, StatusCode::BAD_GATEWAY, Some(&message))
        }
    }
}

fn page<A: AlbumApi>(
    app: &AppState<A>,
    view: &ViewState,
    status: StatusCode,
    banner: Option<&str>,
) -> Response {
    let body = html::page(&render(view), &app.options, banner);
    (status, Html(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::render::RenderOptions;
    use crate::rest::router;
    use crate::view::tests::{sample_albums, Call, FakeApi};
    use crate::view::ViewController;

    async fn app_with(albums: Vec<crate::album::Album>) -> (AppState<FakeApi>, Router) {
        let controller = ViewController::new(FakeApi::with_albums(albums));
        let mut view = ViewState::new();
        controller.initialize(&mut view).await.unwrap();
        let state = AppState::new(controller, view, RenderOptions::default());
        (state.clone(), router(state))
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn row_count(body: &str) -> usize {
        body.matches("<tr data-id=").count()
    }

    #[tokio::test]
    async fn index_renders_snapshot_without_network() {
        let (state, router) = app_with(sample_albums()).await;

        let (status, body) = send(router, "GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(row_count(&body), 3);
        assert!(body.contains("Sarah Vaughan"));
        assert_eq!(state.controller.api().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn delete_removes_and_rerenders() {
        let (state, router) = app_with(sample_albums()).await;

        let (status, body) = send(router, "POST", "/albums/1/delete").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(row_count(&body), 2);
        assert!(!body.contains("Blue Train"));
        assert_eq!(
            state.controller.api().calls(),
            vec![Call::List, Call::Delete(1), Call::List]
        );
        assert_eq!(state.view.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_rows_and_shows_banner() {
        let (state, router) = app_with(sample_albums()).await;
        state.controller.api().break_body();

        let (status, body) = send(router, "POST", "/refresh").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(row_count(&body), 3);
        assert!(body.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn edit_and_add_make_no_calls() {
        let (state, router) = app_with(sample_albums()).await;

        let (status, body) = send(router.clone(), "POST", "/albums/2/edit").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(row_count(&body), 3);
        let (status, _) = send(router, "POST", "/add").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(state.controller.api().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let (state, router) = app_with(sample_albums()).await;

        let (status, _) = send(router, "POST", "/albums/abc/delete").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(state.controller.api().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn health_and_fallback() {
        let (_, router) = app_with(Vec::new()).await;

        let (status, body) = send(router.clone(), "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "ok");

        let (status, body) = send(router, "GET", "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let err: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(err.message, "endpoint not found");
    }
}
