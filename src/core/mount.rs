//! Server-side routes around the application mount point
//!
//! - GET / - 301 Moved Permanently to the mount path (optional)
//! - GET /demo/ - 301 Moved Permanently to /demo

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use super::routes::UI_MOUNT_PATH;

fn redirect_to_mount(from: &'static str) -> Response {
    tracing::debug!("Redirecting {} to {}", from, UI_MOUNT_PATH);
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, UI_MOUNT_PATH)],
    )
        .into_response()
}

/// Router sending the site root and the slash-terminated mount path to the
/// application shell
pub fn mount_router(redirect_root: bool) -> Router {
    let slash_path = format!("{}/", UI_MOUNT_PATH);
    let router = Router::new().route(
        &slash_path,
        get(|| async { redirect_to_mount("trailing slash") }),
    );

    if !redirect_root {
        return router;
    }

    router.route("/", get(|| async { redirect_to_mount("/") }))
}
