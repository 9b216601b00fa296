//! Static file serving for the browser client.

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

use crate::routes::AppState;

/// Fallback handler: serves files from the configured static directory.
///
/// `/` maps to `index.html`. Requests escaping the static root are
/// rejected before touching the filesystem.
pub async fn serve(State(state): State<AppState>, uri: Uri) -> Response {
    let requested = uri.path().trim_start_matches('/');
    let relative = if requested.is_empty() {
        "index.html"
    } else {
        requested
    };

    let Some(path) = sanitize(&state.static_dir, relative) else {
        warn!(path = relative, "Rejected static file path");
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => {
            debug!(path = %path.display(), bytes = contents.len(), "Serving static file");
            (
                [(header::CONTENT_TYPE, content_type(&path))],
                contents,
            )
                .into_response()
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Static file not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Joins a request path onto the static root, refusing any component
/// that would traverse out of it.
fn sanitize(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => path.push(part),
            _ => return None,
        }
    }
    Some(path)
}

/// Content type from the file extension; the handful the client uses.
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
