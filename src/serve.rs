#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tokio::task::JoinHandle;

/// A static file server bound to an ephemeral localhost port for the duration
/// of one audit. Every invocation gets its own port, so concurrently graded
/// submissions never collide. Dropping the server shuts it down, which makes
/// teardown unconditional on every exit path.
pub struct StaticServer {
    /// Port the server is listening on.
    port:   u16,
    /// Handle of the serving task, aborted on drop.
    handle: JoinHandle<()>,
}

impl StaticServer {
    /// Binds an ephemeral port on localhost and serves `dir` from it. The
    /// listener is bound before this returns, so the server is immediately
    /// ready for requests.
    pub async fn start(dir: PathBuf) -> Result<Self> {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .context("Could not bind a local port for the audit file server")?;
        let port = listener
            .local_addr()
            .context("Could not read the audit file server address")?
            .port();

        let app = Router::new()
            .fallback(serve_file)
            .with_state(Arc::new(dir));
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { port, handle })
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the URL of `entry` as served by this server.
    pub fn url_for(&self, entry: &str) -> String {
        format!("http://127.0.0.1:{}/{}", self.port, entry.trim_start_matches('/'))
    }
}

impl Drop for StaticServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serves one file from the submission directory, defaulting to `index.html`
/// for directory requests and rejecting any path that escapes the served
/// root.
async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let requested = uri.path().trim_start_matches('/');
    let requested = if requested.is_empty() {
        "index.html"
    } else {
        requested
    };

    let Some(path) = resolve(&root, requested) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = content_type_for(&path);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Joins a request path onto the served root, refusing parent-directory
/// components.
fn resolve(root: &Path, requested: &str) -> Option<PathBuf> {
    let relative = Path::new(requested);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let path = root.join(relative);
    if path.is_dir() {
        Some(path.join("index.html"))
    } else {
        Some(path)
    }
}

/// Maps a file extension to the content type served for it.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
