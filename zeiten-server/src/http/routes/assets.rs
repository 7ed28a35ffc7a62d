//! Static assets: index page at `/`, everything else from the public dir

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Asset routes. Installs the router's fallback, so merge this last.
pub fn router<S>(public_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .fallback_service(ServeDir::new(public_dir))
}
