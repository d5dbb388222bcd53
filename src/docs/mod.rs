//! Static documentation page.
//!
//! Reference content only: enumerates the upstream routes and parameters the
//! proxy is known to relay. No runtime logic lives here.

use axum::response::Html;

/// Handler for `GET /`.
pub async fn serve_index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
