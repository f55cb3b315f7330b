//! Fixed pages and `/public/*` files, embedded at compile time.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use include_dir::{Dir, include_dir};

static PUBLIC: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/public");

pub(crate) async fn index() -> Response {
    page("index.html")
}

pub(crate) async fn new_session() -> Response {
    page("new.html")
}

pub(crate) async fn popup() -> Response {
    page("popup.html")
}

pub(crate) async fn public_file(Path(path): Path<String>) -> Response {
    page(&path)
}

fn page(path: &str) -> Response {
    match PUBLIC.get_file(path) {
        Some(file) => (
            [(header::CONTENT_TYPE, content_type(path))],
            file.contents(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type("popup.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("style.css"), "text/css");
        assert_eq!(content_type("app.js"), "text/javascript");
        assert_eq!(content_type("logo.svg"), "image/svg+xml");
        assert_eq!(content_type("no-extension"), "application/octet-stream");
        assert_eq!(content_type("weird.wasm"), "application/octet-stream");
    }

    #[test]
    fn test_fixed_pages_are_embedded() {
        for name in ["index.html", "new.html", "popup.html"] {
            assert!(PUBLIC.get_file(name).is_some(), "{name} missing from public/");
        }
    }
}
