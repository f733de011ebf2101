//! Static file serving for the development server.
//!
//! Files are served from the site root directory. `/` maps to `index.html`,
//! paths resolving outside the root are rejected with 403, missing files get
//! a styled 404 page, and any other read failure is a 500.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use super::AppState;

/// Serves the requested path from the site root.
pub async fn serve_static(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path();

    // Remove the leading slash; the root path maps to index.html.
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    // Security: reject anything resolving outside the site root.
    let Some(file_path) = resolve_within_root(&state.root, path) else {
        return (StatusCode::FORBIDDEN, "403 Forbidden").into_response();
    };

    match tokio::fs::read(&file_path).await {
        Ok(content) => file_response(&file_path, content, &state.cache_control),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, Html(not_found_page(path))).into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error").into_response(),
    }
}

/// Resolves a request path against the root, lexically.
///
/// Returns `None` when `..` components would climb above the root.
fn resolve_within_root(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in Path::new(request_path).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::CurDir => {}
            // Absolute prefixes cannot appear after the leading slash is
            // stripped, but treat them as traversal attempts if they do.
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(root.join(resolved))
}

/// Creates an HTTP response for a file with the appropriate content type.
fn file_response(path: &Path, content: Vec<u8>, cache_control: &str) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from(content))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// The styled 404 page.
fn not_found_page(request_path: &str) -> String {
    let shown = crate::dom::escape_text(request_path);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>404 - Not Found</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            background: #1e1e2f;
            color: #fff;
            text-align: center;
            padding: 50px;
        }}
    </style>
</head>
<body>
    <h1>404 - File Not Found</h1>
    <p>The requested file <code>/{shown}</code> could not be found.</p>
    <p><a href="/index.html" style="color: #ff6b61;">&larr; Back to Portfolio</a></p>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_paths() {
        let root = Path::new("/srv/site");
        assert_eq!(
            resolve_within_root(root, "index.html"),
            Some(PathBuf::from("/srv/site/index.html"))
        );
        assert_eq!(
            resolve_within_root(root, "themes/dark-theme.css"),
            Some(PathBuf::from("/srv/site/themes/dark-theme.css"))
        );
    }

    #[test]
    fn test_resolve_normalizes_inside_root() {
        let root = Path::new("/srv/site");
        // Dot segments that stay inside the root are fine.
        assert_eq!(
            resolve_within_root(root, "themes/../index.html"),
            Some(PathBuf::from("/srv/site/index.html"))
        );
        assert_eq!(
            resolve_within_root(root, "./index.html"),
            Some(PathBuf::from("/srv/site/index.html"))
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let root = Path::new("/srv/site");
        assert_eq!(resolve_within_root(root, "../secret"), None);
        assert_eq!(resolve_within_root(root, "themes/../../secret"), None);
        assert_eq!(resolve_within_root(root, "a/../../../etc/passwd"), None);
    }

    #[test]
    fn test_not_found_page_escapes_path() {
        let page = not_found_page("missing/<script>.html");
        assert!(page.contains("404 - File Not Found"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
