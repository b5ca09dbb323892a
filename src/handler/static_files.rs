//! Static file serving
//!
//! Resolves a URL path to a file beneath the served root and builds the
//! response. Resolution never yields a path outside the root: `..` and
//! other non-normal segments are rejected before touching the filesystem,
//! and the canonicalized result is checked against the canonicalized root
//! so symlinks cannot escape either.

use crate::config::Config;
use crate::error::ServeError;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve `url_path` from the configured root.
pub async fn serve(url_path: &str, is_head: bool, config: &Config) -> Response<Full<Bytes>> {
    match load(&config.files.root, url_path, &config.files.index).await {
        Ok((content, content_type)) => {
            if config.logging.access_log {
                logger::log_response(content.len());
            }
            http::build_file_response(content, content_type, is_head)
        }
        Err(err) => {
            match &err {
                // Misses are routine, not worth a log line
                ServeError::NotFound => {}
                ServeError::Traversal => {
                    logger::log_warning(&format!("Path traversal attempt blocked: {url_path}"));
                }
                ServeError::Io(e) => {
                    logger::log_error(&format!("Failed to read '{url_path}': {e}"));
                }
            }
            http::build_error_response(err.status())
        }
    }
}

/// Read the file `url_path` resolves to, together with its content type.
pub async fn load(
    root: &Path,
    url_path: &str,
    index: &str,
) -> Result<(Vec<u8>, &'static str), ServeError> {
    let file_path = resolve(root, url_path, index)?;
    let content = fs::read(&file_path)
        .await
        .map_err(ServeError::from_read_error)?;
    let content_type = mime::content_type(file_path.extension().and_then(|e| e.to_str()));
    Ok((content, content_type))
}

/// Map a URL path to a regular file under `root`.
///
/// `/` maps to the index file. Directories and missing paths are
/// `NotFound`; anything that would resolve outside the root is
/// `Traversal`.
pub fn resolve(root: &Path, url_path: &str, index: &str) -> Result<PathBuf, ServeError> {
    let relative = url_path.trim_start_matches('/');
    let relative = if relative.is_empty() { index } else { relative };

    // Only plain segments are acceptable: no "..", no "." and no
    // absolute/prefix components smuggled in.
    let rel_path = Path::new(relative);
    if rel_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ServeError::Traversal);
    }

    let root_canonical = root.canonicalize().map_err(ServeError::from_read_error)?;
    let candidate = root_canonical.join(rel_path);

    // Canonicalize resolves symlinks; a missing file fails here and is an
    // ordinary 404.
    let canonical = candidate.canonicalize().map_err(|_| ServeError::NotFound)?;
    if !canonical.starts_with(&root_canonical) {
        return Err(ServeError::Traversal);
    }
    if !canonical.is_file() {
        return Err(ServeError::NotFound);
    }

    Ok(canonical)
}
