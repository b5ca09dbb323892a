//! Request routing dispatch
//!
//! Entry point for HTTP request processing: validates the method, then
//! hands the URL path to the static file handler. Every request is
//! stateless; nothing carries over between requests.

use crate::config::Config;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    if config.logging.access_log {
        logger::log_request(method, uri, req.version());
    }

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    Ok(static_files::serve(path, is_head, &config).await)
}

/// Check HTTP method and return an early response for anything that is not
/// GET or HEAD.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
