//! Request handler module
//!
//! Method validation, routing, and static file serving.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
