//! HTTP protocol helpers
//!
//! MIME mapping and response builders, decoupled from the file-serving
//! logic so the handlers stay small.

pub mod mime;
pub mod response;

pub use response::{
    build_405_response, build_error_response, build_file_response, build_options_response,
};
