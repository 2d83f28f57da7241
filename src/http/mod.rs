//! HTTP protocol layer module
//!
//! Content-type lookup and response builders, decoupled from the asset
//! handler's business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_asset_response, build_not_found_page_response, build_not_found_response,
    build_server_error_response,
};
