//! Request handler module
//!
//! Responsible for request dispatch and static asset serving.

pub mod assets;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
