//! Module for discovering the local machine's default address.
//!
//! Used by the topology fallback path only: when no valid topology is supplied,
//! the local machine becomes the single master.
mod functions;

pub use functions::*;
