//! TorrServer HTTP client for strm-sync
//!
//! Speaks the one slice of the TorrServer API this tool needs: the
//! `POST /torrents {"action":"list"}` listing call. Failures here are
//! expected to abort only the current reconciliation pass, never the
//! process.

pub mod client;
pub mod error;

pub use client::{BasicAuth, TorrServerClient};
pub use error::{Error, Result};
