//! Filesystem-safe naming and path handling for strm-sync
//!
//! Provides normalized path handling, the name sanitizer that keeps
//! remote-supplied titles usable as path segments, and the naming-mode
//! policy that decides whether generated names may carry non-ASCII
//! characters.

pub mod error;
pub mod io;
pub mod naming;
pub mod path;
pub mod sanitize;

pub use error::{Error, Result};
pub use naming::{NamingMode, infer_ascii_mode};
pub use path::NormalizedPath;
pub use sanitize::{sanitize_name, sanitize_rel_path};
