//! Typed environment variable accessors with fallback defaults.
//!
//! ```rust
//! use std::time::Duration;
//!
//! let port = env_loadr::get_int("ENV_LOADR_DOC_PORT", 8080);
//! let timeout = env_loadr::get_duration("ENV_LOADR_DOC_TIMEOUT", Duration::from_secs(30));
//!
//! assert_eq!(port, 8080);
//! assert_eq!(timeout, Duration::from_secs(30));
//! ```
//!
//! A missing variable resolves to the fallback. A scalar variable that is set
//! but malformed panics (`get_*`) or returns an [`EnvError`] (`try_get_*`).
//! A list with a malformed element resolves to its fallback.

pub mod access;
pub mod duration;
pub mod error;
pub mod list;
pub mod parser;
pub mod source;

// Re-export main types
pub use access::{
    Env, get_bool, get_duration, get_float64, get_int, get_int64, get_string, parse, try_get_bool,
    try_get_duration, try_get_float64, try_get_int, try_get_int64, try_parse,
};
pub use duration::parse_duration;
pub use error::{EnvError, ParseError};
pub use list::{get_list, try_get_list};
pub use parser::{Parser, parsers};
pub use source::{ProcessEnv, Source, lookup};
