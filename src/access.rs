use crate::error::EnvError;
use crate::parser::{Parser, parsers};
use crate::source::{ProcessEnv, Source};
use std::time::Duration;

/// Typed accessors over a [`Source`]
///
/// Scalar accessors come in two forms. `get_*` treats a present but
/// malformed value as a fatal configuration error and panics, `try_get_*`
/// returns the same failure as an [`EnvError`]. An absent key always
/// resolves to the fallback.
///
/// # Example
/// ```rust
/// use env_loadr::Env;
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("PORT".to_string(), "9090".to_string())]);
/// let env = Env::new(vars);
///
/// assert_eq!(env.get_int("PORT", 8080), 9090);
/// assert_eq!(env.get_string("HOST", "localhost"), "localhost");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<S = ProcessEnv> {
    source: S,
}

impl Env<ProcessEnv> {
    /// Accessors over the environment of the current process
    pub fn process() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: Source> Env<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn lookup(&self, key: &str) -> Option<String> {
        self.source.lookup(key)
    }

    /// Parse a variable, returning the fallback only if it is absent
    ///
    /// A present value that the parser rejects is returned as
    /// [`EnvError::InvalidValue`].
    pub fn try_parse<T, P: Parser<T>>(
        &self,
        key: &str,
        parser: P,
        fallback: T,
    ) -> Result<T, EnvError> {
        let Some(raw) = self.lookup(key) else {
            tracing::debug!(key, "environment variable not set, using fallback");
            return Ok(fallback);
        };

        parser.parse(&raw).map_err(|reason| EnvError::InvalidValue {
            key: key.to_string(),
            value: raw,
            reason,
        })
    }

    /// Parse a variable, returning the fallback only if it is absent
    ///
    /// # Panics
    ///
    /// Panics if the variable is set but cannot be parsed. Use
    /// [`Env::try_parse`] to handle the error instead.
    pub fn parse<T, P: Parser<T>>(&self, key: &str, parser: P, fallback: T) -> T {
        match self.try_parse(key, parser, fallback) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e.reason(), "malformed environment variable");
                panic!("{}", e);
            }
        }
    }

    pub fn get_string(&self, key: &str, fallback: impl Into<String>) -> String {
        self.parse(key, parsers::identity, fallback.into())
    }

    pub fn get_int(&self, key: &str, fallback: isize) -> isize {
        self.parse(key, parsers::int, fallback)
    }

    pub fn get_int64(&self, key: &str, fallback: i64) -> i64 {
        self.parse(key, parsers::int64, fallback)
    }

    pub fn get_float64(&self, key: &str, fallback: f64) -> f64 {
        self.parse(key, parsers::float64, fallback)
    }

    pub fn get_duration(&self, key: &str, fallback: Duration) -> Duration {
        self.parse(key, parsers::duration, fallback)
    }

    pub fn get_bool(&self, key: &str, fallback: bool) -> bool {
        self.parse(key, parsers::boolean, fallback)
    }

    pub fn try_get_int(&self, key: &str, fallback: isize) -> Result<isize, EnvError> {
        self.try_parse(key, parsers::int, fallback)
    }

    pub fn try_get_int64(&self, key: &str, fallback: i64) -> Result<i64, EnvError> {
        self.try_parse(key, parsers::int64, fallback)
    }

    pub fn try_get_float64(&self, key: &str, fallback: f64) -> Result<f64, EnvError> {
        self.try_parse(key, parsers::float64, fallback)
    }

    pub fn try_get_duration(&self, key: &str, fallback: Duration) -> Result<Duration, EnvError> {
        self.try_parse(key, parsers::duration, fallback)
    }

    pub fn try_get_bool(&self, key: &str, fallback: bool) -> Result<bool, EnvError> {
        self.try_parse(key, parsers::boolean, fallback)
    }
}

/// Look up `key` in the process environment and parse it, see [`Env::try_parse`]
pub fn try_parse<T, P: Parser<T>>(key: &str, parser: P, fallback: T) -> Result<T, EnvError> {
    Env::process().try_parse(key, parser, fallback)
}

/// Look up `key` in the process environment and parse it, panicking if malformed
pub fn parse<T, P: Parser<T>>(key: &str, parser: P, fallback: T) -> T {
    Env::process().parse(key, parser, fallback)
}

/// Returns the variable if set, otherwise the fallback
pub fn get_string(key: &str, fallback: impl Into<String>) -> String {
    Env::process().get_string(key, fallback)
}

/// Returns the variable as an integer if set, otherwise the fallback. Panics if malformed.
pub fn get_int(key: &str, fallback: isize) -> isize {
    Env::process().get_int(key, fallback)
}

/// Returns the variable as an `i64` if set, otherwise the fallback. Panics if malformed.
pub fn get_int64(key: &str, fallback: i64) -> i64 {
    Env::process().get_int64(key, fallback)
}

/// Returns the variable as an `f64` if set, otherwise the fallback. Panics if malformed.
pub fn get_float64(key: &str, fallback: f64) -> f64 {
    Env::process().get_float64(key, fallback)
}

/// Returns the variable as a duration (e.g. `300ms`, `2h45m`) if set, otherwise the fallback.
/// Panics if malformed.
pub fn get_duration(key: &str, fallback: Duration) -> Duration {
    Env::process().get_duration(key, fallback)
}

/// Returns the variable as a boolean if set, otherwise the fallback. Panics if malformed.
pub fn get_bool(key: &str, fallback: bool) -> bool {
    Env::process().get_bool(key, fallback)
}

pub fn try_get_int(key: &str, fallback: isize) -> Result<isize, EnvError> {
    Env::process().try_get_int(key, fallback)
}

pub fn try_get_int64(key: &str, fallback: i64) -> Result<i64, EnvError> {
    Env::process().try_get_int64(key, fallback)
}

pub fn try_get_float64(key: &str, fallback: f64) -> Result<f64, EnvError> {
    Env::process().try_get_float64(key, fallback)
}

pub fn try_get_duration(key: &str, fallback: Duration) -> Result<Duration, EnvError> {
    Env::process().try_get_duration(key, fallback)
}

pub fn try_get_bool(key: &str, fallback: bool) -> Result<bool, EnvError> {
    Env::process().try_get_bool(key, fallback)
}
