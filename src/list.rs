use crate::access::Env;
use crate::error::EnvError;
use crate::parser::Parser;
use crate::source::Source;

// Split on commas, trim each segment and parse it. Stops at the first bad segment.
fn parse_segments<T, P: Parser<T>>(key: &str, raw: &str, parser: &P) -> Result<Vec<T>, EnvError> {
    raw.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, element)| {
            parser
                .parse(element)
                .map_err(|reason| EnvError::InvalidElement {
                    key: key.to_string(),
                    index,
                    element: element.to_string(),
                    reason,
                })
        })
        .collect()
}

impl<S: Source> Env<S> {
    /// Parse a comma-separated variable into a list
    ///
    /// Returns the fallback if the variable is absent, or if any element
    /// fails to parse. Partial results are never returned and a malformed
    /// element never panics. An empty value is a single empty element.
    pub fn get_list<T, P: Parser<T>>(&self, key: &str, parser: P, fallback: Vec<T>) -> Vec<T> {
        let Some(raw) = self.lookup(key) else {
            tracing::debug!(key, "environment variable not set, using fallback");
            return fallback;
        };

        match parse_segments(key, &raw, &parser) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    key,
                    error = %e.reason(),
                    "invalid list element, falling back to default list"
                );
                fallback
            }
        }
    }

    /// Parse a comma-separated variable into a list, reporting the first bad element
    pub fn try_get_list<T, P: Parser<T>>(
        &self,
        key: &str,
        parser: P,
        fallback: Vec<T>,
    ) -> Result<Vec<T>, EnvError> {
        match self.lookup(key) {
            Some(raw) => parse_segments(key, &raw, &parser),
            None => Ok(fallback),
        }
    }
}

/// Parse a comma-separated process environment variable, see [`Env::get_list`]
///
/// # Example
/// ```rust
/// use env_loadr::{get_list, parsers};
///
/// let hosts = get_list("ENV_LOADR_DOC_HOSTS", parsers::identity, vec!["localhost".to_string()]);
/// assert_eq!(hosts, vec!["localhost".to_string()]);
/// ```
pub fn get_list<T, P: Parser<T>>(key: &str, parser: P, fallback: Vec<T>) -> Vec<T> {
    Env::process().get_list(key, parser, fallback)
}

/// Strict variant of [`get_list`], see [`Env::try_get_list`]
pub fn try_get_list<T, P: Parser<T>>(
    key: &str,
    parser: P,
    fallback: Vec<T>,
) -> Result<Vec<T>, EnvError> {
    Env::process().try_get_list(key, parser, fallback)
}
