use crate::error::ParseError;

/// Converts a raw environment string into a typed value
///
/// Any `Fn(&str) -> Result<T, ParseError>` is a parser, so the functions in
/// [`parsers`] and plain closures can be passed to the accessors directly.
pub trait Parser<T> {
    fn parse(&self, raw: &str) -> Result<T, ParseError>;
}

impl<T, F> Parser<T> for F
where
    F: Fn(&str) -> Result<T, ParseError>,
{
    fn parse(&self, raw: &str) -> Result<T, ParseError> {
        self(raw)
    }
}

/// Catalog of parsers for the supported primitive types
pub mod parsers {
    use crate::duration::parse_duration;
    use crate::error::ParseError;
    use std::{fmt::Display, str::FromStr, time::Duration};

    /// Returns the input unchanged, never fails
    pub fn identity(raw: &str) -> Result<String, ParseError> {
        Ok(raw.to_string())
    }

    /// Platform-sized signed integer
    pub fn int(raw: &str) -> Result<isize, ParseError> {
        raw.parse()
            .map_err(|e| ParseError::new(format!("invalid integer {:?}: {}", raw, e)))
    }

    pub fn int64(raw: &str) -> Result<i64, ParseError> {
        raw.parse()
            .map_err(|e| ParseError::new(format!("invalid 64-bit integer {:?}: {}", raw, e)))
    }

    /// Decimal floats only. Literals that overflow `f64` fail rather than become infinite.
    pub fn float64(raw: &str) -> Result<f64, ParseError> {
        let value: f64 = raw
            .parse()
            .map_err(|e| ParseError::new(format!("invalid float {:?}: {}", raw, e)))?;
        if value.is_infinite() {
            let unsigned = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
            if unsigned != "inf" && unsigned != "infinity" {
                return Err(ParseError::new(format!("float {:?} out of range", raw)));
            }
        }
        Ok(value)
    }

    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
    pub fn boolean(raw: &str) -> Result<bool, ParseError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ParseError::new(format!("invalid boolean {:?}", raw))),
        }
    }

    /// See [`parse_duration`] for the accepted grammar
    pub fn duration(raw: &str) -> Result<Duration, ParseError> {
        parse_duration(raw)
    }

    /// Adapts any `FromStr` type into a parser
    ///
    /// ```rust
    /// use env_loadr::{parsers, Parser};
    ///
    /// let port = parsers::from_str::<u16>.parse("8080").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn from_str<T>(raw: &str) -> Result<T, ParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        raw.parse()
            .map_err(|e: T::Err| ParseError::new(format!("invalid value {:?}: {}", raw, e)))
    }
}
