use crate::error::ParseError;
use std::time::Duration;

// Largest accepted duration, about 292 years.
const MAX_NANOS: u128 = i64::MAX as u128;

// Fraction digits beyond this cannot change the result by a whole nanosecond.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse a unit-suffixed duration such as `300ms`, `1.5h` or `2h45m`
///
/// A duration is an optional sign followed by one or more decimal numbers,
/// each with an optional fraction and a unit suffix. Valid units are `ns`,
/// `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0` is accepted without a
/// unit. Negative values cannot be represented and fail unless they are zero.
pub fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    let invalid = || ParseError::new(format!("invalid duration {:?}", input));

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = rest.split_at(leading_digits(rest));
        let (fraction, after) = match after.strip_prefix('.') {
            Some(tail) => tail.split_at(leading_digits(tail)),
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(ParseError::new(format!(
                "missing unit in duration {:?}",
                input
            )));
        }
        let scale = unit_nanos(unit).ok_or_else(|| {
            ParseError::new(format!("unknown unit {:?} in duration {:?}", unit, input))
        })?;

        let mut value: u128 = 0;
        for digit in whole.bytes() {
            value = value * 10 + u128::from(digit - b'0');
            if value > MAX_NANOS {
                return Err(invalid());
            }
        }
        let mut nanos = value * scale;

        let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        if !fraction.is_empty() {
            let mut numerator: u128 = 0;
            for digit in fraction.bytes() {
                numerator = numerator * 10 + u128::from(digit - b'0');
            }
            let denominator = 10u128.pow(fraction.len() as u32);
            nanos += numerator * scale / denominator;
        }

        total += nanos;
        if total > MAX_NANOS {
            return Err(invalid());
        }
        rest = tail;
    }

    if negative && total != 0 {
        return Err(ParseError::new(format!(
            "negative duration {:?} is not supported",
            input
        )));
    }

    Ok(Duration::from_nanos(total as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_units() {
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3_600));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
        assert_eq!(parse_duration("7us").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7μs").unwrap(), Duration::from_micros(7));
    }

    #[test]
    fn test_compound() {
        assert_eq!(
            parse_duration("2h45m").unwrap(),
            Duration::from_secs(2 * 3_600 + 45 * 60)
        );
        assert_eq!(
            parse_duration("1m30s500ms").unwrap(),
            Duration::from_millis(90_500)
        );
    }

    #[test]
    fn test_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5_400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("5.s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("0.0000000019s").unwrap(), Duration::from_nanos(1));
    }

    #[test]
    fn test_zero_and_sign() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+3s").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_negative_rejected() {
        let err = parse_duration("-3s").unwrap_err();
        assert!(err.message().contains("negative"));
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", "-", "+", ".", "s", "1.2.3s", "2 s", "INVALID DURATION FORMAT"] {
            assert!(parse_duration(input).is_err(), "expected {:?} to fail", input);
        }
    }

    #[test]
    fn test_missing_unit() {
        let err = parse_duration("10").unwrap_err();
        assert!(err.message().contains("missing unit"));
    }

    #[test]
    fn test_unknown_unit() {
        let err = parse_duration("10d").unwrap_err();
        assert!(err.message().contains("unknown unit \"d\""));
    }

    #[test]
    fn test_overflow() {
        assert!(parse_duration("2562047h").is_ok());
        assert!(parse_duration("2562048h").is_err());
        assert!(parse_duration("99999999999999999999ns").is_err());
    }
}
