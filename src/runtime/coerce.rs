//! Conversions from matched path values to request field types.
//!
//! Every failure is a `400 Bad Request` [`GatewayError`].

use super::GatewayError;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use std::str::FromStr;

fn invalid(kind: &str, value: &str) -> GatewayError {
    GatewayError::bad_request(format!("invalid {kind} value {value:?}"))
}

fn parse<T: FromStr>(kind: &str, value: &str) -> Result<T, GatewayError> {
    value.trim().parse().map_err(|_| invalid(kind, value))
}

pub fn string(value: &str) -> Result<String, GatewayError> {
    Ok(value.to_string())
}

pub fn int32(value: &str) -> Result<i32, GatewayError> {
    parse("int32", value)
}

pub fn int64(value: &str) -> Result<i64, GatewayError> {
    parse("int64", value)
}

pub fn uint32(value: &str) -> Result<u32, GatewayError> {
    parse("uint32", value)
}

pub fn uint64(value: &str) -> Result<u64, GatewayError> {
    parse("uint64", value)
}

/// Accepts decimal forms plus `NaN`, `Infinity` and `-Infinity`.
pub fn double(value: &str) -> Result<f64, GatewayError> {
    match value.trim() {
        "NaN" => Ok(f64::NAN),
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => parse("double", value),
    }
}

pub fn float(value: &str) -> Result<f32, GatewayError> {
    match value.trim() {
        "NaN" => Ok(f32::NAN),
        "Infinity" => Ok(f32::INFINITY),
        "-Infinity" => Ok(f32::NEG_INFINITY),
        _ => parse("float", value),
    }
}

pub fn boolean(value: &str) -> Result<bool, GatewayError> {
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(invalid("bool", value)),
    }
}

/// Base64 in standard or URL-safe alphabet, padded or not.
pub fn bytes(value: &str) -> Result<Vec<u8>, GatewayError> {
    let value = value.trim();
    [STANDARD, URL_SAFE, STANDARD_NO_PAD, URL_SAFE_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(value).ok())
        .ok_or_else(|| invalid("bytes", value))
}

/// Enumerated value by symbol name (through `lookup`) or by number.
///
/// Generated code passes the enum's `from_str_name`.
pub fn enumeration<E, F>(value: &str, lookup: F) -> Result<i32, GatewayError>
where
    E: Into<i32>,
    F: Fn(&str) -> Option<E>,
{
    let value = value.trim();
    if let Some(symbol) = lookup(value) {
        return Ok(symbol.into());
    }
    value.parse::<i32>().map_err(|_| invalid("enum", value))
}

/// Largest magnitude of a well-known duration, about 10,000 years.
pub const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

/// Duration in the `<seconds>[.<fraction>]s` form (`"3s"`, `"-1.5s"`).
///
/// Returns `(seconds, nanos)` with both parts carrying the sign. A `.` must be
/// followed by one to nine digits, and `seconds` is bounded by
/// [`MAX_DURATION_SECONDS`].
pub fn duration(value: &str) -> Result<(i64, i32), GatewayError> {
    let err = || invalid("duration", value);
    let body = value.trim().strip_suffix('s').ok_or_else(err)?;
    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let (secs, frac) = match body.split_once('.') {
        Some((_, "")) => return Err(err()),
        Some((secs, frac)) => (secs, frac),
        None => (body, ""),
    };
    if secs.is_empty()
        || !secs.bytes().all(|b| b.is_ascii_digit())
        || frac.len() > 9
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(err());
    }
    let seconds: i64 = secs.parse().map_err(|_| err())?;
    if seconds > MAX_DURATION_SECONDS {
        return Err(err());
    }
    let nanos: i32 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<9}").parse().map_err(|_| err())?
    };
    if negative {
        Ok((-seconds, -nanos))
    } else {
        Ok((seconds, nanos))
    }
}

/// RFC 3339 timestamp; returns `(seconds, nanos)` since the Unix epoch.
pub fn timestamp(value: &str) -> Result<(i64, i32), GatewayError> {
    let parsed =
        chrono::DateTime::parse_from_rfc3339(value.trim()).map_err(|_| invalid("timestamp", value))?;
    let nanos = i32::try_from(parsed.timestamp_subsec_nanos()).map_err(|_| invalid("timestamp", value))?;
    Ok((parsed.timestamp(), nanos))
}
