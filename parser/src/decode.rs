//! Stateless value decoders for option operands.
//!
//! Each decoder turns one token into a typed value or fails with the matching
//! [`IntentError`] variant carrying the offending text.

use launch_intent_core::{ComponentName, ExtraValue, IntentError, Uri};

use crate::options::ExtraKind;

/// Decodes a 32-bit integer.
///
/// Accepts an optional sign followed by `0x`/`0X`/`#` hexadecimal digits,
/// `0`-prefixed octal digits, or decimal digits.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::decode::decode_int;
///
/// assert_eq!(decode_int("42").unwrap(), 42);
/// assert_eq!(decode_int("0x1F").unwrap(), 31);
/// assert_eq!(decode_int("-#10").unwrap(), -16);
/// assert_eq!(decode_int("010").unwrap(), 8);
/// assert!(decode_int("12abc").is_err());
/// ```
pub fn decode_int(raw: &str) -> Result<i32, IntentError> {
    let malformed = || IntentError::MalformedNumber(raw.to_string());

    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || digits.starts_with(['-', '+']) {
        return Err(malformed());
    }

    let magnitude = i64::from_str_radix(digits, radix).map_err(|_| malformed())?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| malformed())
}

/// Decodes a flags word.
///
/// Same grammar as [`decode_int`]; hexadecimal values up to `0xFFFFFFFF` are
/// also accepted so that every bit pattern can be written out and read back.
pub fn decode_flags(raw: &str) -> Result<u32, IntentError> {
    if let Ok(value) = decode_int(raw) {
        return Ok(value as u32);
    }
    let hex = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .or_else(|| raw.strip_prefix('#'))
        .filter(|digits| !digits.starts_with(['-', '+']))
        .ok_or_else(|| IntentError::MalformedNumber(raw.to_string()))?;
    u32::from_str_radix(hex, 16).map_err(|_| IntentError::MalformedNumber(raw.to_string()))
}

/// Decodes a signed decimal 64-bit integer.
pub fn decode_long(raw: &str) -> Result<i64, IntentError> {
    raw.parse::<i64>()
        .map_err(|_| IntentError::MalformedNumber(raw.to_string()))
}

/// Decodes a 32-bit float; surrounding whitespace and an `f`/`d` suffix are
/// allowed.
pub fn decode_float(raw: &str) -> Result<f32, IntentError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f32>() {
        return Ok(value);
    }
    trimmed
        .strip_suffix(['f', 'F', 'd', 'D'])
        .and_then(|rest| rest.parse::<f32>().ok())
        .ok_or_else(|| IntentError::MalformedNumber(raw.to_string()))
}

/// Decodes a boolean.
///
/// Case-insensitive `true`/`t` and `false`/`f`; anything else is decoded as
/// an integer where nonzero means `true`.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::decode::decode_bool;
///
/// assert!(decode_bool("T").unwrap());
/// assert!(!decode_bool("false").unwrap());
/// assert!(decode_bool("0x2").unwrap());
/// assert!(!decode_bool("0").unwrap());
/// assert!(decode_bool("maybe").is_err());
/// ```
pub fn decode_bool(raw: &str) -> Result<bool, IntentError> {
    let lowered = raw.to_lowercase();
    match lowered.as_str() {
        "true" | "t" => Ok(true),
        "false" | "f" => Ok(false),
        other => decode_int(other)
            .map(|value| value != 0)
            .map_err(|_| IntentError::MalformedBoolean(raw.to_string())),
    }
}

/// Splits a comma-separated list.
///
/// A comma directly preceded by a backslash does not split, and the backslash
/// stays in the element. Trailing empty elements are dropped unless the input
/// contains no separator at all.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::decode::split_list;
///
/// assert_eq!(split_list(r"a,b\,c"), vec!["a", r"b\,c"]);
/// assert_eq!(split_list("1,2,,"), vec!["1", "2"]);
/// assert_eq!(split_list(""), vec![""]);
/// ```
pub fn split_list(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev = None;

    for (idx, ch) in raw.char_indices() {
        if ch == ',' && prev != Some('\\') {
            parts.push(&raw[start..idx]);
            start = idx + 1;
        }
        prev = Some(ch);
    }
    parts.push(&raw[start..]);

    if parts.len() > 1 {
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
    }
    parts
}

fn decode_list<T>(
    raw: &str,
    decode: impl Fn(&str) -> Result<T, IntentError>,
) -> Result<Vec<T>, IntentError> {
    split_list(raw).into_iter().map(decode).collect()
}

/// Decodes a component reference (`package/class`).
pub fn decode_component(raw: &str) -> Result<ComponentName, IntentError> {
    ComponentName::unflatten(raw)
}

/// Decodes a URI reference.
pub fn decode_uri(raw: &str) -> Result<Uri, IntentError> {
    Uri::parse(raw)
}

/// Decodes the value operand of a typed extra.
///
/// [`ExtraKind::Null`] takes no operand and is handled by the caller.
pub fn decode_extra(kind: ExtraKind, raw: &str) -> Result<ExtraValue, IntentError> {
    let value = match kind {
        ExtraKind::Null => ExtraValue::Null,
        ExtraKind::String => ExtraValue::String(raw.to_string()),
        ExtraKind::Int => ExtraValue::Int(decode_int(raw)?),
        ExtraKind::Long => ExtraValue::Long(decode_long(raw)?),
        ExtraKind::Float => ExtraValue::Float(decode_float(raw)?),
        ExtraKind::Bool => ExtraValue::Bool(decode_bool(raw)?),
        ExtraKind::Uri => ExtraValue::Uri(decode_uri(raw)?),
        ExtraKind::Component => ExtraValue::Component(decode_component(raw)?),
        ExtraKind::IntList(kind) => ExtraValue::IntList {
            values: decode_list(raw, decode_int)?,
            kind,
        },
        ExtraKind::LongList(kind) => ExtraValue::LongList {
            values: decode_list(raw, decode_long)?,
            kind,
        },
        ExtraKind::FloatList(kind) => ExtraValue::FloatList {
            values: decode_list(raw, decode_float)?,
            kind,
        },
        ExtraKind::StringList(kind) => ExtraValue::StringList {
            values: split_list(raw).into_iter().map(String::from).collect(),
            kind,
        },
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use launch_intent_core::ListKind;

    use super::*;

    #[test]
    fn test_decode_int_radixes() {
        assert_eq!(decode_int("0").unwrap(), 0);
        assert_eq!(decode_int("+7").unwrap(), 7);
        assert_eq!(decode_int("0X10").unwrap(), 16);
        assert_eq!(decode_int("#ff").unwrap(), 255);
        assert_eq!(decode_int("017").unwrap(), 15);
        assert_eq!(decode_int("-2147483648").unwrap(), i32::MIN);
    }

    #[test]
    fn test_decode_int_rejects_garbage() {
        for raw in ["", "-", "0x", "0x-1", "--1", "08", "2147483648", "1.5", " 1"] {
            assert_eq!(
                decode_int(raw),
                Err(IntentError::MalformedNumber(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_flags_accepts_full_word() {
        assert_eq!(decode_flags("0x10000000").unwrap(), 0x1000_0000);
        assert_eq!(decode_flags("0x80000000").unwrap(), 0x8000_0000);
        assert_eq!(decode_flags("-1").unwrap(), u32::MAX);
        assert!(decode_flags("0x100000000").is_err());
        assert!(decode_flags("nope").is_err());
    }

    #[test]
    fn test_decode_long_and_float() {
        assert_eq!(decode_long("-9000000000").unwrap(), -9_000_000_000);
        assert!(decode_long("0x10").is_err());
        assert_eq!(decode_float("1.5").unwrap(), 1.5);
        assert_eq!(decode_float(" 2.5f ").unwrap(), 2.5);
        assert_eq!(decode_float("3d").unwrap(), 3.0);
        assert!(decode_float("abc").is_err());
    }

    #[test]
    fn test_decode_bool_forms() {
        for raw in ["true", "t", "TRUE", "T", "1", "-3"] {
            assert_eq!(decode_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["false", "F", "0", "0x0"] {
            assert_eq!(decode_bool(raw), Ok(false), "{raw}");
        }
        assert_eq!(
            decode_bool("maybe"),
            Err(IntentError::MalformedBoolean("maybe".to_string()))
        );
    }

    #[test]
    fn test_split_list_edge_cases() {
        assert_eq!(split_list("a"), vec!["a"]);
        assert_eq!(split_list(",a"), vec!["", "a"]);
        assert!(split_list(",").is_empty());
        assert_eq!(split_list(r"x\,"), vec![r"x\,"]);
    }

    #[test]
    fn test_decode_int_list_with_hex() {
        let value = decode_extra(ExtraKind::IntList(ListKind::Array), "1,2,0x3").unwrap();
        assert_eq!(
            value,
            ExtraValue::IntList {
                values: vec![1, 2, 3],
                kind: ListKind::Array
            }
        );
    }

    #[test]
    fn test_decode_list_reports_bad_element() {
        assert_eq!(
            decode_extra(ExtraKind::LongList(ListKind::ArrayList), "1,x"),
            Err(IntentError::MalformedNumber("x".to_string()))
        );
    }

    #[test]
    fn test_decode_string_list_keeps_escape() {
        let value =
            decode_extra(ExtraKind::StringList(ListKind::Array), r"a,b\,c").unwrap();
        assert_eq!(
            value,
            ExtraValue::StringList {
                values: vec!["a".to_string(), r"b\,c".to_string()],
                kind: ListKind::Array
            }
        );
    }

    #[test]
    fn test_decode_component_and_uri_errors() {
        assert_eq!(
            decode_extra(ExtraKind::Component, "nopkg"),
            Err(IntentError::BadComponentName("nopkg".to_string()))
        );
        assert!(matches!(
            decode_extra(ExtraKind::Uri, ""),
            Err(IntentError::MalformedUri(_))
        ));
    }
}
