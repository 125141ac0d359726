//! Flag value trait and the built-in string, integer and boolean values.

use std::any::Any;
use std::fmt;
use std::num::ParseIntError;

use crate::error::ValueError;

/// A settable, stringable flag value.
///
/// `Display` is the value's current string form; `set` replaces it from a
/// command-line or environment string.
pub trait FlagValue: fmt::Display + fmt::Debug {
    fn set(&mut self, input: &str) -> Result<(), ValueError>;

    /// Bool flags may appear on the command line without a value (`-debug`).
    fn is_bool_flag(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValue(pub String);

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FlagValue for StringValue {
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        self.0 = input.to_string();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntValue(pub i64);

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FlagValue for IntValue {
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        self.0 = parse_int(input).map_err(|source| ValueError::Int {
            input: input.to_string(),
            source,
        })?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolValue(pub bool);

impl fmt::Display for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FlagValue for BoolValue {
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        self.0 = parse_bool(input).ok_or_else(|| ValueError::Bool(input.to_string()))?;
        Ok(())
    }

    fn is_bool_flag(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Parses a signed integer, honoring `0x`, `0o`, `0b` and leading-zero octal prefixes.
pub fn parse_int(input: &str) -> Result<i64, ParseIntError> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (radix, digits) = if let Some(d) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (8, d)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (2, d)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    // A second sign after the prefix is never valid; let the decimal parser reject it.
    if digits.starts_with(['+', '-']) {
        return input.parse::<i64>();
    }

    // Re-attach the sign before parsing so i64::MIN stays representable.
    if negative {
        i64::from_str_radix(&format!("-{digits}"), radix)
    } else {
        i64::from_str_radix(digits, radix)
    }
}

/// Accepts 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
