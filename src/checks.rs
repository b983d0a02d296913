//! Stock checks for the constraints that come up over and over: string
//! pattern and literal sets, numeric bounds, lengths.
//!
//! Each one is an ordinary [`Check`]; attach it with `with_check`. A check
//! only runs once the base type matched, but every check here still rejects
//! values of a type it does not understand instead of passing them.

use regex::Regex;
use serde_json::Value;

use crate::descriptor::Check;
use crate::error::Error;
use crate::validate::type_of;

/// Strings matching `pattern` (unanchored, as `Regex::is_match`).
pub fn pattern(pattern: &str) -> Result<Check, Error> {
    let regex = Regex::new(pattern)?;
    Ok(Check::new(move |value| match value {
        Value::String(s) if regex.is_match(s) => Ok(()),
        Value::String(_) => Err(format!("Does not match pattern `{}`.", regex.as_str())),
        other => Err(expecting("string", other)),
    }))
}

/// Strings equal to one of `literals`.
pub fn one_of<I, S>(literals: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
    Check::new(move |value| match value {
        Value::String(s) if literals.iter().any(|l| l == s) => Ok(()),
        Value::String(s) => Err(format!(
            "Expecting one of [{}] but got \"{s}\".",
            literals.join(", "),
        )),
        other => Err(expecting("string", other)),
    })
}

/// Numbers within `[min, max]`; either bound may be left open.
pub fn range(min: Option<f64>, max: Option<f64>) -> Check {
    Check::new(move |value| {
        let Some(n) = value.as_f64() else {
            return Err(expecting("number", value));
        };
        if let Some(min) = min.filter(|min| n < *min) {
            return Err(format!("Expecting a number >= {min} but got {n}."));
        }
        if let Some(max) = max.filter(|max| n > *max) {
            return Err(format!("Expecting a number <= {max} but got {n}."));
        }
        Ok(())
    })
}

/// Numbers without a fractional part.
pub fn integer() -> Check {
    Check::new(|value| match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.fract() == 0.0) => Ok(()),
        Value::Number(n) => Err(format!("Expecting an integer but got {n}.")),
        other => Err(expecting("number", other)),
    })
}

/// String length (in chars) or array length within `[min, max]`.
pub fn length(min: Option<usize>, max: Option<usize>) -> Check {
    Check::new(move |value| {
        let len = match value {
            Value::String(s) => s.chars().count(),
            Value::Array(xs) => xs.len(),
            other => return Err(expecting("string or array", other)),
        };
        if let Some(min) = min.filter(|min| len < *min) {
            return Err(format!("Expecting length >= {min} but got {len}."));
        }
        if let Some(max) = max.filter(|max| len > *max) {
            return Err(format!("Expecting length <= {max} but got {len}."));
        }
        Ok(())
    })
}

/// Every check in order; the first rejection wins.
pub fn all<I>(checks: I) -> Check
where
    I: IntoIterator<Item = Check>,
{
    let checks: Vec<Check> = checks.into_iter().collect();
    Check::new(move |value| checks.iter().try_for_each(|c| c.run(value)))
}

fn expecting(expected: &str, found: &Value) -> String {
    format!("Expecting {expected} but got {}.", type_of(Some(found)))
}

// ------------------------------- Tests ------------------------------------ //
