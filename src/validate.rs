//! Recursive validator.
//!
//! Walks a descriptor and a `serde_json::Value` in lockstep, depth-first,
//! fields in declaration order (required before optional), array elements in
//! index order. The first failure stops the walk and is the only one
//! reported.
//!
//! A field missing from its parent object is "absent" (`None`), which is not
//! the same as JSON `null`. Only absent values are excused by optionality; a
//! present value of the wrong type fails even on an optional field.
pub mod path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::descriptor::{Check, Descriptor, Kind, ObjectShape};

pub use path::{FieldPath, PathSegment};

pub const NOT_AN_ARRAY: &str = "Not an array";

// ------------------------------- Failure --------------------------------- //

/// First offending location and why it failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .path.label())]
pub struct Failure {
    pub path: FieldPath,
    pub message: String,
}

impl Failure {
    /// The `{ "<path>": "<message>" }` report form.
    pub fn to_report(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert(self.path.to_string(), Value::String(self.message.clone()));
        Value::Object(map)
    }
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.path.to_string(), &self.message)?;
        map.end()
    }
}

/// Run-time type tag of a (possibly absent) value, as used in messages.
pub fn type_of(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

// ------------------------------ Front API -------------------------------- //

/// Check `value` against `descriptor`. `Ok(())` when it conforms, otherwise
/// the first failure found.
pub fn validate(descriptor: &Descriptor, value: &Value) -> Result<(), Failure> {
    Walker::default().node(descriptor, Some(value), Presence::Required)
}

// -------------------------------- Walk ----------------------------------- //

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

#[derive(Clone, Copy, Debug)]
enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

#[derive(Default)]
struct Walker<'a> {
    trail: Vec<Step<'a>>,
}

impl<'a> Walker<'a> {
    fn node(
        &mut self,
        descriptor: &'a Descriptor,
        value: Option<&Value>,
        presence: Presence,
    ) -> Result<(), Failure> {
        if presence == Presence::Optional && value.is_none() {
            return Ok(());
        }
        match descriptor.kind() {
            Kind::Object(shape) => self.object(shape, descriptor.check(), value),
            Kind::Array(element) => self.array(element, descriptor.check(), value),
            kind => self.primitive(kind, descriptor.check(), value),
        }
    }

    fn object(
        &mut self,
        shape: &'a ObjectShape,
        check: Option<&Check>,
        value: Option<&Value>,
    ) -> Result<(), Failure> {
        let Some(obj) = value else {
            return Err(self.mismatch("object", value));
        };
        let Value::Object(map) = obj else {
            return Err(self.mismatch("object", value));
        };
        tracing::trace!(
            path = %self.path(),
            required = shape.required().len(),
            optional = shape.optional().len(),
            "validating object"
        );
        for (key, field) in shape.required() {
            self.descend(Step::Key(key), |w| w.node(field, map.get(key), Presence::Required))?;
        }
        for (key, field) in shape.optional() {
            self.descend(Step::Key(key), |w| w.node(field, map.get(key), Presence::Optional))?;
        }
        self.run_check(check, obj)
    }

    fn array(
        &mut self,
        element: &'a Descriptor,
        check: Option<&Check>,
        value: Option<&Value>,
    ) -> Result<(), Failure> {
        let Some(arr) = value else {
            return Err(self.fail(NOT_AN_ARRAY.to_string()));
        };
        let Value::Array(items) = arr else {
            return Err(self.fail(NOT_AN_ARRAY.to_string()));
        };
        self.run_check(check, arr)?;
        for (index, item) in items.iter().enumerate() {
            self.descend(Step::Index(index), |w| w.node(element, Some(item), Presence::Required))?;
        }
        Ok(())
    }

    fn primitive(
        &mut self,
        kind: &Kind,
        check: Option<&Check>,
        value: Option<&Value>,
    ) -> Result<(), Failure> {
        match value {
            Some(v) if matches_primitive(kind, v) => self.run_check(check, v),
            other => Err(self.mismatch(kind.name(), other)),
        }
    }

    fn descend<F>(&mut self, step: Step<'a>, f: F) -> Result<(), Failure>
    where
        F: FnOnce(&mut Self) -> Result<(), Failure>,
    {
        self.trail.push(step);
        let res = f(self);
        self.trail.pop();
        res
    }

    fn run_check(&self, check: Option<&Check>, value: &Value) -> Result<(), Failure> {
        match check {
            Some(check) => check.run(value).map_err(|message| self.fail(message)),
            None => Ok(()),
        }
    }

    fn mismatch(&self, expected: &str, found: Option<&Value>) -> Failure {
        self.fail(format!("Expecting {expected} but got {}.", type_of(found)))
    }

    fn fail(&self, message: String) -> Failure {
        let failure = Failure { path: self.path(), message };
        tracing::debug!(path = %failure.path, message = %failure.message, "validation failed");
        failure
    }

    fn path(&self) -> FieldPath {
        self.trail
            .iter()
            .map(|step| match step {
                Step::Key(k) => PathSegment::Key((*k).to_string()),
                Step::Index(i) => PathSegment::Index(*i),
            })
            .collect::<Vec<_>>()
            .into()
    }
}

fn matches_primitive(kind: &Kind, value: &Value) -> bool {
    matches!(
        (kind, value),
        (Kind::String, Value::String(_))
            | (Kind::Number, Value::Number(_))
            | (Kind::Boolean, Value::Bool(_))
    )
}

// ------------------------------- Tests ------------------------------------ //
