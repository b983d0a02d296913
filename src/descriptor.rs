//! Immutable shape descriptors.
//!
//! A descriptor is a tagged node (`Kind`) plus an optional user `Check`.
//! Nodes sit behind an `Arc`: any sub-descriptor may be reused by several
//! parents and read from several threads at once. Nothing mutates a node
//! once a second handle to it exists (`with_config` copies on write), and a
//! descriptor can only point at descriptors built before it, so trees are
//! acyclic by construction.
pub mod object;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

pub use object::{Fields, ObjectDescriptor, ObjectShape};

// -------------------------------- Check ---------------------------------- //

type CheckFn = dyn Fn(&Value) -> Result<(), String> + Send + Sync;

/// Extra predicate run once the base shape check has passed.
/// `Ok(())` accepts, `Err(message)` rejects and `message` becomes the failure text.
#[derive(Clone)]
pub struct Check(Arc<CheckFn>);

impl Check {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn run(&self, value: &Value) -> Result<(), String> {
        (self.0)(value)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

// ------------------------------- Config ---------------------------------- //

/// Options accepted by every descriptor builder. Absent `check` means
/// "no extra predicate".
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub check: Option<Check>,
}

impl Config {
    pub fn new() -> Self { Self::default() }

    pub fn check(mut self, check: Check) -> Self {
        self.check = Some(check);
        self
    }
}

// -------------------------------- Kind ----------------------------------- //

#[derive(Clone, Debug)]
pub enum Kind {
    String,
    Number,
    Boolean,
    Array(Descriptor),   // every element must satisfy this
    Object(ObjectShape),
}

impl Kind {
    /// Tag used in failure messages (`Expecting <name> but got ...`).
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Array(_) => "array",
            Kind::Object(_) => "object",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Kind::String | Kind::Number | Kind::Boolean)
    }
}

// ----------------------------- Descriptor -------------------------------- //

#[derive(Clone, Debug)]
struct Node {
    kind: Kind,
    check: Option<Check>,
}

/// Cheap-to-clone handle to an immutable descriptor node.
///
/// Obtain one through the builders in [`crate::ty`]; there is no other way to
/// construct a descriptor.
#[derive(Clone, Debug)]
pub struct Descriptor {
    node: Arc<Node>,
}

impl Descriptor {
    pub(crate) fn from_kind(kind: Kind) -> Self {
        Self { node: Arc::new(Node { kind, check: None }) }
    }

    pub fn kind(&self) -> &Kind { &self.node.kind }

    pub fn kind_name(&self) -> &'static str { self.node.kind.name() }

    pub fn check(&self) -> Option<&Check> { self.node.check.as_ref() }

    pub fn as_object(&self) -> Option<&ObjectShape> {
        match &self.node.kind {
            Kind::Object(shape) => Some(shape),
            _ => None,
        }
    }

    /// Attach builder options. Handles already shared elsewhere keep seeing
    /// the old node.
    pub fn with_config(mut self, config: Config) -> Self {
        Arc::make_mut(&mut self.node).check = config.check;
        self
    }

    pub fn with_check(self, check: Check) -> Self {
        self.with_config(Config::new().check(check))
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Descriptor) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

// ------------------------------- Tests ------------------------------------ //
