//! Descriptor builders.
//!
//! Pure constructors; nothing is checked at build time. Options (`Config`)
//! are attached with `with_config` / `with_check` on the returned value.

use crate::descriptor::{Descriptor, Fields, Kind, ObjectDescriptor, ObjectShape};

pub fn string() -> Descriptor { Descriptor::from_kind(Kind::String) }

pub fn number() -> Descriptor { Descriptor::from_kind(Kind::Number) }

pub fn boolean() -> Descriptor { Descriptor::from_kind(Kind::Boolean) }

/// Sequence whose every element satisfies `element`. A check attached to the
/// result sees the whole array, not the elements.
pub fn array(element: impl Into<Descriptor>) -> Descriptor {
    Descriptor::from_kind(Kind::Array(element.into()))
}

/// Object with fields that must be present (`required`) and fields that may
/// be absent but must match when present (`optional`).
pub fn object(required: Fields, optional: Fields) -> ObjectDescriptor {
    ObjectDescriptor::from_shape(ObjectShape::new(required, optional))
}

/// Plain mapping: every field required.
pub fn shape(fields: Fields) -> ObjectDescriptor {
    object(fields, Fields::new())
}

/// Merge the fields of `a` and `b`; on a shared key `b` wins. Checks on the
/// operands are not carried over.
pub fn intersect(a: &ObjectDescriptor, b: &ObjectDescriptor) -> ObjectDescriptor {
    ObjectDescriptor::from_shape(ObjectShape::merge(a.shape(), b.shape()))
}
