use indexmap::IndexMap;

use super::{Check, Config, Descriptor, Kind};

// ------------------------------- Fields ---------------------------------- //

/// Field name → descriptor, in declaration order. Validation visits fields
/// in this order, so it decides which failure is reported first.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    map: IndexMap<String, Descriptor>,
}

impl Fields {
    pub fn new() -> Self { Self::default() }

    /// Add (or replace, keeping the original position) a field.
    pub fn field(mut self, name: impl Into<String>, descriptor: impl Into<Descriptor>) -> Self {
        self.map.insert(name.into(), descriptor.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> { self.map.get(name) }
    pub fn contains(&self, name: &str) -> bool { self.map.contains_key(name) }
    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Descriptor> {
        self.map.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

impl<K, D> FromIterator<(K, D)> for Fields
where
    K: Into<String>,
    D: Into<Descriptor>,
{
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        iter.into_iter().fold(Fields::new(), |acc, (k, d)| acc.field(k, d))
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Descriptor);
    type IntoIter = indexmap::map::Iter<'a, String, Descriptor>;

    fn into_iter(self) -> Self::IntoIter { self.map.iter() }
}

// ----------------------------- ObjectShape ------------------------------- //

/// Required and optional field maps. The two never share a key.
#[derive(Clone, Debug, Default)]
pub struct ObjectShape {
    required: Fields,
    optional: Fields,
}

impl ObjectShape {
    pub(crate) fn new(required: Fields, mut optional: Fields) -> Self {
        optional.map.retain(|key, _| {
            let clash = required.contains(key);
            if clash {
                tracing::warn!(
                    field = %key,
                    "field declared both required and optional; keeping the required entry"
                );
            }
            !clash
        });
        Self { required, optional }
    }

    pub fn required(&self) -> &Fields { &self.required }
    pub fn optional(&self) -> &Fields { &self.optional }

    /// Right-biased key-wise merge. A key that `b` declares moves to
    /// whichever side `b` put it on.
    pub(crate) fn merge(a: &Self, b: &Self) -> Self {
        let mut out = a.clone();
        for (k, d) in &b.required {
            out.optional.map.shift_remove(k);
            out.required.map.insert(k.clone(), d.clone());
        }
        for (k, d) in &b.optional {
            out.required.map.shift_remove(k);
            out.optional.map.insert(k.clone(), d.clone());
        }
        out
    }
}

// --------------------------- ObjectDescriptor ---------------------------- //

/// A [`Descriptor`] known to be of object kind. Only these can be intersected.
#[derive(Clone, Debug)]
pub struct ObjectDescriptor(Descriptor);

impl ObjectDescriptor {
    pub(crate) fn from_shape(shape: ObjectShape) -> Self {
        Self(Descriptor::from_kind(Kind::Object(shape)))
    }

    pub fn shape(&self) -> &ObjectShape {
        let Kind::Object(shape) = self.0.kind() else {
            unreachable!("ObjectDescriptor always wraps an object node")
        };
        shape
    }

    pub fn check(&self) -> Option<&Check> { self.0.check() }

    pub fn with_config(self, config: Config) -> Self {
        Self(self.0.with_config(config))
    }

    pub fn with_check(self, check: Check) -> Self {
        Self(self.0.with_check(check))
    }

    pub fn as_descriptor(&self) -> &Descriptor { &self.0 }
}

impl From<ObjectDescriptor> for Descriptor {
    fn from(value: ObjectDescriptor) -> Self { value.0 }
}

impl AsRef<Descriptor> for ObjectDescriptor {
    fn as_ref(&self) -> &Descriptor { &self.0 }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty;

    fn keys(fields: &Fields) -> Vec<&str> { fields.keys().collect() }

    #[test]
    fn fields_keep_declaration_order() {
        let fields = Fields::new()
            .field("z", ty::string())
            .field("a", ty::number())
            .field("m", ty::boolean());
        assert_eq!(keys(&fields), ["z", "a", "m"]);

        // replacing keeps the slot
        let fields = fields.field("z", ty::number());
        assert_eq!(keys(&fields), ["z", "a", "m"]);
        assert_eq!(fields.get("z").map(Descriptor::kind_name), Some("number"));
    }

    #[test]
    fn overlapping_keys_keep_required() {
        let shape = ObjectShape::new(
            Fields::new().field("id", ty::string()),
            Fields::new().field("id", ty::number()).field("note", ty::string()),
        );
        assert_eq!(keys(shape.required()), ["id"]);
        assert_eq!(keys(shape.optional()), ["note"]);
        assert_eq!(shape.required().get("id").map(Descriptor::kind_name), Some("string"));
    }

    #[test]
    fn merge_is_right_biased_and_disjoint() {
        let a = ObjectShape::new(
            Fields::new().field("x", ty::string()).field("y", ty::string()),
            Fields::new().field("z", ty::string()),
        );
        let b = ObjectShape::new(
            Fields::new().field("x", ty::number()).field("z", ty::number()),
            Fields::new().field("y", ty::boolean()),
        );
        let out = ObjectShape::merge(&a, &b);

        assert_eq!(keys(out.required()), ["x", "z"]);
        assert_eq!(keys(out.optional()), ["y"]);
        assert_eq!(out.required().get("x").map(Descriptor::kind_name), Some("number"));
        assert_eq!(out.required().get("z").map(Descriptor::kind_name), Some("number"));
        assert_eq!(out.optional().get("y").map(Descriptor::kind_name), Some("boolean"));
    }

    #[test]
    fn fields_collect_from_pairs() {
        let fields: Fields = [("a", ty::string()), ("b", ty::number())].into_iter().collect();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains("b"));
        assert!(!fields.is_empty());
    }
}
