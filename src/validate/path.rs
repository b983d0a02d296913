use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Location of a field inside the validated value. Renders as the segments
/// joined with `.`; indices are plain numbers and the root renders as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self { Self::default() }

    pub fn is_root(&self) -> bool { self.segments.is_empty() }

    pub fn segments(&self) -> &[PathSegment] { &self.segments }

    /// Human label for messages: `(root)` instead of an empty string.
    pub fn label(&self) -> String {
        if self.is_root() { "(root)".to_string() } else { self.to_string() }
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self { Self { segments } }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_keys_and_indices_with_dots() {
        let path = FieldPath::from(vec![
            PathSegment::Key("users".into()),
            PathSegment::Index(3),
            PathSegment::Key("zip".into()),
        ]);
        assert_eq!(path.to_string(), "users.3.zip");
        assert_eq!(path.label(), "users.3.zip");
    }

    #[test]
    fn root_renders_empty() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "");
        assert_eq!(root.label(), "(root)");
        assert!(root.is_root());
    }
}
