//! Dotted, fully qualified callee names (`core.ranges.downTo`).

use std::fmt;

use smallvec::SmallVec;

use crate::{Name, StringInterner};

/// A fully qualified name as a sequence of interned path segments.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    segments: SmallVec<[Name; 4]>,
}

impl QualifiedName {
    pub fn new(segments: impl IntoIterator<Item = Name>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Intern every `.`-separated segment of `path`.
    ///
    /// An empty path yields the root name (no segments).
    pub fn parse(interner: &StringInterner, path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self::new(path.split('.').map(|segment| interner.intern(segment)))
    }

    #[inline]
    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    /// The short (unqualified) name.
    #[inline]
    pub fn last(&self) -> Option<Name> {
        self.segments.last().copied()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the dotted path.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> impl fmt::Display + 'a {
        QualifiedNameDisplay {
            name: self,
            interner,
        }
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QualifiedName")
            .field(&self.segments.as_slice())
            .finish()
    }
}

struct QualifiedNameDisplay<'a> {
    name: &'a QualifiedName,
    interner: &'a StringInterner,
}

impl fmt::Display for QualifiedNameDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.name.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(self.interner.lookup(*segment))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_splits_segments() {
        let interner = StringInterner::new();
        let name = QualifiedName::parse(&interner, "core.ranges.downTo");
        assert_eq!(name.segments().len(), 3);
        assert_eq!(name.last(), Some(interner.intern("downTo")));
        assert_eq!(name.display(&interner).to_string(), "core.ranges.downTo");
    }

    #[test]
    fn equal_paths_are_equal() {
        let interner = StringInterner::new();
        assert_eq!(
            QualifiedName::parse(&interner, "core.ranges.step"),
            QualifiedName::parse(&interner, "core.ranges.step"),
        );
        assert_ne!(
            QualifiedName::parse(&interner, "core.ranges.step"),
            QualifiedName::parse(&interner, "other.ranges.step"),
        );
    }

    #[test]
    fn empty_path_is_root() {
        let interner = StringInterner::new();
        let root = QualifiedName::parse(&interner, "");
        assert!(root.is_root());
        assert_eq!(root.last(), None);
    }
}
