//! Sets of classes a type must belong to.

use rustc_hash::FxHashSet;

use ranger_ir::TypeId;
use ranger_types::TypeOracle;

/// A set of classes, tested against a type's classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: FxHashSet<TypeId>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: TypeId) -> bool {
        self.classes.insert(class)
    }

    #[inline]
    pub fn contains(&self, class: TypeId) -> bool {
        self.classes.contains(&class)
    }

    /// Whether the class of `ty` is in the set.
    ///
    /// `Int?` is admitted by `{Int}`, and `Array<String>` by `{Array}`.
    #[inline]
    pub fn admits<T: TypeOracle + ?Sized>(&self, ty: TypeId, types: &T) -> bool {
        types
            .classifier(ty)
            .is_some_and(|class| self.classes.contains(&class))
    }

    /// Union of two sets.
    #[must_use]
    pub fn union(&self, other: &ClassSet) -> ClassSet {
        self.classes.union(&other.classes).copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.classes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<TypeId> for ClassSet {
    fn from_iter<I: IntoIterator<Item = TypeId>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

impl Extend<TypeId> for ClassSet {
    fn extend<I: IntoIterator<Item = TypeId>>(&mut self, iter: I) {
        self.classes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ranger_types::Pool;

    use super::*;

    #[test]
    fn admits_by_classifier() {
        let mut pool = Pool::new();
        let nullable_int = pool.nullable(TypeId::INT);
        let strings = pool.array(TypeId::STRING);
        let set: ClassSet = [TypeId::INT, TypeId::ARRAY].into_iter().collect();

        assert!(set.admits(TypeId::INT, &pool));
        assert!(set.admits(nullable_int, &pool));
        assert!(set.admits(strings, &pool));
        assert!(!set.admits(TypeId::LONG, &pool));
        assert!(!set.admits(TypeId::NONE, &pool));
    }

    #[test]
    fn union_merges() {
        let ints: ClassSet = TypeId::INTEGER_CLASSES.into_iter().collect();
        let chars: ClassSet = std::iter::once(TypeId::CHAR).collect();
        let both = ints.union(&chars);
        assert_eq!(both.len(), 5);
        assert!(both.contains(TypeId::CHAR));
        assert!(both.contains(TypeId::BYTE));
    }

    #[test]
    fn insert_and_extend() {
        let mut set = ClassSet::new();
        assert!(set.is_empty());
        assert!(set.insert(TypeId::INT));
        assert!(!set.insert(TypeId::INT));
        set.extend([TypeId::LONG, TypeId::INT]);
        let mut members: Vec<_> = set.iter().collect();
        members.sort();
        assert_eq!(members, vec![TypeId::INT, TypeId::LONG]);
    }
}
