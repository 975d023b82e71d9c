//! Type construction helpers for the Pool.

use smallvec::SmallVec;

use crate::{Pool, Tag, TypeFlags, TypeId};

impl Pool {
    /// The nullable view `inner?`. Idempotent: `(T?)?` is `T?`.
    pub fn nullable(&mut self, inner: TypeId) -> TypeId {
        if self.tag(inner) == Tag::Nullable {
            return inner;
        }
        self.intern(Tag::Nullable, inner, TypeFlags::IS_NULLABLE)
    }

    /// The generic array instance `Array<elem>`.
    pub fn array(&mut self, elem: TypeId) -> TypeId {
        self.intern(Tag::Array, elem, TypeFlags::IS_ARRAY)
    }

    /// Declare a new nominal class deriving from `supertypes`.
    ///
    /// Classes are never deduplicated: two declarations are two classes.
    pub fn declare_class(&mut self, name: &str, supertypes: &[TypeId]) -> TypeId {
        let flags = supertypes
            .iter()
            .fold(TypeFlags::IS_CLASS, |acc, &sup| {
                acc | self.flags(sup).inherited()
            });
        let id = self.push_item(
            super::Item {
                tag: Tag::Class,
                data: 0,
            },
            flags,
            SmallVec::from_slice(supertypes),
        );
        self.class_names.insert(id, name.to_owned());
        id
    }
}
