//! Type kind tag.
//!
//! The tag determines how to interpret an item's `data` field.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Builtin primitive (`Int`, `Char`, ...). data: unused.
    Primitive = 0,
    /// Nominal class with declared supertypes. data: unused.
    Class = 1,
    /// Generic array instance `Array<T>`. data: element `TypeId`.
    Array = 2,
    /// Nullable view `T?`. data: inner `TypeId`.
    Nullable = 3,
}

impl Tag {
    /// Whether `data` holds a child `TypeId`.
    #[inline]
    pub const fn has_child(self) -> bool {
        matches!(self, Tag::Array | Tag::Nullable)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Primitive => "Primitive",
            Tag::Class => "Class",
            Tag::Array => "Array",
            Tag::Nullable => "Nullable",
        };
        f.write_str(name)
    }
}
