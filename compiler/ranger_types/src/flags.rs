//! Pre-computed type metadata flags.
//!
//! Computed once when a type enters the pool, so the hot "is this a
//! progression at all?" question is a bit test instead of a hierarchy walk.

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        /// Builtin primitive class.
        const IS_PRIMITIVE = 1 << 0;
        /// Nominal class (builtin or declared).
        const IS_CLASS = 1 << 1;
        /// Array class or generic array instance.
        const IS_ARRAY = 1 << 2;
        /// Nullable view of another type.
        const IS_NULLABLE = 1 << 3;
        /// A progression class or one of its subclasses.
        const IS_PROGRESSION = 1 << 4;
    }
}

impl TypeFlags {
    /// Flags a declared class inherits from one supertype.
    #[inline]
    pub fn inherited(self) -> Self {
        self & TypeFlags::IS_PROGRESSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_progression_is_inherited() {
        let flags = TypeFlags::IS_CLASS | TypeFlags::IS_ARRAY | TypeFlags::IS_PROGRESSION;
        assert_eq!(flags.inherited(), TypeFlags::IS_PROGRESSION);
        assert_eq!(TypeFlags::IS_PRIMITIVE.inherited(), TypeFlags::empty());
    }
}
