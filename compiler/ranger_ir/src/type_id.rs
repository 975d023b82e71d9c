//! Type handle shared by the IR and the type pool.
//!
//! Builtin classes have fixed indices so passes can name them without a
//! pool lookup. The pool in `ranger_types` pre-interns them in exactly this
//! order; everything past [`TypeId::FIRST_DYNAMIC`] is allocated on demand.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Primitive classes ===
    pub const UNIT: Self = Self(0);
    pub const BOOLEAN: Self = Self(1);
    pub const BYTE: Self = Self(2);
    pub const SHORT: Self = Self(3);
    pub const INT: Self = Self(4);
    pub const LONG: Self = Self(5);
    pub const CHAR: Self = Self(6);
    pub const FLOAT: Self = Self(7);
    pub const DOUBLE: Self = Self(8);
    pub const STRING: Self = Self(9);

    // === Progression classes ===
    pub const INT_PROGRESSION: Self = Self(10);
    pub const LONG_PROGRESSION: Self = Self(11);
    pub const CHAR_PROGRESSION: Self = Self(12);
    /// `IntRange`, a subclass of `IntProgression`.
    pub const INT_RANGE: Self = Self(13);
    /// `LongRange`, a subclass of `LongProgression`.
    pub const LONG_RANGE: Self = Self(14);
    /// `CharRange`, a subclass of `CharProgression`.
    pub const CHAR_RANGE: Self = Self(15);

    // === Array classes ===
    pub const BYTE_ARRAY: Self = Self(16);
    pub const SHORT_ARRAY: Self = Self(17);
    pub const INT_ARRAY: Self = Self(18);
    pub const LONG_ARRAY: Self = Self(19);
    pub const CHAR_ARRAY: Self = Self(20);
    pub const BOOLEAN_ARRAY: Self = Self(21);
    pub const FLOAT_ARRAY: Self = Self(22);
    pub const DOUBLE_ARRAY: Self = Self(23);
    /// The generic `Array<T>` class; every `Array<T>` instance classifies as this.
    pub const ARRAY: Self = Self(24);

    /// Number of builtin classes pre-interned by the pool.
    pub const BUILTIN_COUNT: u32 = 25;

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = Self::BUILTIN_COUNT;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Primitive array classes, in declaration order.
    pub const PRIMITIVE_ARRAYS: [Self; 8] = [
        Self::BYTE_ARRAY,
        Self::SHORT_ARRAY,
        Self::INT_ARRAY,
        Self::LONG_ARRAY,
        Self::CHAR_ARRAY,
        Self::BOOLEAN_ARRAY,
        Self::FLOAT_ARRAY,
        Self::DOUBLE_ARRAY,
    ];

    /// Integer classes that can form a progression together with `CHAR`.
    pub const INTEGER_CLASSES: [Self; 4] = [Self::BYTE, Self::SHORT, Self::INT, Self::LONG];

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Human-readable name for builtin classes.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Unit"),
            1 => Some("Boolean"),
            2 => Some("Byte"),
            3 => Some("Short"),
            4 => Some("Int"),
            5 => Some("Long"),
            6 => Some("Char"),
            7 => Some("Float"),
            8 => Some("Double"),
            9 => Some("String"),
            10 => Some("IntProgression"),
            11 => Some("LongProgression"),
            12 => Some("CharProgression"),
            13 => Some("IntRange"),
            14 => Some("LongRange"),
            15 => Some("CharRange"),
            16 => Some("ByteArray"),
            17 => Some("ShortArray"),
            18 => Some("IntArray"),
            19 => Some("LongArray"),
            20 => Some("CharArray"),
            21 => Some("BooleanArray"),
            22 => Some("FloatArray"),
            23 => Some("DoubleArray"),
            24 => Some("Array"),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "TypeId({name})"),
            None if self.is_none() => write!(f, "TypeId::NONE"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

impl Default for TypeId {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_have_names() {
        for raw in 0..TypeId::BUILTIN_COUNT {
            let id = TypeId::from_raw(raw);
            assert!(id.is_builtin());
            assert!(id.name().is_some(), "builtin {raw} has no name");
        }
        assert_eq!(TypeId::from_raw(TypeId::FIRST_DYNAMIC).name(), None);
    }

    #[test]
    fn debug_formats() {
        assert_eq!(format!("{:?}", TypeId::INT_RANGE), "TypeId(IntRange)");
        assert_eq!(format!("{:?}", TypeId::NONE), "TypeId::NONE");
        assert_eq!(format!("{:?}", TypeId::from_raw(40)), "TypeId(40)");
    }
}
