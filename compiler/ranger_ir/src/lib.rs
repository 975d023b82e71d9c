//! Ranger IR - Intermediate Representation Types
//!
//! This crate contains the data structures the progression recognizer
//! operates on:
//! - Names for interned identifiers and qualified callee names
//! - Spans for source locations
//! - `TypeId` handles for the host type system
//! - Function signatures and the function table
//! - Arena allocation for expressions (constants, calls, composites)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No Box<Expr>, use ExprId(u32) indices
//! - **Relink, Never Copy**: passes refer to existing nodes by id; new nodes
//!   are appended to the arena, existing ones are never rewritten

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod expr;
mod function;
mod interner;
mod name;
mod qualified_name;
mod span;
mod type_id;

pub use arena::ExprArena;
pub use expr::{Call, ConstValue, Expr, ExprId, ExprKind, ExprRange};
pub use function::{FunctionId, FunctionTable, Param, Signature};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use qualified_name::QualifiedName;
pub use span::Span;
pub use type_id::TypeId;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, ExprRange, Name, Span, TypeId};
    static_assert_size!(Name, 4);
    static_assert_size!(TypeId, 4);
    static_assert_size!(ExprId, 4);
    static_assert_size!(ExprRange, 8);
    static_assert_size!(Span, 8);
}
