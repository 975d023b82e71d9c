//! Type pool for the ranger progression recognizer.
//!
//! Every type is a [`TypeId`] into a [`Pool`]. Builtin classes
//! (primitives, progressions, arrays) are pre-interned at the fixed indices
//! declared on `TypeId`; generic array instances and nullable types are
//! interned on demand, and hosts may declare further nominal classes with
//! their own supertypes.
//!
//! Passes never touch the pool directly: they ask the narrow questions of
//! [`TypeOracle`] (subtyping, classifier, non-null view), which is the seam a
//! host compiler implements over its own type system.

mod flags;
mod oracle;
mod pool;
mod tag;

pub use flags::TypeFlags;
pub use oracle::TypeOracle;
pub use pool::Pool;
pub use ranger_ir::TypeId;
pub use tag::Tag;
