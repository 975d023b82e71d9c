//! Callee-signature matchers.
//!
//! A [`Restriction`] is one yes/no question about a callee's declared
//! signature: its qualified name, its parameter count, the class of one
//! parameter, or the presence and class of a receiver. A [`CallMatcher`]
//! is an ordered conjunction of restrictions and answers whether a call's
//! callee has a given shape, without looking at the call's arguments.
//!
//! Matchers only ever say yes or no. There are no partial matches and no
//! reasons; a caller that needs diagnostics needs a different tool.
//!
//! ```text
//! CallMatcher::new()
//!     .single_argument_extension(down_to, element_classes.clone())
//!     .param(0, element_classes)
//! ```

mod class_set;
mod matcher;
mod restriction;

pub use class_set::ClassSet;
pub use matcher::CallMatcher;
pub use restriction::{NameRestriction, Restriction};
