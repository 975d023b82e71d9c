//! Single predicates over a callee signature.

use ranger_ir::{Name, QualifiedName, Signature};
use ranger_types::TypeOracle;

use crate::ClassSet;

/// How a callee's qualified name is compared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameRestriction {
    /// The whole qualified name must be equal.
    Exact(QualifiedName),
    /// Only the last segment must be equal (member functions declared on
    /// several classes share a short name but not a qualified one).
    LastSegment(Name),
}

impl NameRestriction {
    #[inline]
    pub fn holds(&self, name: &QualifiedName) -> bool {
        match self {
            NameRestriction::Exact(expected) => name == expected,
            NameRestriction::LastSegment(expected) => name.last() == Some(*expected),
        }
    }
}

/// A pure predicate over a [`Signature`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Restriction {
    Name(NameRestriction),
    /// Exact number of value parameters.
    ParamCount(usize),
    /// The `index`-th value parameter exists and its class is in `classes`.
    Param { index: usize, classes: ClassSet },
    /// A dispatch receiver exists and its class is in the set.
    DispatchReceiver(ClassSet),
    /// An extension receiver exists and its class is in the set.
    ExtensionReceiver(ClassSet),
}

impl Restriction {
    pub fn holds<T: TypeOracle + ?Sized>(&self, signature: &Signature, types: &T) -> bool {
        match self {
            Restriction::Name(name) => name.holds(&signature.name),
            Restriction::ParamCount(count) => signature.params.len() == *count,
            Restriction::Param { index, classes } => signature
                .params
                .get(*index)
                .is_some_and(|param| classes.admits(param.ty, types)),
            Restriction::DispatchReceiver(classes) => signature
                .dispatch_receiver
                .is_some_and(|ty| classes.admits(ty, types)),
            Restriction::ExtensionReceiver(classes) => signature
                .extension_receiver
                .is_some_and(|ty| classes.admits(ty, types)),
        }
    }
}
