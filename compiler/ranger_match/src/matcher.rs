//! Conjunctions of restrictions.

use smallvec::SmallVec;

use ranger_ir::{Call, FunctionTable, Name, QualifiedName, Signature};
use ranger_types::TypeOracle;

use crate::{ClassSet, NameRestriction, Restriction};

/// Matches a callee iff every restriction holds.
///
/// Restrictions are checked in insertion order and evaluation stops at the
/// first one that fails. They have no side effects, so order only affects
/// how early a mismatch is noticed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallMatcher {
    restrictions: SmallVec<[Restriction; 4]>,
}

impl CallMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, restriction: Restriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    #[must_use]
    pub fn fq_name(self, name: QualifiedName) -> Self {
        self.with(Restriction::Name(NameRestriction::Exact(name)))
    }

    #[must_use]
    pub fn last_segment(self, name: Name) -> Self {
        self.with(Restriction::Name(NameRestriction::LastSegment(name)))
    }

    #[must_use]
    pub fn param_count(self, count: usize) -> Self {
        self.with(Restriction::ParamCount(count))
    }

    #[must_use]
    pub fn param(self, index: usize, classes: ClassSet) -> Self {
        self.with(Restriction::Param { index, classes })
    }

    #[must_use]
    pub fn dispatch_receiver(self, classes: ClassSet) -> Self {
        self.with(Restriction::DispatchReceiver(classes))
    }

    #[must_use]
    pub fn extension_receiver(self, classes: ClassSet) -> Self {
        self.with(Restriction::ExtensionReceiver(classes))
    }

    /// An extension function called `name` on a receiver in `classes`,
    /// taking exactly one value parameter.
    #[must_use]
    pub fn single_argument_extension(self, name: QualifiedName, classes: ClassSet) -> Self {
        self.extension_receiver(classes)
            .param_count(1)
            .fq_name(name)
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    pub fn matches<T: TypeOracle + ?Sized>(&self, signature: &Signature, types: &T) -> bool {
        self.restrictions
            .iter()
            .all(|restriction| restriction.holds(signature, types))
    }

    /// Test the signature of `call`'s callee.
    pub fn matches_call<T: TypeOracle + ?Sized>(
        &self,
        call: &Call,
        functions: &FunctionTable,
        types: &T,
    ) -> bool {
        self.matches(functions.get(call.callee), types)
    }
}
