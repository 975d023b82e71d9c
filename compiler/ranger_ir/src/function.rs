//! Callee signatures and the function table they live in.
//!
//! Signatures are written once when a function is declared and only read
//! afterwards; passes identify callees by [`FunctionId`].

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::arena::to_u32;
use crate::{Name, QualifiedName, TypeId};

/// Index into a [`FunctionTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FunctionId(u32);

impl FunctionId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionId({})", self.0)
    }
}

/// A declared value parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: TypeId,
}

/// Declared shape of a callee.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Signature {
    pub name: QualifiedName,
    pub params: SmallVec<[Param; 2]>,
    /// Receiver type of a member function.
    pub dispatch_receiver: Option<TypeId>,
    /// Receiver type of an extension function.
    pub extension_receiver: Option<TypeId>,
    pub return_type: TypeId,
}

impl Signature {
    /// A top-level function with no receivers and no parameters.
    pub fn new(name: QualifiedName, return_type: TypeId) -> Self {
        Self {
            name,
            params: SmallVec::new(),
            dispatch_receiver: None,
            extension_receiver: None,
            return_type,
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: Name, ty: TypeId) -> Self {
        self.params.push(Param { name, ty });
        self
    }

    #[must_use]
    pub fn with_dispatch_receiver(mut self, ty: TypeId) -> Self {
        self.dispatch_receiver = Some(ty);
        self
    }

    #[must_use]
    pub fn with_extension_receiver(mut self, ty: TypeId) -> Self {
        self.extension_receiver = Some(ty);
        self
    }
}

/// All declared functions, addressable by id or by qualified name.
///
/// Overloads share a qualified name, so name lookup returns every id.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    signatures: Vec<Signature>,
    by_name: FxHashMap<QualifiedName, SmallVec<[FunctionId; 2]>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, signature: Signature) -> FunctionId {
        let id = FunctionId::new(to_u32(self.signatures.len(), "functions"));
        self.by_name
            .entry(signature.name.clone())
            .or_default()
            .push(id);
        self.signatures.push(signature);
        id
    }

    #[inline]
    pub fn get(&self, id: FunctionId) -> &Signature {
        &self.signatures[id.index()]
    }

    /// Every overload declared under `name`, in declaration order.
    pub fn lookup(&self, name: &QualifiedName) -> &[FunctionId] {
        self.by_name
            .get(name)
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StringInterner;

    #[test]
    fn declare_and_lookup_overloads() {
        let interner = StringInterner::new();
        let name = QualifiedName::parse(&interner, "core.ranges.downTo");
        let mut table = FunctionTable::new();

        let int_overload = table.declare(
            Signature::new(name.clone(), TypeId::INT_PROGRESSION)
                .with_extension_receiver(TypeId::INT)
                .with_param(interner.intern("to"), TypeId::INT),
        );
        let long_overload = table.declare(
            Signature::new(name.clone(), TypeId::LONG_PROGRESSION)
                .with_extension_receiver(TypeId::LONG)
                .with_param(interner.intern("to"), TypeId::LONG),
        );

        assert_eq!(table.lookup(&name), &[int_overload, long_overload]);
        assert_eq!(table.get(long_overload).params[0].ty, TypeId::LONG);
        assert_eq!(table.get(int_overload).dispatch_receiver, None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unknown_name_has_no_overloads() {
        let interner = StringInterner::new();
        let table = FunctionTable::new();
        assert!(table.is_empty());
        assert!(table
            .lookup(&QualifiedName::parse(&interner, "nowhere"))
            .is_empty());
    }
}
