//! The type queries recognizer passes are allowed to ask.

use crate::{Pool, Tag, TypeFlags, TypeId};

/// Read-only type facility.
///
/// Implemented by [`Pool`]; a host compiler with its own type system
/// implements it directly instead.
pub trait TypeOracle {
    /// Nominal subtyping: `sub` is `sup`, derives from it, or is a non-null
    /// value of a nullable `sup`.
    fn is_subtype_of(&self, sub: TypeId, sup: TypeId) -> bool;

    /// The class `ty` is an instance of.
    ///
    /// Nullable views classify as their inner class and every generic
    /// array instance classifies as [`TypeId::ARRAY`]. `None` for the
    /// `NONE` sentinel and for ids the facility does not know.
    fn classifier(&self, ty: TypeId) -> Option<TypeId>;

    /// `ty` with nullability stripped.
    fn make_not_null(&self, ty: TypeId) -> TypeId;
}

impl TypeOracle for Pool {
    fn is_subtype_of(&self, sub: TypeId, sup: TypeId) -> bool {
        if sub == sup {
            return true;
        }
        if !self.contains(sub) || !self.contains(sup) {
            return false;
        }

        match (self.tag(sub), self.tag(sup)) {
            (Tag::Nullable, Tag::Nullable) => match (self.child(sub), self.child(sup)) {
                (Some(inner_sub), Some(inner_sup)) => self.is_subtype_of(inner_sub, inner_sup),
                _ => false,
            },
            (Tag::Nullable, _) => false,
            (_, Tag::Nullable) => self
                .child(sup)
                .is_some_and(|inner| self.is_subtype_of(sub, inner)),
            // Arrays are invariant in their element; only the generic class is above them.
            (Tag::Array, _) => sup == TypeId::ARRAY,
            (_, Tag::Array) => false,
            _ => {
                // A progression class only has progression ancestors.
                if self.flags(sup).contains(TypeFlags::IS_PROGRESSION)
                    && !self.flags(sub).contains(TypeFlags::IS_PROGRESSION)
                {
                    return false;
                }
                self.derives_from(sub, sup)
            }
        }
    }

    fn classifier(&self, ty: TypeId) -> Option<TypeId> {
        if !self.contains(ty) {
            return None;
        }
        match self.tag(ty) {
            Tag::Primitive | Tag::Class => Some(ty),
            Tag::Array => Some(TypeId::ARRAY),
            Tag::Nullable => self.child(ty).and_then(|inner| self.classifier(inner)),
        }
    }

    fn make_not_null(&self, ty: TypeId) -> TypeId {
        if self.contains(ty) && self.tag(ty) == Tag::Nullable {
            self.child(ty).unwrap_or(ty)
        } else {
            ty
        }
    }
}

impl Pool {
    /// Walk the declared supertype graph from `sub` looking for `sup`.
    fn derives_from(&self, sub: TypeId, sup: TypeId) -> bool {
        let mut stack: Vec<TypeId> = self.supertypes(sub).to_vec();
        let mut seen = rustc_hash::FxHashSet::default();
        while let Some(ty) = stack.pop() {
            if ty == sup {
                return true;
            }
            if seen.insert(ty) {
                stack.extend_from_slice(self.supertypes(ty));
            }
        }
        false
    }
}
