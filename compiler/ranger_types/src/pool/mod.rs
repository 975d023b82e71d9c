//! The type pool.
//!
//! Parallel arrays indexed by `TypeId`: one `Item` (tag + data), one
//! `TypeFlags`, and one supertype list per type. Structural types (arrays,
//! nullable views) are deduplicated so equal types share one id.

mod construct;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Tag, TypeFlags, TypeId};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
struct Item {
    tag: Tag,
    data: u32,
}

#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    supertypes: Vec<SmallVec<[TypeId; 2]>>,
    /// Structural dedup for `Array` and `Nullable` items.
    dedup: FxHashMap<Item, TypeId>,
    /// Display names of host-declared classes.
    class_names: FxHashMap<TypeId, String>,
}

impl Pool {
    /// Create a pool with every builtin class at its fixed index.
    pub fn new() -> Self {
        let mut pool = Self {
            items: Vec::with_capacity(TypeId::BUILTIN_COUNT as usize * 2),
            flags: Vec::with_capacity(TypeId::BUILTIN_COUNT as usize * 2),
            supertypes: Vec::with_capacity(TypeId::BUILTIN_COUNT as usize * 2),
            dedup: FxHashMap::default(),
            class_names: FxHashMap::default(),
        };

        for raw in 0..TypeId::BUILTIN_COUNT {
            let id = TypeId::from_raw(raw);
            let (tag, flags, supers) = Self::builtin_shape(id);
            let pushed = pool.push_item(Item { tag, data: 0 }, flags, supers);
            debug_assert_eq!(pushed, id, "builtin pre-interned out of order");
        }

        pool
    }

    fn builtin_shape(id: TypeId) -> (Tag, TypeFlags, SmallVec<[TypeId; 2]>) {
        let progression = TypeFlags::IS_CLASS | TypeFlags::IS_PROGRESSION;
        match id {
            TypeId::INT_PROGRESSION | TypeId::LONG_PROGRESSION | TypeId::CHAR_PROGRESSION => {
                (Tag::Class, progression, SmallVec::new())
            }
            TypeId::INT_RANGE => (
                Tag::Class,
                progression,
                SmallVec::from_slice(&[TypeId::INT_PROGRESSION]),
            ),
            TypeId::LONG_RANGE => (
                Tag::Class,
                progression,
                SmallVec::from_slice(&[TypeId::LONG_PROGRESSION]),
            ),
            TypeId::CHAR_RANGE => (
                Tag::Class,
                progression,
                SmallVec::from_slice(&[TypeId::CHAR_PROGRESSION]),
            ),
            _ if id.raw() < TypeId::INT_PROGRESSION.raw() => (
                Tag::Primitive,
                TypeFlags::IS_PRIMITIVE | TypeFlags::IS_CLASS,
                SmallVec::new(),
            ),
            _ => (
                Tag::Class,
                TypeFlags::IS_CLASS | TypeFlags::IS_ARRAY,
                SmallVec::new(),
            ),
        }
    }

    fn push_item(
        &mut self,
        item: Item,
        flags: TypeFlags,
        supers: SmallVec<[TypeId; 2]>,
    ) -> TypeId {
        let raw = u32::try_from(self.items.len())
            .ok()
            .filter(|&raw| raw < TypeId::NONE.raw())
            .unwrap_or_else(|| panic!("type pool exceeded u32 capacity"));
        self.items.push(item);
        self.flags.push(flags);
        self.supertypes.push(supers);
        TypeId::from_raw(raw)
    }

    /// Intern a structural item, returning the existing id if present.
    fn intern(&mut self, tag: Tag, child: TypeId, flags: TypeFlags) -> TypeId {
        let item = Item {
            tag,
            data: child.raw(),
        };
        if let Some(&id) = self.dedup.get(&item) {
            return id;
        }
        let id = self.push_item(item, flags, SmallVec::new());
        self.dedup.insert(item, id);
        id
    }

    #[inline]
    pub fn tag(&self, ty: TypeId) -> Tag {
        self.items[ty.index()].tag
    }

    #[inline]
    pub fn flags(&self, ty: TypeId) -> TypeFlags {
        self.flags[ty.index()]
    }

    /// Element of an array instance, or inner type of a nullable view.
    #[inline]
    pub fn child(&self, ty: TypeId) -> Option<TypeId> {
        let item = self.items[ty.index()];
        item.tag.has_child().then(|| TypeId::from_raw(item.data))
    }

    /// Directly declared supertypes of a class.
    #[inline]
    pub fn supertypes(&self, ty: TypeId) -> &[TypeId] {
        &self.supertypes[ty.index()]
    }

    /// Whether `ty` refers to an entry of this pool.
    #[inline]
    pub fn contains(&self, ty: TypeId) -> bool {
        ty.index() < self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: the builtins are pre-interned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render a type for logs and error messages.
    pub fn display_name(&self, ty: TypeId) -> String {
        if let Some(name) = ty.name() {
            return name.to_owned();
        }
        if !self.contains(ty) {
            return format!("{ty:?}");
        }
        match (self.tag(ty), self.child(ty)) {
            (Tag::Array, Some(elem)) => format!("Array<{}>", self.display_name(elem)),
            (Tag::Nullable, Some(inner)) => format!("{}?", self.display_name(inner)),
            _ => self
                .class_names
                .get(&ty)
                .cloned()
                .unwrap_or_else(|| format!("{ty:?}")),
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
