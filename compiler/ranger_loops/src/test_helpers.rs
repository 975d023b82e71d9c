//! Shared test utilities for recognizer and handler tests.
//!
//! [`Fixture`] declares the front-end functions for every idiom over `Int`,
//! `Long` and `Char`, plus the builtin helpers, and builds call nodes the
//! way a front end would type them. Only compiled in test builds.

use rustc_hash::FxHashMap;

use ranger_ir::{
    Call, ConstValue, ExprArena, ExprId, FunctionId, FunctionTable, QualifiedName, Signature,
    Span, StringInterner, TypeId,
};
use ranger_types::{Pool, TypeOracle};

use crate::{ProgressionError, ProgressionInfo, ProgressionRecognizer, ProgressionSymbols};

/// `(element, closed range, progression)` for each element class.
const ELEMENTS: [(TypeId, TypeId, TypeId); 3] = [
    (TypeId::INT, TypeId::INT_RANGE, TypeId::INT_PROGRESSION),
    (TypeId::LONG, TypeId::LONG_RANGE, TypeId::LONG_PROGRESSION),
    (TypeId::CHAR, TypeId::CHAR_RANGE, TypeId::CHAR_PROGRESSION),
];

pub(crate) struct Fixture {
    pub(crate) interner: StringInterner,
    pub(crate) types: Pool,
    pub(crate) functions: FunctionTable,
    pub(crate) symbols: ProgressionSymbols,
    pub(crate) arena: ExprArena,
    range_to: FxHashMap<TypeId, FunctionId>,
    down_to: FxHashMap<TypeId, FunctionId>,
    until: FxHashMap<TypeId, FunctionId>,
    /// Keyed by the progression class of the receiver.
    step: FxHashMap<TypeId, FunctionId>,
    indices: FxHashMap<TypeId, FunctionId>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let interner = StringInterner::new();
        let mut functions = FunctionTable::new();
        let symbols = ProgressionSymbols::declare_builtins(&mut functions, &interner);

        let other = interner.intern("other");
        let to = interner.intern("to");
        let step_param = interner.intern("step");

        let mut range_to = FxHashMap::default();
        let mut down_to = FxHashMap::default();
        let mut until = FxHashMap::default();
        let mut step = FxHashMap::default();
        for (element, range, progression) in ELEMENTS {
            let class = element.name().unwrap_or("Any");
            let member = QualifiedName::parse(&interner, &format!("core.{class}.rangeTo"));
            range_to.insert(
                element,
                functions.declare(
                    Signature::new(member, range)
                        .with_dispatch_receiver(element)
                        .with_param(other, element),
                ),
            );
            down_to.insert(
                element,
                functions.declare(
                    Signature::new(symbols.names.down_to.clone(), progression)
                        .with_extension_receiver(element)
                        .with_param(to, element),
                ),
            );
            until.insert(
                element,
                functions.declare(
                    Signature::new(symbols.names.until.clone(), range)
                        .with_extension_receiver(element)
                        .with_param(to, element),
                ),
            );
        }
        for (progression, step_type) in [
            (TypeId::INT_PROGRESSION, TypeId::INT),
            (TypeId::LONG_PROGRESSION, TypeId::LONG),
            (TypeId::CHAR_PROGRESSION, TypeId::INT),
        ] {
            step.insert(
                progression,
                functions.declare(
                    Signature::new(symbols.names.step.clone(), progression)
                        .with_extension_receiver(progression)
                        .with_param(step_param, step_type),
                ),
            );
        }

        let mut indices = FxHashMap::default();
        for array in symbols.supported_arrays.iter() {
            indices.insert(
                array,
                functions.declare(
                    Signature::new(symbols.names.indices.clone(), TypeId::INT_RANGE)
                        .with_extension_receiver(array),
                ),
            );
        }

        Self {
            interner,
            types: Pool::new(),
            functions,
            symbols,
            arena: ExprArena::new(),
            range_to,
            down_to,
            until,
            step,
            indices,
        }
    }

    pub(crate) fn var(&mut self, name: &str, ty: TypeId) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.push_var(name, ty, Span::DUMMY)
    }

    pub(crate) fn int(&mut self, value: i32) -> ExprId {
        self.arena
            .push_const(ConstValue::Int(value), TypeId::INT, Span::DUMMY)
    }

    pub(crate) fn long(&mut self, value: i64) -> ExprId {
        self.arena
            .push_const(ConstValue::Long(value), TypeId::LONG, Span::DUMMY)
    }

    /// A call node typed with its callee's return type.
    pub(crate) fn call(
        &mut self,
        callee: FunctionId,
        dispatch_receiver: Option<ExprId>,
        extension_receiver: Option<ExprId>,
        args: &[ExprId],
    ) -> ExprId {
        let args = self.arena.push_expr_list(args);
        let ty = self.functions.get(callee).return_type;
        self.arena.push_call(
            Call {
                callee,
                dispatch_receiver,
                extension_receiver,
                args,
            },
            ty,
            Span::DUMMY,
        )
    }

    /// `a..b`
    pub(crate) fn range_to(&mut self, a: ExprId, b: ExprId) -> ExprId {
        let callee = self.range_to[&self.arena.ty(a)];
        self.call(callee, Some(a), None, &[b])
    }

    /// `a downTo b`
    pub(crate) fn down_to(&mut self, a: ExprId, b: ExprId) -> ExprId {
        let callee = self.down_to[&self.arena.ty(a)];
        self.call(callee, None, Some(a), &[b])
    }

    /// `a until b`
    pub(crate) fn until(&mut self, a: ExprId, b: ExprId) -> ExprId {
        let callee = self.until[&self.arena.ty(a)];
        self.call(callee, None, Some(a), &[b])
    }

    /// `p step s`, picking the overload for `p`'s progression class.
    pub(crate) fn step(&mut self, progression: ExprId, step: ExprId) -> ExprId {
        let ty = self.arena.ty(progression);
        let callee = self
            .step
            .iter()
            .find(|&(&class, _)| self.types.is_subtype_of(ty, class))
            .map(|(_, &callee)| callee)
            .unwrap_or_else(|| panic!("no step overload for {ty:?}"));
        self.call(callee, None, Some(progression), &[step])
    }

    /// `array.indices`, picking the overload for `array`'s class.
    pub(crate) fn indices(&mut self, array: ExprId) -> ExprId {
        let ty = self.arena.ty(array);
        let class = self.types.classifier(ty).unwrap_or(ty);
        let callee = self.indices[&class];
        self.call(callee, None, Some(array), &[])
    }

    pub(crate) fn recognize(
        &mut self,
        expr: ExprId,
    ) -> Result<Option<ProgressionInfo>, ProgressionError> {
        ProgressionRecognizer::new(&self.symbols, &self.functions, &self.types)
            .recognize(&mut self.arena, expr)
    }

    /// [`recognize`](Self::recognize), for expressions that must be progressions.
    pub(crate) fn progression(&mut self, expr: ExprId) -> ProgressionInfo {
        match self.recognize(expr) {
            Ok(Some(info)) => info,
            other => panic!("expected a progression, got {other:?}"),
        }
    }
}
