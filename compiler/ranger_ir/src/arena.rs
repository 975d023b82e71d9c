//! Expression arena.
//!
//! Struct-of-arrays layout: parallel `kinds`, `spans`, `types` arrays indexed
//! by [`ExprId`], plus one flat list storage indexed by [`ExprRange`].
//! Nodes are append-only: once pushed, a node is never rewritten, so any id
//! handed out stays valid and keeps its meaning for the arena's lifetime.

use crate::{Call, ConstValue, Expr, ExprId, ExprKind, ExprRange, Name, Span, TypeId};

/// Convert a length to `u32`, panicking with context on overflow.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a length to `u16`, panicking with context on overflow.
#[inline]
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    kinds: Vec<ExprKind>,
    spans: Vec<Span>,
    types: Vec<TypeId>,
    /// Flattened expression ID lists (call args, composite statements).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn push(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(expr.kind);
        self.spans.push(expr.span);
        self.types.push(expr.ty);
        id
    }

    pub fn push_const(&mut self, value: ConstValue, ty: TypeId, span: Span) -> ExprId {
        self.push(Expr::new(ExprKind::Const(value), ty, span))
    }

    pub fn push_var(&mut self, name: Name, ty: TypeId, span: Span) -> ExprId {
        self.push(Expr::new(ExprKind::Var(name), ty, span))
    }

    pub fn push_call(&mut self, call: Call, ty: TypeId, span: Span) -> ExprId {
        self.push(Expr::new(ExprKind::Call(call), ty, span))
    }

    /// Allocate a composite node whose statements run in `stmts` order.
    pub fn push_composite(&mut self, stmts: &[ExprId], ty: TypeId, span: Span) -> ExprId {
        let range = self.push_expr_list(stmts);
        self.push(Expr::new(ExprKind::Composite(range), ty, span))
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    #[inline]
    pub fn ty(&self, id: ExprId) -> TypeId {
        self.types[id.index()]
    }

    /// Reconstruct a full `Expr` from the parallel arrays.
    pub fn get(&self, id: ExprId) -> Expr {
        Expr {
            kind: self.kinds[id.index()],
            span: self.spans[id.index()],
            ty: self.types[id.index()],
        }
    }

    /// The call payload, if `id` is a call node.
    #[inline]
    pub fn as_call(&self, id: ExprId) -> Option<&Call> {
        match self.kind(id) {
            ExprKind::Call(call) => Some(call),
            _ => None,
        }
    }

    /// The literal value, if `id` is a constant node.
    #[inline]
    pub fn as_const(&self, id: ExprId) -> Option<ConstValue> {
        match self.kind(id) {
            ExprKind::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// The `index`-th value argument of a call, if present.
    pub fn call_arg(&self, call: &Call, index: usize) -> Option<ExprId> {
        self.get_expr_list(call.args).get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous range of expression IDs.
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }
}
