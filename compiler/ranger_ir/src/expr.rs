//! Expression nodes stored in an [`ExprArena`](crate::ExprArena).

use std::fmt;

use crate::{FunctionId, Name, Span, TypeId};

/// Index into an [`ExprArena`](crate::ExprArena).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// A contiguous range of expression IDs in the arena's flat list storage.
///
/// Used for call arguments and composite statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        Self { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExprRange({}..{})",
            self.start,
            self.start + u32::from(self.len)
        )
    }
}

/// A compile-time constant literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Char(char),
}

impl ConstValue {
    /// The value of an `Int` or `Long` literal, widened to `i64`.
    ///
    /// Other kinds are not integers for step purposes, even `Char`.
    #[inline]
    pub fn as_integer(self) -> Option<i64> {
        match self {
            ConstValue::Int(v) => Some(i64::from(v)),
            ConstValue::Long(v) => Some(v),
            ConstValue::Bool(_) | ConstValue::Char(_) => None,
        }
    }
}

/// A call to a function in the [`FunctionTable`](crate::FunctionTable).
///
/// Receivers are optional: a member call carries a dispatch receiver, an
/// extension call carries an extension receiver, a top-level call has
/// neither.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Call {
    pub callee: FunctionId,
    pub dispatch_receiver: Option<ExprId>,
    pub extension_receiver: Option<ExprId>,
    pub args: ExprRange,
}

/// Expression kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Literal constant.
    Const(ConstValue),
    /// Read of a local variable or parameter.
    Var(Name),
    /// Function call.
    Call(Call),
    /// Ordered statements evaluated in sequence; the value is the last one.
    Composite(ExprRange),
}

/// An expression node with its resolved type and source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: TypeId,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, ty: TypeId, span: Span) -> Self {
        Self { kind, span, ty }
    }
}
