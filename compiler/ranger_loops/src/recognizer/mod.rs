//! The progression recognizer.
//!
//! Decides whether an expression denotes a progression the loop lowering
//! pass can replace with a counting loop, and if so describes it.
//!
//! Recognition runs in three stages:
//! 1. Type gate: the expression's static type must derive from one of the
//!    progression base classes, tested `Char`, `Int`, `Long`. Otherwise the
//!    node shape is never looked at.
//! 2. Only call nodes can be idioms.
//! 3. Handlers are offered the call in [`HandlerKind::PRIORITY`] order and
//!    the first one that produces a descriptor wins.

use ranger_ir::{ExprArena, ExprId, FunctionTable, TypeId};
use ranger_types::TypeOracle;

use crate::handlers::Handler;
use crate::{HandlerKind, ProgressionError, ProgressionInfo, ProgressionKind, ProgressionSymbols};

/// Minimum stack space to keep available while recursing through `step` chains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Recognizes range and progression idioms.
///
/// Holds no state between calls: every call to [`recognize`](Self::recognize)
/// only reads the configuration, the function table and the type facility,
/// and appends fresh nodes to the arena it is given.
pub struct ProgressionRecognizer<'a, T: TypeOracle + ?Sized> {
    symbols: &'a ProgressionSymbols,
    functions: &'a FunctionTable,
    types: &'a T,
    handlers: [Handler; 5],
}

impl<'a, T: TypeOracle + ?Sized> ProgressionRecognizer<'a, T> {
    pub fn new(symbols: &'a ProgressionSymbols, functions: &'a FunctionTable, types: &'a T) -> Self {
        Self {
            symbols,
            functions,
            types,
            handlers: HandlerKind::PRIORITY.map(|kind| Handler::new(kind, symbols)),
        }
    }

    /// The order in which handlers are tried.
    pub fn handler_order(&self) -> [HandlerKind; 5] {
        self.handlers.each_ref().map(|handler| handler.kind)
    }

    /// The progression kind of values of type `ty`, if any.
    pub fn progression_kind(&self, ty: TypeId) -> Option<ProgressionKind> {
        ProgressionKind::CLASSIFICATION_ORDER
            .into_iter()
            .find(|kind| self.types.is_subtype_of(ty, kind.base_class()))
    }

    /// Describe `expr` as a progression.
    ///
    /// `Ok(None)` means `expr` is not a recognized idiom and should be
    /// iterated generically. New nodes (constants, size and step-check calls)
    /// may be appended to `arena` even then, if a `step` chain was only
    /// rejected after its step was processed; existing nodes are never
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns an error when a recognized idiom cannot be described because
    /// the configuration lacks a helper it requires, or the call is missing
    /// a receiver or argument its callee declares.
    pub fn recognize(
        &self,
        arena: &mut ExprArena,
        expr: ExprId,
    ) -> Result<Option<ProgressionInfo>, ProgressionError> {
        ensure_sufficient_stack(|| self.recognize_inner(arena, expr))
    }

    fn recognize_inner(
        &self,
        arena: &mut ExprArena,
        expr: ExprId,
    ) -> Result<Option<ProgressionInfo>, ProgressionError> {
        let Some(kind) = self.progression_kind(arena.ty(expr)) else {
            tracing::trace!(expr = expr.raw(), "type is not a progression");
            return Ok(None);
        };
        let Some(&call) = arena.as_call(expr) else {
            tracing::trace!(expr = expr.raw(), ?kind, "progression-typed value is not a call");
            return Ok(None);
        };

        for handler in &self.handlers {
            if let Some(info) = handler.handle(self, arena, expr, call, kind)? {
                tracing::debug!(
                    expr = expr.raw(),
                    handler = ?handler.kind,
                    ?kind,
                    increasing = info.increasing,
                    closed = info.closed,
                    "recognized progression"
                );
                return Ok(Some(info));
            }
        }

        tracing::trace!(expr = expr.raw(), ?kind, "no idiom matched");
        Ok(None)
    }

    pub(crate) fn symbols(&self) -> &'a ProgressionSymbols {
        self.symbols
    }

    pub(crate) fn functions(&self) -> &'a FunctionTable {
        self.functions
    }

    pub(crate) fn types(&self) -> &'a T {
        self.types
    }
}
