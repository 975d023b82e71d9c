//! Idiom handlers.
//!
//! Each handler pairs a [`CallMatcher`] describing the callee shape of one
//! idiom with a builder that turns a matching call into a
//! [`ProgressionInfo`]. A matcher miss means "no opinion"; builder errors are
//! internal invariant violations.

mod indices;
mod range;
mod step;

use ranger_ir::{Call, ExprArena, ExprId, FunctionId};
use ranger_match::CallMatcher;
use ranger_types::TypeOracle;

use crate::{ProgressionError, ProgressionInfo, ProgressionKind, ProgressionRecognizer, ProgressionSymbols};

/// The recognized idioms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// `a..b`
    RangeTo,
    /// `a downTo b`
    DownTo,
    /// `a until b`
    Until,
    /// `c.indices`
    Indices,
    /// `p step s`
    Step,
}

impl HandlerKind {
    /// Order in which handlers are offered a call; the first match wins.
    pub const PRIORITY: [HandlerKind; 5] = [
        HandlerKind::Indices,
        HandlerKind::Until,
        HandlerKind::DownTo,
        HandlerKind::Step,
        HandlerKind::RangeTo,
    ];

    /// The callee shape this idiom accepts.
    pub fn matcher(self, symbols: &ProgressionSymbols) -> CallMatcher {
        let names = &symbols.names;
        let elements = &symbols.element_classes;
        match self {
            HandlerKind::RangeTo => CallMatcher::new()
                .dispatch_receiver(elements.clone())
                .last_segment(names.range_to)
                .param_count(1)
                .param(0, elements.clone()),
            HandlerKind::DownTo => CallMatcher::new()
                .single_argument_extension(names.down_to.clone(), elements.clone())
                .param(0, elements.clone()),
            HandlerKind::Until => CallMatcher::new()
                .single_argument_extension(names.until.clone(), elements.clone())
                .param(0, elements.clone()),
            HandlerKind::Indices => CallMatcher::new()
                .extension_receiver(symbols.supported_arrays.clone())
                .fq_name(names.indices.clone())
                .param_count(0),
            HandlerKind::Step => CallMatcher::new()
                .single_argument_extension(names.step.clone(), symbols.progression_classes.clone())
                .param(0, symbols.step_classes.clone()),
        }
    }
}

/// A handler with its matcher built once against the configuration.
#[derive(Clone, Debug)]
pub(crate) struct Handler {
    pub(crate) kind: HandlerKind,
    pub(crate) matcher: CallMatcher,
}

impl Handler {
    pub(crate) fn new(kind: HandlerKind, symbols: &ProgressionSymbols) -> Self {
        Self {
            kind,
            matcher: kind.matcher(symbols),
        }
    }

    /// Offer `call` (the payload of node `expr`) to this handler.
    pub(crate) fn handle<T: TypeOracle + ?Sized>(
        &self,
        recognizer: &ProgressionRecognizer<'_, T>,
        arena: &mut ExprArena,
        expr: ExprId,
        call: Call,
        kind: ProgressionKind,
    ) -> Result<Option<ProgressionInfo>, ProgressionError> {
        if !self
            .matcher
            .matches_call(&call, recognizer.functions(), recognizer.types())
        {
            return Ok(None);
        }

        tracing::trace!(handler = ?self.kind, expr = expr.raw(), "callee shape matched");
        match self.kind {
            HandlerKind::RangeTo => range::range_to(arena, call, kind).map(Some),
            HandlerKind::DownTo => range::down_to(arena, call, kind).map(Some),
            HandlerKind::Until => range::until(arena, call, kind).map(Some),
            HandlerKind::Indices => indices::build(recognizer, arena, expr, call, kind).map(Some),
            HandlerKind::Step => step::build(recognizer, arena, call, kind),
        }
    }
}

/// A receiver or argument the matched signature declares but the call lacks.
fn require(
    part: Option<ExprId>,
    callee: FunctionId,
    what: &'static str,
) -> Result<ExprId, ProgressionError> {
    part.ok_or(ProgressionError::MalformedCall { callee, what })
}
