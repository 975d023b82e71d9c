//! The canonical description of a recognized progression.

use smallvec::{smallvec, SmallVec};

use ranger_ir::{ExprArena, ExprId};

use crate::ProgressionKind;

/// Step validation code accumulated by `step` modifiers.
///
/// Checks run in the order the modifiers were applied: innermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepCheck {
    Single(ExprId),
    Sequence(SmallVec<[ExprId; 4]>),
}

impl StepCheck {
    /// Append a check that runs after every check already present.
    #[must_use]
    pub fn then(self, next: ExprId) -> Self {
        match self {
            StepCheck::Single(first) => StepCheck::Sequence(smallvec![first, next]),
            StepCheck::Sequence(mut checks) => {
                checks.push(next);
                StepCheck::Sequence(checks)
            }
        }
    }

    /// The checks, in evaluation order.
    pub fn fragments(&self) -> &[ExprId] {
        match self {
            StepCheck::Single(check) => std::slice::from_ref(check),
            StepCheck::Sequence(checks) => checks,
        }
    }

    /// The last check; its value is the effective step.
    pub fn last(&self) -> ExprId {
        match self {
            StepCheck::Single(check) => *check,
            StepCheck::Sequence(checks) => checks[checks.len() - 1],
        }
    }
}

/// A recognized progression, ready for loop lowering.
///
/// `start` and `bound` are nodes of the analyzed expression tree, not copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressionInfo {
    pub kind: ProgressionKind,
    pub start: ExprId,
    pub bound: ExprId,
    /// `None` means the step is implicitly 1.
    pub step: Option<StepCheck>,
    pub increasing: bool,
    /// The bound may be overshot by the step, so the last element has to be
    /// computed before it can serve as the loop's termination value.
    pub needs_last_element_computation: bool,
    /// `bound` is inclusive.
    pub closed: bool,
}

impl ProgressionInfo {
    /// An increasing, closed progression with unit step.
    pub fn new(kind: ProgressionKind, start: ExprId, bound: ExprId) -> Self {
        Self {
            kind,
            start,
            bound,
            step: None,
            increasing: true,
            needs_last_element_computation: false,
            closed: true,
        }
    }

    #[must_use]
    pub fn decreasing(mut self) -> Self {
        self.increasing = false;
        self
    }

    #[must_use]
    pub fn half_open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Fold one more step modifier into this progression.
    ///
    /// The check runs after any existing ones; the last-element flag only
    /// ever turns on.
    #[must_use]
    pub fn with_step(mut self, check: ExprId, needs_last_element_computation: bool) -> Self {
        self.step = Some(match self.step.take() {
            None => StepCheck::Single(check),
            Some(existing) => existing.then(check),
        });
        self.needs_last_element_computation |= needs_last_element_computation;
        self
    }

    /// The step as a single expression for the lowering pass.
    ///
    /// A sequence of checks becomes a new composite node whose value is the
    /// last check's value.
    pub fn step_expr(&self, arena: &mut ExprArena) -> Option<ExprId> {
        match self.step.as_ref()? {
            StepCheck::Single(check) => Some(*check),
            StepCheck::Sequence(checks) => {
                let ty = arena.ty(checks[checks.len() - 1]);
                let span = checks
                    .iter()
                    .map(|&check| arena.span(check))
                    .reduce(ranger_ir::Span::merge)
                    .unwrap_or_default();
                Some(arena.push_composite(checks, ty, span))
            }
        }
    }
}
