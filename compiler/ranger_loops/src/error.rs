//! Internal invariant violations.
//!
//! "Not a progression" is never an error; it is `Ok(None)`. These variants
//! mean the matcher allow-lists and the helper tables disagree, or the IR is
//! malformed. Lowering must stop rather than emit a loop from them.

use ranger_ir::{FunctionId, TypeId};

use crate::ProgressionKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("no size accessor registered for array class {array:?}")]
    MissingSizeAccessor { array: TypeId },

    #[error("no `checkProgressionStep` registered for step type {step_type:?}")]
    MissingStepCheck { step_type: TypeId },

    #[error("step of type {step_type:?} does not fit a {kind:?} progression")]
    StepTypeMismatch {
        kind: ProgressionKind,
        step_type: TypeId,
    },

    #[error("call to {callee:?} is missing its declared {what}")]
    MalformedCall {
        callee: FunctionId,
        what: &'static str,
    },
}
