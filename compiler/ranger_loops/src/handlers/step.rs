//! `p step s`: a progression with an explicit step.
//!
//! The receiver is itself recognized first; if it is not a progression this
//! call is not one either. The step argument becomes a validation fragment
//! appended to whatever the receiver already accumulated.

use ranger_ir::{Call, ConstValue, ExprArena, ExprId};
use ranger_types::TypeOracle;

use super::require;
use crate::{ProgressionError, ProgressionInfo, ProgressionKind, ProgressionRecognizer};

pub(super) fn build<T: TypeOracle + ?Sized>(
    recognizer: &ProgressionRecognizer<'_, T>,
    arena: &mut ExprArena,
    call: Call,
    kind: ProgressionKind,
) -> Result<Option<ProgressionInfo>, ProgressionError> {
    let receiver = require(call.extension_receiver, call.callee, "extension receiver")?;
    let step = require(arena.call_arg(&call, 0), call.callee, "argument")?;

    let Some(inner) = recognizer.recognize(arena, receiver)? else {
        tracing::trace!(receiver = receiver.raw(), "step receiver is not a progression");
        return Ok(None);
    };

    let (check, needs_last) = check_step(recognizer, arena, step, kind)?;
    let info = ProgressionInfo {
        kind,
        ..inner.with_step(check, needs_last)
    };

    tracing::debug!(
        ?kind,
        check = check.raw(),
        fragments = info.step.as_ref().map_or(0, |s| s.fragments().len()),
        needs_last_element_computation = info.needs_last_element_computation,
        "folded step modifier"
    );
    Ok(Some(info))
}

/// The validation fragment for `step`, and whether the last element has to
/// be computed because of it.
fn check_step<T: TypeOracle + ?Sized>(
    recognizer: &ProgressionRecognizer<'_, T>,
    arena: &mut ExprArena,
    step: ExprId,
    kind: ProgressionKind,
) -> Result<(ExprId, bool), ProgressionError> {
    let positive = arena
        .as_const(step)
        .and_then(ConstValue::as_integer)
        .filter(|&value| value > 0);
    if let Some(value) = positive {
        return Ok((step, value != 1));
    }

    let step_type = recognizer.types().make_not_null(arena.ty(step));
    if cfg!(debug_assertions) && step_type != kind.step_type() {
        return Err(ProgressionError::StepTypeMismatch { kind, step_type });
    }
    let check = recognizer
        .symbols()
        .check_progression_step(step_type)
        .ok_or(ProgressionError::MissingStepCheck { step_type })?;

    let args = arena.push_expr_list(&[step]);
    let span = arena.span(step);
    let validated = arena.push_call(
        Call {
            callee: check,
            dispatch_receiver: None,
            extension_receiver: None,
            args,
        },
        recognizer.functions().get(check).return_type,
        span,
    );
    Ok((validated, true))
}
