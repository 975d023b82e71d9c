//! `c.indices`: the half-open range `0 until c.size`.

use ranger_ir::{Call, ConstValue, ExprArena, ExprId, ExprRange, TypeId};
use ranger_types::TypeOracle;

use super::require;
use crate::{ProgressionError, ProgressionInfo, ProgressionKind, ProgressionRecognizer};

pub(super) fn build<T: TypeOracle + ?Sized>(
    recognizer: &ProgressionRecognizer<'_, T>,
    arena: &mut ExprArena,
    expr: ExprId,
    call: Call,
    kind: ProgressionKind,
) -> Result<ProgressionInfo, ProgressionError> {
    let receiver = require(call.extension_receiver, call.callee, "extension receiver")?;
    let receiver_ty = arena.ty(receiver);
    let array = recognizer
        .types()
        .classifier(receiver_ty)
        .unwrap_or(receiver_ty);
    let size = recognizer
        .symbols()
        .array_size(array)
        .ok_or(ProgressionError::MissingSizeAccessor { array })?;

    let span = arena.span(expr);
    let start = arena.push_const(ConstValue::Int(0), TypeId::INT, span);
    let bound = arena.push_call(
        Call {
            callee: size,
            dispatch_receiver: Some(receiver),
            extension_receiver: None,
            args: ExprRange::EMPTY,
        },
        recognizer.functions().get(size).return_type,
        span,
    );

    tracing::debug!(
        array = ?array,
        receiver = receiver.raw(),
        bound = bound.raw(),
        "expanded indices to a size-bounded range"
    );

    Ok(ProgressionInfo::new(kind, start, bound).half_open())
}
