//! `a..b`, `a downTo b` and `a until b`.
//!
//! All three re-link the receiver as `start` and the single argument as
//! `bound`; they differ only in direction and closedness.

use ranger_ir::{Call, ExprArena, ExprId};

use super::require;
use crate::{ProgressionError, ProgressionInfo, ProgressionKind};

pub(super) fn range_to(
    arena: &ExprArena,
    call: Call,
    kind: ProgressionKind,
) -> Result<ProgressionInfo, ProgressionError> {
    let start = require(call.dispatch_receiver, call.callee, "dispatch receiver")?;
    let bound = bound(arena, &call)?;
    Ok(ProgressionInfo::new(kind, start, bound))
}

pub(super) fn down_to(
    arena: &ExprArena,
    call: Call,
    kind: ProgressionKind,
) -> Result<ProgressionInfo, ProgressionError> {
    let start = require(call.extension_receiver, call.callee, "extension receiver")?;
    let bound = bound(arena, &call)?;
    Ok(ProgressionInfo::new(kind, start, bound).decreasing())
}

pub(super) fn until(
    arena: &ExprArena,
    call: Call,
    kind: ProgressionKind,
) -> Result<ProgressionInfo, ProgressionError> {
    let start = require(call.extension_receiver, call.callee, "extension receiver")?;
    let bound = bound(arena, &call)?;
    Ok(ProgressionInfo::new(kind, start, bound).half_open())
}

fn bound(arena: &ExprArena, call: &Call) -> Result<ExprId, ProgressionError> {
    require(arena.call_arg(call, 0), call.callee, "argument")
}
