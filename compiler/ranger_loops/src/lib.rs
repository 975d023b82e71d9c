//! Progression recognition for loop lowering.
//!
//! A `for` loop over `a..b`, `a downTo b`, `a until b`, `c.indices` or any
//! `step` chain over them does not need an iterator object: it can be lowered
//! to a counting loop. This crate recognizes those idioms and describes them.
//!
//! - **Descriptors** ([`ProgressionInfo`]) carry the kind, the start and bound
//!   expressions, direction, closedness and the accumulated step checks.
//!
//! - **Configuration** ([`ProgressionSymbols`]) names the idioms and holds the
//!   helper functions recognition emits calls to. It is immutable once built.
//!
//! - **Recognition** ([`ProgressionRecognizer`]) gates on the expression's
//!   type, then offers the call to one handler per idiom ([`HandlerKind`]).
//!
//! # Crate Dependencies
//!
//! `ranger_loops` depends on `ranger_ir` for the expression arena and function
//! table, `ranger_types` for the [`TypeOracle`](ranger_types::TypeOracle)
//! queries, and `ranger_match` for callee-shape matchers.

mod error;
mod handlers;
mod info;
mod kind;
mod recognizer;
mod symbols;

#[cfg(test)]
mod test_helpers;

pub use error::ProgressionError;
pub use handlers::HandlerKind;
pub use info::{ProgressionInfo, StepCheck};
pub use kind::ProgressionKind;
pub use recognizer::ProgressionRecognizer;
pub use symbols::{IdiomNames, ProgressionSymbols};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ranger_loops=debug` or `RUST_LOG=ranger_loops=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
