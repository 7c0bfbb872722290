//! Tracing hooks for serialization.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level event once a node has been validated and written.
///
/// ```ignore
/// sqlweave_trace_serialize!(core::any::type_name::<N>(), deps.len(), ctx.kind());
/// ```
macro_rules! sqlweave_trace_serialize {
    ($node:expr, $dependencies:expr, $context:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            node = $node,
            dependencies = $dependencies,
            context = $context,
            "sqlweave.serialize"
        );
    };
}

/// Emit a warn-level event for an operand the target context refused.
///
/// ```ignore
/// sqlweave_trace_reject!(dep.slot, dep.category, ctx.kind());
/// ```
macro_rules! sqlweave_trace_reject {
    ($slot:expr, $category:expr, $context:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(
            slot = %$slot,
            category = %$category,
            context = $context,
            "sqlweave.reject"
        );
    };
}
