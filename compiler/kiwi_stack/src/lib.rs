//! Stack growth for deep recursion.
//!
//! Both lowering (ESTree JSON to arena IR) and evaluation recurse once per
//! nested AST node and once per function call. Programs such as a recursive
//! countdown from ten thousand nest far deeper than the default main-thread
//! stack allows, so every recursive entry point runs through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended in segments by `stacker`; on WASM
//! the closure is called directly and the interpreter's call-depth limit is
//! the only guard.

/// Remaining stack below which a new segment is allocated (128 KiB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2 MiB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Run `f` on a fresh stack of `size` bytes.
///
/// For recursion that cannot be wrapped level by level, such as a serde
/// deserializer walking a deeply nested document. The caller bounds the
/// depth so that `size` is enough.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_size<R>(size: usize, f: impl FnOnce() -> R) -> R {
    stacker::grow(size, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_size<R>(_size: usize, f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
