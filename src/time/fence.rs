use std::sync::atomic;

/// Keeps the compiler from moving the timed call across a clock read.
#[inline(always)]
pub(crate) fn compiler_fence() {
    atomic::compiler_fence(atomic::Ordering::SeqCst);
}
