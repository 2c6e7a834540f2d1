//! The pass-through default allocator: forwards straight to the host's
//! allocator via `std::alloc`. Holds no state of its own, matching the
//! original's stateless singleton wrapping `malloc`/`free`/`realloc`.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::ptr_utils::ALIGN;

#[inline]
fn layout_for(size: usize) -> Layout {
    // SAFETY: ALIGN is a nonzero power of two and `size` never overflows
    // isize when rounded up to it in practice for any request this crate
    // services; std::alloc::Layout validates this regardless.
    Layout::from_size_align(size.max(1), ALIGN).expect("invalid layout for default allocator")
}

/// Allocates `size` bytes from the host allocator. Never special-cased for
/// `size == 0`; a one-byte minimum layout is requested instead, so the
/// returned pointer is always valid to free.
pub fn allocate(size: usize) -> Option<NonNull<u8>> {
    let layout = layout_for(size);
    // SAFETY: layout has nonzero size.
    let ptr = unsafe { std::alloc::alloc(layout) };
    NonNull::new(ptr)
}

/// Frees a pointer previously returned by [`allocate`] or [`reallocate`].
/// `size` must be the size most recently associated with `ptr`; this
/// allocator keeps no bookkeeping of its own, trusting the caller exactly
/// as the original's `free(ptr)` trusted its caller.
///
/// # Safety
/// `ptr` must have been allocated by this module with the given `size`.
pub unsafe fn free(ptr: NonNull<u8>, size: usize) {
    std::alloc::dealloc(ptr.as_ptr(), layout_for(size));
}

/// Resizes a pointer previously returned by [`allocate`], preserving the
/// lesser of the old and new sizes worth of content.
///
/// # Safety
/// `ptr` must have been allocated by this module with `old_size`.
pub unsafe fn reallocate(ptr: NonNull<u8>, old_size: usize, new_size: usize) -> Option<NonNull<u8>> {
    let old_layout = layout_for(old_size);
    let raw = std::alloc::realloc(ptr.as_ptr(), old_layout, new_size.max(1));
    NonNull::new(raw)
}
