//! The sole OS interaction point: reserving and releasing a contiguous,
//! zero-initialized, read-write virtual address range.
//!
//! Both the pool and the heap allocator call [`map`] once at construction
//! and [`unmap`] once at destruction. No separate commit/decommit step is
//! used: the whole reservation is mapped `PROT_READ | PROT_WRITE` up front,
//! so growing a heap's committed window (see `heap::HeapAllocator::expand`)
//! is pure bookkeeping.

use core::ffi::c_void;
use core::ptr::NonNull;

use crate::AllocError;

/// Returns the OS page size in bytes. Queried once and cached; on any
/// platform `sysconf` might report as zero or failing, falls back to 4 KiB.
#[inline]
pub fn page_size() -> usize {
    use core::sync::atomic::{AtomicUsize, Ordering};
    static CACHED: AtomicUsize = AtomicUsize::new(0);

    let cached = CACHED.load(Ordering::Relaxed);
    if cached != 0 {
        return cached;
    }

    let queried = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    let size = if queried > 0 { queried as usize } else { 4096 };
    CACHED.store(size, Ordering::Relaxed);
    size
}

/// Rounds `size` up to the next multiple of the page size.
#[inline]
pub fn round_up_to_page(size: usize) -> usize {
    let page = page_size();
    (size + page - 1) & !(page - 1)
}

/// Reserves and commits a fresh, zeroed, anonymous mapping of exactly
/// `size` bytes (already expected to be page-aligned; callers round first).
///
/// Returns [`AllocError`] if the kernel refuses the mapping.
pub fn map(size: usize) -> Result<NonNull<u8>, AllocError> {
    debug_assert!(size > 0);
    debug_assert!(size % page_size() == 0);

    // SAFETY: a fixed, well-known set of arguments requesting a private
    // anonymous mapping; the kernel either returns a fresh region or MAP_FAILED.
    let addr = unsafe {
        libc::mmap(
            core::ptr::null_mut(),
            size,
            libc::PROT_READ | libc::PROT_WRITE,
            libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
            -1,
            0,
        )
    };

    if addr == libc::MAP_FAILED {
        return Err(AllocError);
    }

    // SAFETY: mmap succeeded, so addr is non-null and valid for `size` bytes.
    Ok(unsafe { NonNull::new_unchecked(addr as *mut u8) })
}

/// Releases a mapping previously obtained from [`map`]. `base`/`size` must
/// match the original reservation exactly.
///
/// # Safety
/// `base` must be the pointer returned by a matching [`map`] call, and no
/// references into the region may outlive this call.
pub unsafe fn unmap(base: NonNull<u8>, size: usize) {
    let rc = libc::munmap(base.as_ptr() as *mut c_void, size);
    debug_assert!(rc == 0, "munmap failed");
}
