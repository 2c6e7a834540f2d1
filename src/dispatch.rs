//! Uniform dispatch over the three allocation strategies.
//!
//! The original's method-table pointer embedded at the head of every
//! concrete allocator becomes, here, one closed enum and one `match`-based
//! call site per operation — a fixed, small variant set is better served
//! by a `match` than by indirect calls through function pointers or a
//! trait object.

use core::ptr::NonNull;

use crate::default_alloc;
use crate::heap::HeapAllocator;
use crate::pool::PoolAllocator;
use crate::AllocError;

/// An owned allocator instance: the default pass-through allocator, a
/// fixed-size pool, or a boundary-tag heap. Dropping a `Pool`/`Heap`
/// variant unmaps its backing reservation.
#[derive(Debug)]
pub enum AllocHandle {
    Default,
    Pool(Box<PoolAllocator>),
    Heap(Box<HeapAllocator>),
}

impl AllocHandle {
    /// The process-wide default allocator. Always succeeds.
    pub fn default_allocator() -> Self {
        AllocHandle::Default
    }

    /// Creates a fixed-size pool of `n_chunks` chunks of `chunk_size` bytes.
    pub fn new_pool(chunk_size: usize, n_chunks: usize) -> Result<Self, AllocError> {
        Ok(AllocHandle::Pool(Box::new(PoolAllocator::new(chunk_size, n_chunks)?)))
    }

    /// Creates a boundary-tag heap capped at `max_size` bytes (rounded up
    /// to the page size).
    pub fn new_heap(max_size: usize) -> Result<Self, AllocError> {
        Ok(AllocHandle::Heap(HeapAllocator::new(max_size)?))
    }

    /// Allocates `size` bytes. Returns `None` on recoverable OOM/exhaustion.
    pub fn allocate(&mut self, size: usize) -> Option<NonNull<u8>> {
        match self {
            AllocHandle::Default => default_alloc::allocate(size),
            AllocHandle::Pool(pool) => pool.allocate(size),
            AllocHandle::Heap(heap) => heap.allocate(size),
        }
    }

    /// Frees `ptr`. A null pointer is a no-op, matching every concrete
    /// allocator's contract at this uniform boundary.
    ///
    /// # Safety
    /// `ptr`, if non-null, must have been returned by this same handle's
    /// `allocate`/`reallocate`, with `size` matching the allocation's
    /// current size (the default allocator needs it to reconstruct a
    /// `Layout`; the pool and heap recover their own bookkeeping from the
    /// pointer itself but still expect a pointer they actually own).
    pub unsafe fn free(&mut self, ptr: Option<NonNull<u8>>, size: usize) {
        let Some(ptr) = ptr else { return };
        match self {
            AllocHandle::Default => default_alloc::free(ptr, size),
            AllocHandle::Pool(pool) => pool.free(ptr),
            AllocHandle::Heap(heap) => heap.free(ptr),
        }
    }

    /// Reallocates `ptr` to `new_size`. `ptr == None` behaves exactly like
    /// `allocate(new_size)`. Returns `None` (leaving `ptr` untouched) only
    /// on recoverable OOM/exhaustion.
    ///
    /// # Safety
    /// Same pointer-provenance contract as [`AllocHandle::free`].
    pub unsafe fn reallocate(
        &mut self,
        ptr: Option<NonNull<u8>>,
        old_size: usize,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        let Some(ptr) = ptr else { return self.allocate(new_size) };
        match self {
            AllocHandle::Default => default_alloc::reallocate(ptr, old_size, new_size),
            AllocHandle::Pool(pool) => pool.reallocate(ptr, new_size),
            AllocHandle::Heap(heap) => heap.reallocate(ptr, new_size),
        }
    }

    /// Destroys a pool handle, unmapping its reservation. Asserts the
    /// handle is actually pool-typed and not the default singleton,
    /// mirroring the original's "can't destroy the default allocator"
    /// assertion.
    pub fn destroy_pool(self) {
        match self {
            AllocHandle::Pool(pool) => drop(pool),
            _ => panic!("destroy_pool called on a non-pool handle"),
        }
    }

    /// Destroys a heap handle, unmapping its reservation.
    pub fn destroy_heap(self) {
        match self {
            AllocHandle::Heap(heap) => drop(heap),
            _ => panic!("destroy_heap called on a non-heap handle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allocate_and_free_round_trips() {
        let mut handle = AllocHandle::default_allocator();
        let ptr = handle.allocate(64);
        assert!(ptr.is_some());
        unsafe { handle.free(ptr, 64) };
    }

    #[test]
    fn free_of_null_is_a_no_op() {
        let mut handle = AllocHandle::default_allocator();
        unsafe { handle.free(None, 0) };
    }

    #[test]
    fn reallocate_of_null_behaves_like_allocate() {
        let mut handle = AllocHandle::new_heap(1024 * 1024).unwrap();
        let ptr = unsafe { handle.reallocate(None, 0, 128) };
        assert!(ptr.is_some());
    }

    #[test]
    #[should_panic]
    fn destroy_pool_rejects_default_handle() {
        AllocHandle::default_allocator().destroy_pool();
    }

    #[test]
    fn pool_exhaustion_scenario() {
        let mut handle = AllocHandle::new_pool(64, 4).unwrap();
        let chunks: Vec<_> = (0..4).map(|_| handle.allocate(64).unwrap()).collect();
        assert!(handle.allocate(64).is_none());
        for c in chunks {
            unsafe { handle.free(Some(c), 64) };
        }
        assert!(handle.allocate(64).is_some());
    }
}
