//! A headless, intrusive, singly-linked LIFO stack.
//!
//! Used exclusively by the pool allocator's free list (the heap uses the
//! doubly-linked, size-sorted list in `llist` instead). Unlike `llist`,
//! there is no sentinel: `SlistNode::next == null` marks list end.
//!
//! ### Safety
//! As with `llist`, every method is unsafe: nodes are written in place over
//! caller-supplied memory and must never be moved while linked.
#[derive(Debug)]
pub(crate) struct SlistNode {
    pub next: *mut SlistNode,
}

impl SlistNode {
    /// Push `entry` onto the front of the list rooted at `list`.
    ///
    /// # Safety
    /// `list` and `entry` must be valid for reads and writes.
    #[inline]
    pub unsafe fn push(list: *mut SlistNode, entry: *mut SlistNode) {
        (*entry).next = (*list).next;
        (*list).next = entry;
    }

    /// Pop the front node off the list rooted at `list`, or return null if empty.
    ///
    /// # Safety
    /// `list` must be valid for reads and writes.
    #[inline]
    pub unsafe fn pop(list: *mut SlistNode) -> *mut SlistNode {
        let first = (*list).next;
        if !first.is_null() {
            (*list).next = (*first).next;
        }
        first
    }
}
