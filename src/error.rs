use core::fmt;

/// The allocator could not obtain memory from the operating system.
///
/// This is the only recoverable failure mode in this crate; every other
/// broken contract (double free, out-of-range pointer, size mismatch on a
/// pool handle) is a programmer error and is reported via `assert!`/
/// `debug_assert!` rather than this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the operating system refused to map the requested memory")
    }
}

impl std::error::Error for AllocError {}
