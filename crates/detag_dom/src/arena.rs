//! Arena allocator for document trees.

use bumpalo::Bump;

/// Arena backing one parsed document.
///
/// Nodes, tag names, and text values are all allocated here and freed
/// together when the arena is dropped, so child references stay valid for
/// the arena's lifetime without any reference counting.
pub struct DomArena {
    bump: Bump,
}

impl DomArena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a value in the arena.
    #[inline]
    pub fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Copies a string into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Copies a slice of `Copy` values into the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}
