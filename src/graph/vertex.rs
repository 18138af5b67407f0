//! `VertexId`: a strong, zero-cost handle for graph vertices
//!
//! Every vertex of a model is represented by a dense integer index wrapped
//! in an opaque newtype. Models hand out `VertexId`s through their vertex
//! sequence; only ids obtained that way are guaranteed to be valid for the
//! model that produced them.
//!
//! This module provides:
//! - A transparent `VertexId` newtype around `usize` for zero-cost layout
//!   guarantees.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so `VertexId` can be used in maps, sets, auxiliary
//!   arrays, and printed easily.

use std::fmt;

/// Dense integer identity of a graph vertex.
///
/// # Memory layout
/// This type is `repr(transparent)`: it has the same ABI and alignment as
/// its single `usize` field.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates a `VertexId` from a raw index.
    ///
    /// Any index is representable; whether it names a vertex is decided by
    /// the model it is used with (`0 <= index < vertex_count`).
    #[inline]
    pub const fn new(raw: usize) -> Self {
        VertexId(raw)
    }

    /// Returns the inner index of this `VertexId`.
    ///
    /// Cheap, const-time getter. Use it to address auxiliary arrays or to
    /// print the raw integer; prefer to work with `VertexId` otherwise.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(raw: usize) -> Self {
        VertexId(raw)
    }
}

/// Iterator over the dense vertex range `[0, n)` of a model.
///
/// Both bundled models key their vertices by consecutive integers, so the
/// vertex sequence is a mapped counting range.
pub type VertexRange = std::iter::Map<std::ops::Range<usize>, fn(usize) -> VertexId>;

/// Builds the lazy, restartable sequence `0, 1, …, n-1`.
#[inline]
pub(crate) fn vertex_range(n: usize) -> VertexRange {
    (0..n).map(VertexId::new as fn(usize) -> VertexId)
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Custom `Debug` implementation to display as `VertexId(raw_value)`.
impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.0).finish()
    }
}

/// Custom `Display` implementation to print only the raw index.
impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `VertexId` has the same size as `usize`.
    use super::*;
    use static_assertions::assert_eq_size;

    // If this fails, our repr(transparent) guarantee is broken!
    assert_eq_size!(VertexId, usize);
}


#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let v = VertexId::new(123);
        let s = serde_json::to_string(&v).unwrap();
        let v2: VertexId = serde_json::from_str(&s).unwrap();
        assert_eq!(v2, v);
    }

    #[test]
    fn bincode_roundtrip() {
        let v = VertexId::new(456);
        let bytes = bincode::serialize(&v).unwrap();
        let v2: VertexId = bincode::deserialize(&bytes).unwrap();
        assert_eq!(v2, v);
    }
}

#[cfg(test)]
mod abi_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    #[test]
    fn alignment_matches_usize() {
        assert_eq_align!(VertexId, usize);
    }

    #[test]
    fn size_matches_usize() {
        assert_eq_size!(VertexId, usize);
    }
}
