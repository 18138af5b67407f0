//! Computed edge weights for the ring model.
//!
//! The ring stores nothing per edge: the weight map is a stateless function
//! object that derives the weight from the descriptor alone. An edge weighs
//! the average of its endpoint indices, so edge `(2, 3)` weighs 2.5 and
//! edge `(0, 4)` weighs 2.

use crate::graph::{EdgeId, PropertyMap};

/// Stateless map from ring edges to weights.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RingWeightMap;

impl PropertyMap<EdgeId> for RingWeightMap {
    type Value = f64;

    /// Weight of `e`: the average of its endpoint indices.
    ///
    /// Total over any structurally valid descriptor, including ones never
    /// produced by iteration; no validation is performed.
    #[inline]
    fn get(&self, e: EdgeId) -> f64 {
        (e.source().index() + e.target().index()) as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    fn e(a: usize, b: usize) -> EdgeId {
        EdgeId::new(VertexId::new(a), VertexId::new(b))
    }

    #[test]
    fn averages_endpoint_indices() {
        let w = RingWeightMap;
        assert_eq!(w.get(e(0, 1)), 0.5);
        assert_eq!(w.get(e(2, 3)), 2.5);
        assert_eq!(w.get(e(0, 4)), 2.0);
        assert_eq!(w.get(e(0, 0)), 0.0);
    }

    #[test]
    fn direction_of_discovery_does_not_matter() {
        let w = RingWeightMap;
        assert_eq!(w.get(e(1, 2)), w.get(e(2, 1)));
    }

    #[test]
    fn total_over_unproduced_descriptors() {
        // (5, 9) is no ring edge anywhere, but the lookup is pure arithmetic.
        assert_eq!(RingWeightMap.get(e(5, 9)), 7.0);
    }
}
