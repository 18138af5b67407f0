//! Read-only property maps: function-like lookups attaching an attribute
//! value to a graph element, independent of how (or whether) the value is
//! stored.
//!
//! A property map may compute its values on demand from the key alone (the
//! ring model's edge weights), or borrow them out of per-element storage
//! (the dense model's payloads). Algorithms only see the lookup.

/// Read-only lookup from a graph element to an attribute value.
pub trait PropertyMap<K> {
    /// The attribute value type.
    type Value;

    /// Looks up the value for `key`.
    ///
    /// Total over every structurally valid key of the owning model; keys
    /// that do not belong to the model are a caller precondition violation.
    fn get(&self, key: K) -> Self::Value;
}
