//! Storage-backed graph models.

pub mod dense;

pub use dense::{DenseGraph, DenseWeightMap};
