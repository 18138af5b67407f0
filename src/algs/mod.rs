//! Generic algorithms written once against the protocol traits.

pub mod circuits;
pub mod shortest_path;
pub mod topo;
pub mod traversal;

pub use circuits::{circuits, unique_circuits};
pub use shortest_path::dijkstra;
pub use topo::topological_sort;
pub use traversal::{TraversalVisitor, breadth_first_search, depth_first_search};
