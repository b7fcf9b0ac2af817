//! All data types for the adjgraph library.

pub mod edge;
pub mod error;
pub mod handle;
pub mod node;

pub use edge::Edge;
pub use error::{ErrorKind, GraphError, GraphResult};
pub use handle::{NodeId, NodeKey};
pub use node::Node;

/// Current version of the JSON snapshot document.
pub const FORMAT_VERSION: u32 = 1;

/// Default number of node slots reserved by `GraphBuilder`.
pub const DEFAULT_CAPACITY: usize = 16;
