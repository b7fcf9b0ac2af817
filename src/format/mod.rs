//! JSON persistence for graphs.

pub mod reader;
pub mod snapshot;
pub mod writer;

pub use reader::GraphReader;
pub use snapshot::{EdgeRecord, GraphSnapshot};
pub use writer::GraphWriter;
