//! Reads JSON documents into in-memory graphs.

use std::fmt::Debug;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::graph::Graph;
use crate::types::error::GraphResult;

use super::GraphSnapshot;

/// Reader for JSON graph files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file.
    pub fn read_from_file<T, W>(path: &Path) -> GraphResult<Graph<T, W>>
    where
        T: PartialEq + Debug + DeserializeOwned,
        W: Copy + PartialEq + DeserializeOwned,
    {
        let text = std::fs::read_to_string(path)?;
        let graph = Self::parse(&text)?;
        log::debug!(
            "read {} nodes / {} edges from {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read from any reader.
    pub fn read_from<T, W>(reader: &mut impl Read) -> GraphResult<Graph<T, W>>
    where
        T: PartialEq + Debug + DeserializeOwned,
        W: Copy + PartialEq + DeserializeOwned,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse a JSON document.
    pub fn parse<T, W>(text: &str) -> GraphResult<Graph<T, W>>
    where
        T: PartialEq + Debug + DeserializeOwned,
        W: Copy + PartialEq + DeserializeOwned,
    {
        let snapshot: GraphSnapshot<T, W> = serde_json::from_str(text)?;
        snapshot.into_graph()
    }
}
