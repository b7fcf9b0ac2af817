//! Writes graphs as JSON documents.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::error::GraphResult;

use super::GraphSnapshot;

/// Writer for JSON graph files.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a writer producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Render a graph to a JSON string.
    pub fn to_string<T, W>(&self, graph: &Graph<T, W>) -> GraphResult<String>
    where
        T: Clone + Serialize,
        W: Copy + Serialize,
    {
        let snapshot = GraphSnapshot::from_graph(graph);
        let text = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(text)
    }

    /// Write a graph to any writer.
    pub fn write_to<T, W>(&self, graph: &Graph<T, W>, writer: &mut impl Write) -> GraphResult<()>
    where
        T: Clone + Serialize,
        W: Copy + Serialize,
    {
        let text = self.to_string(graph)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to a file, replacing any existing content.
    pub fn write_to_file<T, W>(&self, graph: &Graph<T, W>, path: &Path) -> GraphResult<()>
    where
        T: Clone + Serialize,
        W: Copy + Serialize,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        log::debug!(
            "wrote {} nodes / {} edges to {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(())
    }
}
