use crate::library_model::domain::RestoreTargetGraph;
use crate::shared::error::RestoreError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TargetGraphDocument {
    graphs: Vec<RestoreTargetGraph>,
}

/// Parses a target graph document (`{ "graphs": [...] }`)
///
/// # Errors
/// Returns [`RestoreError::GraphFileParseError`] if the content is not a
/// valid document
pub fn parse_target_graphs(content: &str, path: &Path) -> Result<Vec<RestoreTargetGraph>> {
    let document: TargetGraphDocument =
        serde_json::from_str(content).map_err(|e| RestoreError::GraphFileParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
    Ok(document.graphs)
}

/// TargetGraphReader port for loading resolved graphs produced by the resolver
pub trait TargetGraphReader {
    /// Reads the raw content of a target graph file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or is too large
    /// - The file cannot be read
    fn read_graph_file(&self, path: &Path) -> Result<String>;

    /// Reads and parses a target graph file
    fn read_target_graphs(&self, path: &Path) -> Result<Vec<RestoreTargetGraph>> {
        let content = self.read_graph_file(path)?;
        parse_target_graphs(&content, path)
    }
}
