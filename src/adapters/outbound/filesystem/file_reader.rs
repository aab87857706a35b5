use crate::ports::outbound::TargetGraphReader;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading target graph files
///
/// Reads go through the shared security checks: symbolic links, non-regular
/// files and oversized files are rejected before any content is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetGraphReader for FileSystemReader {
    fn read_graph_file(&self, path: &Path) -> Result<String> {
        read_checked_file(path, "target graph file")
    }
}
