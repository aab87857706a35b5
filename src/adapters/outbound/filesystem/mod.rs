/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod no_op_cache;
mod vulnerability_file_provider;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use no_op_cache::FileSystemNoOpCache;
pub use vulnerability_file_provider::VulnerabilityFileProvider;
