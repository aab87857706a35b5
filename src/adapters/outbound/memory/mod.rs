/// In-memory adapters
mod collecting_logger;

pub use collecting_logger::{CollectingRestoreLogger, TeeRestoreLogger};
