/// Result alias used by every layer of the restore core.
///
/// Typed failures are [`RestoreError`](super::error::RestoreError) values
/// carried inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
