use crate::shared::Result;

/// OutputPresenter port for the rendered audit report
pub trait OutputPresenter {
    /// Writes the rendered report to its destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
