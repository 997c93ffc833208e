use crate::shared::Result;

/// OutputPresenter port for delivering rendered documents
///
/// Implementations write to a file or to stdout.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if the destination cannot be written, or if it is
    /// a symlink
    fn present(&self, content: &str) -> Result<()>;
}
