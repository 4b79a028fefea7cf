//! Repository port for policy and opening-book documents.

use std::path::Path;

use crate::{
    Result,
    policy::{OpeningBook, PolicyDocument},
};

/// Port for loading (and, for fixtures, saving) training output.
///
/// # Examples
///
/// ```no_run
/// use hexuki::ports::PolicyRepository;
/// use std::path::Path;
///
/// fn state_count<R: PolicyRepository>(repo: &R, path: &Path) -> hexuki::Result<usize> {
///     Ok(repo.load_policy(path)?.database.len())
/// }
/// ```
pub trait PolicyRepository {
    /// Load a policy document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid policy document
    fn load_policy(&self, path: &Path) -> Result<PolicyDocument>;

    /// Load an opening book.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid opening
    /// book.
    fn load_opening_book(&self, path: &Path) -> Result<OpeningBook>;

    /// Save a policy document.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization
    /// fails.
    fn save_policy(&self, document: &PolicyDocument, path: &Path) -> Result<()>;
}
