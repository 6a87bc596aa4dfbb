//! Whole-document store trait for persisted configuration.

use async_trait::async_trait;

use crate::result::AppResult;

/// Loads and saves a configuration document wholesale.
///
/// The document is read in full before every mutating operation and
/// written back in full after a successful one; stores never see partial
/// updates. The trait is generic so that `cmdtree-core` stays free of
/// entity types; `cmdtree-storage` implements it for the command tree.
#[async_trait]
pub trait DocumentStore<Document>: Send + Sync + std::fmt::Debug + 'static
where
    Document: Send + Sync + 'static,
{
    /// Return a short description of the backing location (for logs and CLI output).
    fn describe(&self) -> String;

    /// Read the whole document.
    async fn load(&self) -> AppResult<Document>;

    /// Replace the whole document.
    async fn save(&self, document: &Document) -> AppResult<()>;
}
