use crate::domain::objects::comparison::TabPayload;
use crate::domain::objects::location::SourceLocation;
use async_trait::async_trait;
use std::path::PathBuf;

/// Window/tab surface of the host editor, reduced to the three capabilities
/// the launcher needs. The host runs everything on one thread, so the trait
/// stays `?Send`.
#[async_trait(?Send)]
pub trait Editor {
    /// Raw input of the currently active tab, if the host reports one.
    fn active_diff_tab(&self) -> Option<TabPayload>;

    /// Live in-memory text of a document the host already has open,
    /// unsaved edits included.
    fn open_document_text(&self, location: &SourceLocation) -> Option<String>;

    /// Ask the host to open the document abstractly and hand back its text.
    async fn materialize_document(&self, location: &SourceLocation) -> anyhow::Result<String>;
}

/// Version-control provider collaborator. Only the repository roots are
/// needed; the first one becomes the diff tool's working directory.
pub trait ScmProvider {
    fn repository_roots(&self) -> Vec<PathBuf>;
}
