use crate::domain::objects::comparison::TabPayload;
use crate::domain::objects::location::SourceLocation;
use serde::Deserialize;
use std::path::PathBuf;

/// Snapshot of host editor state handed over when the command fires: the
/// active tab's raw input, the open documents with their live text, and the
/// repository roots the version-control provider currently knows about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostPayload {
    pub tab: Option<TabPayload>,
    pub documents: Vec<DocumentSnapshot>,
    pub repositories: Vec<PathBuf>,
}

/// An open document and its live text, unsaved edits included.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSnapshot {
    pub location: SourceLocation,
    pub text: String,
}
