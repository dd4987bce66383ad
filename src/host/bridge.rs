use crate::domain::areas::editor::{Editor, ScmProvider};
use crate::domain::objects::comparison::TabPayload;
use crate::domain::objects::location::SourceLocation;
use crate::host::payload::HostPayload;
use anyhow::anyhow;
use async_trait::async_trait;
use derive_new::new;
use std::path::PathBuf;

/// Editor and SCM collaborators backed by one host state snapshot.
#[derive(Debug, Clone, new)]
pub struct HostBridge {
    payload: HostPayload,
}

#[async_trait(?Send)]
impl Editor for HostBridge {
    fn active_diff_tab(&self) -> Option<TabPayload> {
        self.payload.tab.clone()
    }

    fn open_document_text(&self, location: &SourceLocation) -> Option<String> {
        self.payload
            .documents
            .iter()
            .find(|document| document.location == *location)
            .map(|document| document.text.clone())
    }

    async fn materialize_document(&self, location: &SourceLocation) -> anyhow::Result<String> {
        // The snapshot is all this bridge has; a location outside it cannot
        // be opened after the handoff.
        self.open_document_text(location)
            .ok_or_else(|| anyhow!("document {location} is not part of the host snapshot"))
    }
}

impl ScmProvider for HostBridge {
    fn repository_roots(&self) -> Vec<PathBuf> {
        self.payload.repositories.clone()
    }
}
