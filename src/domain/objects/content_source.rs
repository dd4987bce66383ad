use crate::domain::areas::editor::Editor;
use crate::domain::objects::location::SourceLocation;
use derive_new::new;

/// One side of a comparison, resolved to its current text on demand.
#[derive(new)]
pub struct ContentSource<'a> {
    location: &'a SourceLocation,
}

impl ContentSource<'_> {
    /// Retrieval chain: a live editor buffer captures unsaved edits, a plain
    /// file location is read from disk, anything else is materialized
    /// through the host. A side that cannot be read diffs as empty content
    /// rather than aborting the run.
    pub async fn read_text(&self, editor: &dyn Editor) -> String {
        if let Some(text) = editor.open_document_text(self.location) {
            return text;
        }

        if self.location.is_file() {
            return match tokio::fs::read_to_string(self.location.path()).await {
                Ok(text) => text,
                Err(error) => {
                    tracing::warn!(
                        location = %self.location,
                        %error,
                        "failed to read comparison side, diffing empty content"
                    );
                    String::new()
                }
            };
        }

        match editor.materialize_document(self.location).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(
                    location = %self.location,
                    %error,
                    "failed to materialize comparison side, diffing empty content"
                );
                String::new()
            }
        }
    }
}
