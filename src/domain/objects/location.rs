use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifies one side of a comparison: a scheme plus a path, in the shape
/// of an editor resource URI. A location is a reference into editor state or
/// the filesystem; it never owns the content it points at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceLocation {
    scheme: String,
    path: PathBuf,
}

impl SourceLocation {
    pub fn new(scheme: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        SourceLocation {
            scheme: scheme.into(),
            path: path.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new("file", path)
    }

    pub fn untitled(name: impl Into<PathBuf>) -> Self {
        Self::new("untitled", name)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the location refers to a plain filesystem path.
    pub fn is_file(&self) -> bool {
        self.scheme == "file"
    }

    /// File stem used when naming the scratch copy of this side, so the
    /// external tool shows a recognizable label instead of a random token.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string())
    }

    /// Extension including the leading dot, or empty when there is none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.path.display())
    }
}
