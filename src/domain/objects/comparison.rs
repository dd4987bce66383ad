use crate::domain::objects::location::SourceLocation;
use serde::Deserialize;

/// Raw input of the active tab as the host hands it over. The host does not
/// tag which diff-view flavor the tab is; every field a known flavor might
/// carry is optional and the flavor is recovered structurally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TabPayload {
    pub original: Option<SourceLocation>,
    pub modified: Option<SourceLocation>,
    pub left: Option<SidePayload>,
    pub right: Option<SidePayload>,
    pub left_location: Option<SourceLocation>,
    pub right_location: Option<SourceLocation>,
}

/// One side object of the `{left, right}` tab flavor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SidePayload {
    pub location: Option<SourceLocation>,
}

/// A recognized two-sided comparison view. The three variants mirror the tab
/// flavors the host is known to produce for diff views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonView {
    OriginalModified {
        original: SourceLocation,
        modified: SourceLocation,
    },
    SidePair {
        left: SourceLocation,
        right: SourceLocation,
    },
    LocationPair {
        left: SourceLocation,
        right: SourceLocation,
    },
}

impl ComparisonView {
    /// Applies the structural checks in order and returns `None` for any tab
    /// that is not a two-sided comparison. `None` means "not applicable",
    /// not an error; the caller skips the whole operation.
    pub fn classify(tab: &TabPayload) -> Option<Self> {
        if let (Some(original), Some(modified)) = (&tab.original, &tab.modified) {
            return Some(ComparisonView::OriginalModified {
                original: original.clone(),
                modified: modified.clone(),
            });
        }

        if let (Some(left), Some(right)) = (&tab.left, &tab.right)
            && let (Some(left_location), Some(right_location)) = (&left.location, &right.location)
        {
            return Some(ComparisonView::SidePair {
                left: left_location.clone(),
                right: right_location.clone(),
            });
        }

        if let (Some(left), Some(right)) = (&tab.left_location, &tab.right_location) {
            return Some(ComparisonView::LocationPair {
                left: left.clone(),
                right: right.clone(),
            });
        }

        None
    }

    /// The `(original, modified)` pair, regardless of which flavor the host
    /// used to describe the tab.
    pub fn sides(&self) -> (&SourceLocation, &SourceLocation) {
        match self {
            ComparisonView::OriginalModified { original, modified } => (original, modified),
            ComparisonView::SidePair { left, right } => (left, right),
            ComparisonView::LocationPair { left, right } => (left, right),
        }
    }
}
