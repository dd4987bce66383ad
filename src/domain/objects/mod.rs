pub mod comparison;
pub mod content_source;
pub mod location;
pub mod outcome;
