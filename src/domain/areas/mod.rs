pub mod difftool;
pub mod editor;
pub mod launcher;
pub mod scratch;
