pub mod areas;
pub mod objects;
