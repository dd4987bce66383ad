//! Adapter between the host editor's state handoff and the domain
//! collaborator traits.

pub mod bridge;
pub mod payload;
