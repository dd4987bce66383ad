//! ediff - open the configured external diff tool on an editor diff view.
//!
//! The crate resolves the two sides of the active comparison view, snapshots
//! them as scratch files, and launches the version-control tool-chain's own
//! difftool facility on the pair, cleaning the scratch files up afterwards.
//!
//! - `domain`: the collaborator areas (editor surface, scratch store, tool
//!   invocation, launcher) and the objects that flow between them
//! - `commands`: the porcelain command composed from the areas
//! - `host`: the adapter reading the host editor's state handoff

pub mod commands;
pub mod domain;
pub mod host;
