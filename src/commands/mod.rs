//! Command implementations.
//!
//! There is a single porcelain command, `open-difftool`, exposed through the
//! host's command surface. It composes the content resolver, the scratch
//! store and the tool invocation into one run.

pub mod porcelain;
