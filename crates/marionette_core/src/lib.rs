//! Foundational types shared by every Marionette crate.
//!
//! - [`NodeHandle`] / [`SkeletonKey`]: stable arena keys. Node identity is the
//!   key itself, so two value-identical subtrees never compare equal.
//! - [`errors`]: the [`MarionetteError`] type and its [`Result`] alias.

pub mod errors;

pub use errors::{MarionetteError, MismatchKind, Result};

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a node stored in a scene arena.
    pub struct NodeHandle;
    /// Handle to a skeleton stored in a scene.
    pub struct SkeletonKey;
}
