//! Clone configuration.
//!
//! ```rust,ignore
//! use marionette::scene::{CloneOptions, UnresolvedTrackPolicy};
//!
//! // Default: any track that cannot be rebound fails the clone.
//! let options = CloneOptions::default();
//!
//! // Tolerate animation of nodes outside the cloned subtree.
//! let options = CloneOptions {
//!     unresolved_tracks: UnresolvedTrackPolicy::Skip,
//!     ..Default::default()
//! };
//! ```

use marionette_animation::UnresolvedTrackPolicy;

/// Settings for [`SkeletonUtils::clone_with_options`](crate::SkeletonUtils::clone_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloneOptions {
    /// Handling of animation tracks whose target lies outside the cloned
    /// subtree. Bones outside the subtree always fail the clone.
    pub unresolved_tracks: UnresolvedTrackPolicy,
}

impl CloneOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unresolved_tracks(mut self, policy: UnresolvedTrackPolicy) -> Self {
        self.unresolved_tracks = policy;
        self
    }
}
