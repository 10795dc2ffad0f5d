//! Error Types
//!
//! This module defines the error types used throughout Marionette.
//!
//! # Overview
//!
//! The main error type [`MarionetteError`] covers:
//! - Stale node or skeleton handles
//! - Structural mismatches found while cloning a subtree (child counts that
//!   differ between source and copy, bones or track targets that fall outside
//!   the cloned subtree)
//! - Malformed keyframe tracks
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, MarionetteError>`.
//!
//! ```rust,ignore
//! use marionette::core::{MarionetteError, Result};
//!
//! fn duplicate(scene: &mut Scene, root: NodeHandle) -> Result<NodeHandle> {
//!     SkeletonUtils::clone(scene, root, None, &mut Vec::new())
//! }
//! ```

use thiserror::Error;

use crate::{NodeHandle, SkeletonKey};

/// The main error type for Marionette.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarionetteError {
    // ========================================================================
    // Handle Errors
    // ========================================================================
    /// The node handle does not refer to a live node.
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeHandle),

    /// The skeleton key does not refer to a live skeleton.
    #[error("Skeleton not found: {0:?}")]
    SkeletonNotFound(SkeletonKey),

    // ========================================================================
    // Cloning Errors
    // ========================================================================
    /// A source subtree and its copy do not correspond, or a reference could
    /// not be resolved through the correspondence index.
    #[error("Structural mismatch: {kind}")]
    StructuralMismatch {
        /// What exactly failed to correspond
        kind: MismatchKind,
    },

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// Keyframe track data is inconsistent (e.g. value count vs. time count).
    #[error("Invalid keyframe track: {0}")]
    InvalidTrack(String),
}

/// Detail for [`MarionetteError::StructuralMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// A node pair visited in lockstep has a different number of children.
    ChildCount {
        source: NodeHandle,
        clone: NodeHandle,
        source_children: usize,
        clone_children: usize,
    },
    /// A skeleton bone is not part of the cloned subtree.
    UnresolvedBone {
        skeleton: String,
        bone_index: usize,
        bone: NodeHandle,
    },
    /// An animation track targets a node that is not part of the cloned subtree.
    UnresolvedTrackTarget {
        clip: String,
        track_index: usize,
        node: NodeHandle,
    },
}

impl std::fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchKind::ChildCount {
                source,
                clone,
                source_children,
                clone_children,
            } => write!(
                f,
                "node {source:?} has {source_children} children but its copy {clone:?} has {clone_children}"
            ),
            MismatchKind::UnresolvedBone {
                skeleton,
                bone_index,
                bone,
            } => write!(
                f,
                "bone #{bone_index} ({bone:?}) of skeleton '{skeleton}' lies outside the cloned subtree"
            ),
            MismatchKind::UnresolvedTrackTarget {
                clip,
                track_index,
                node,
            } => write!(
                f,
                "track #{track_index} of clip '{clip}' targets {node:?}, which lies outside the cloned subtree"
            ),
        }
    }
}

impl MarionetteError {
    /// Shorthand for building a [`MarionetteError::StructuralMismatch`].
    #[inline]
    #[must_use]
    pub fn mismatch(kind: MismatchKind) -> Self {
        MarionetteError::StructuralMismatch { kind }
    }

    /// Returns `true` for any structural-mismatch failure.
    #[inline]
    #[must_use]
    pub fn is_structural_mismatch(&self) -> bool {
        matches!(self, MarionetteError::StructuralMismatch { .. })
    }
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
