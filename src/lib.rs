//! # Marionette
//!
//! Scene-graph duplication for skinned and animated hierarchies.
//!
//! Copying a character is more than copying nodes: its skeleton must point
//! at the *copied* bones and its animation clips must drive the *copied*
//! nodes. [`SkeletonUtils::clone`] does exactly that, without touching the
//! source.
//!
//! ```rust,ignore
//! use marionette::prelude::*;
//!
//! let mut scene = Scene::new();
//! // ... build or load `hero` and its `clips` ...
//! let mut hero_clips = Vec::new();
//! let twin = SkeletonUtils::clone(&mut scene, hero, Some(&clips), &mut hero_clips)?;
//! scene.add_to_roots(twin);
//! ```
//!
//! Crates:
//! - [`core`]: handles and errors
//! - [`animation`]: keyframe tracks and clips
//! - [`scene`]: scene graph, skeletons, traversal, cloning

pub use marionette_animation as animation;
pub use marionette_core as core;
pub use marionette_scene as scene;

pub use marionette_animation::{AnimationClip, Track, TrackData};
pub use marionette_core::{MarionetteError, NodeHandle, Result, SkeletonKey};
pub use marionette_scene::{CloneOptions, CorrespondenceIndex, Scene, SkeletonUtils};

pub mod prelude {
    pub use marionette_animation::{
        AnimationClip, InterpolationMode, KeyframeTrack, MorphWeightData, TargetPath, Track,
        TrackData, UnresolvedTrackPolicy,
    };
    pub use marionette_core::{MarionetteError, MismatchKind, NodeHandle, Result, SkeletonKey};
    pub use marionette_scene::{
        BindMode, CloneOptions, CorrespondenceIndex, Mesh, Node, Scene, Skeleton, SkeletonUtils,
        SkinBinding, Transform,
    };

    pub use glam::{Affine3A, Quat, Vec3};
}
