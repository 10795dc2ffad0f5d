//! Keyframe animation data for Marionette.
//!
//! Tracks carry sampled channels addressed at scene nodes by [`NodeHandle`].
//! The sample arrays are reference counted and never mutated, so a clip and
//! every retargeted copy of it share the same keyframe storage.
//!
//! [`NodeHandle`]: marionette_core::NodeHandle

pub mod binding;
pub mod clip;
pub mod retarget;
pub mod tracks;
pub mod values;

pub use binding::TargetPath;
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use retarget::UnresolvedTrackPolicy;
pub use tracks::{InterpolationMode, KeyframeTrack};
pub use values::MorphWeightData;
