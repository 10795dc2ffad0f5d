use glam::{Quat, Vec3};
use marionette_core::NodeHandle;

use crate::binding::TargetPath;
use crate::tracks::{InterpolationMode, KeyframeTrack};
use crate::values::MorphWeightData;

/// Which node and which of its properties a track animates.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMeta {
    pub node: NodeHandle,
    pub target: TargetPath,
}

/// Concrete channel kind. Each variant keeps its own value type because the
/// properties they drive are updated differently (lerp, slerp, per-target
/// weights).
#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
    Scalar(KeyframeTrack<f32>),
    MorphWeights(KeyframeTrack<MorphWeightData>),
}

macro_rules! each_track {
    ($data:expr, $track:ident => $body:expr) => {
        match $data {
            TrackData::Vector3($track) => $body,
            TrackData::Quaternion($track) => $body,
            TrackData::Scalar($track) => $body,
            TrackData::MorphWeights($track) => $body,
        }
    };
}

impl TrackData {
    #[must_use]
    pub fn times(&self) -> &[f32] {
        each_track!(self, t => &t.times[..])
    }

    #[must_use]
    pub fn interpolation(&self) -> InterpolationMode {
        each_track!(self, t => t.interpolation)
    }

    #[must_use]
    pub fn keyframe_count(&self) -> usize {
        each_track!(self, t => t.keyframe_count())
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        each_track!(self, t => t.duration())
    }

    pub fn validate(&self) -> marionette_core::Result<()> {
        each_track!(self, t => t.validate())
    }

    /// True when `other` is the same variant and reads from the same sample
    /// buffers.
    #[must_use]
    pub fn shares_samples_with(&self, other: &TrackData) -> bool {
        match (self, other) {
            (TrackData::Vector3(a), TrackData::Vector3(b)) => a.shares_samples_with(b),
            (TrackData::Quaternion(a), TrackData::Quaternion(b)) => a.shares_samples_with(b),
            (TrackData::Scalar(a), TrackData::Scalar(b)) => a.shares_samples_with(b),
            (TrackData::MorphWeights(a), TrackData::MorphWeights(b)) => {
                a.shares_samples_with(b)
            }
            _ => false,
        }
    }
}

/// Complete track definition: metadata plus keyframe data.
#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

impl Track {
    #[must_use]
    pub fn new(node: NodeHandle, target: TargetPath, data: TrackData) -> Self {
        Self {
            meta: TrackMeta { node, target },
            data,
        }
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> NodeHandle {
        self.meta.node
    }

    /// Builds a track of the same kind that animates `node` instead.
    ///
    /// The keyframe buffers are shared with `self`, not copied.
    #[must_use]
    pub fn retargeted(&self, node: NodeHandle) -> Track {
        Track {
            meta: TrackMeta {
                node,
                target: self.meta.target,
            },
            data: self.data.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Creates a clip whose duration is the latest keyframe over all tracks.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.duration())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Creates a clip with an explicit duration.
    #[must_use]
    pub fn with_duration(name: impl Into<String>, duration: f32, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Returns the first clip called `name`.
    #[must_use]
    pub fn find_by_name<'a>(clips: &'a [AnimationClip], name: &str) -> Option<&'a AnimationClip> {
        clips.iter().find(|c| c.name == name)
    }

    /// Handles of every node this clip animates, in track order, without
    /// duplicates.
    #[must_use]
    pub fn target_nodes(&self) -> Vec<NodeHandle> {
        let mut nodes: Vec<NodeHandle> = Vec::with_capacity(self.tracks.len());
        for track in &self.tracks {
            if !nodes.contains(&track.meta.node) {
                nodes.push(track.meta.node);
            }
        }
        nodes
    }
}
