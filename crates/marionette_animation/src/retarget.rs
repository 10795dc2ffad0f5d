//! Rebinding clips onto another set of nodes.
//!
//! The animation crate knows nothing about scenes. Callers supply a resolver
//! that maps each source target to its replacement (typically the
//! correspondence index built while cloning a subtree).

use marionette_core::{MarionetteError, MismatchKind, NodeHandle, Result};

use crate::clip::AnimationClip;

/// What to do with a track whose target has no replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedTrackPolicy {
    /// Fail the whole clip with a structural mismatch.
    #[default]
    Abort,
    /// Leave the track out of the new clip and log a warning.
    Skip,
}

impl AnimationClip {
    /// Produces a new clip whose tracks target `resolve(track.node)`.
    ///
    /// Name, duration, track order, track kind, property path, interpolation
    /// and keyframe buffers are carried over unchanged.
    pub fn retarget_with<F>(&self, mut resolve: F, policy: UnresolvedTrackPolicy) -> Result<Self>
    where
        F: FnMut(NodeHandle) -> Option<NodeHandle>,
    {
        let mut tracks = Vec::with_capacity(self.tracks.len());

        for (track_index, track) in self.tracks.iter().enumerate() {
            match resolve(track.meta.node) {
                Some(node) => tracks.push(track.retargeted(node)),
                None => match policy {
                    UnresolvedTrackPolicy::Abort => {
                        return Err(MarionetteError::mismatch(
                            MismatchKind::UnresolvedTrackTarget {
                                clip: self.name.clone(),
                                track_index,
                                node: track.meta.node,
                            },
                        ));
                    }
                    UnresolvedTrackPolicy::Skip => {
                        log::warn!(
                            "Clip '{}': dropping {} track #{} targeting {:?} (outside cloned subtree)",
                            self.name,
                            track.meta.target,
                            track_index,
                            track.meta.node
                        );
                    }
                },
            }
        }

        Ok(AnimationClip::with_duration(
            self.name.clone(),
            self.duration,
            tracks,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData};
    use slotmap::SlotMap;

    fn scalar_track(node: NodeHandle) -> Track {
        Track::new(
            node,
            TargetPath::Weights,
            TrackData::Scalar(KeyframeTrack::new(
                vec![0.0_f32, 1.0],
                vec![0.0_f32, 1.0],
                InterpolationMode::Linear,
            )),
        )
    }

    #[test]
    fn skip_policy_keeps_resolvable_tracks_in_order() {
        let mut keys: SlotMap<NodeHandle, ()> = SlotMap::with_key();
        let (a, b, c, a2, c2) = (
            keys.insert(()),
            keys.insert(()),
            keys.insert(()),
            keys.insert(()),
            keys.insert(()),
        );

        let clip = AnimationClip::with_duration(
            "mixed",
            2.0,
            vec![scalar_track(a), scalar_track(b), scalar_track(c)],
        );

        let out = clip
            .retarget_with(
                |n| match n {
                    n if n == a => Some(a2),
                    n if n == c => Some(c2),
                    _ => None,
                },
                UnresolvedTrackPolicy::Skip,
            )
            .unwrap();

        assert_eq!(out.tracks.len(), 2);
        assert_eq!(out.tracks[0].node(), a2);
        assert_eq!(out.tracks[1].node(), c2);
        assert_eq!(out.duration, 2.0);
    }

    #[test]
    fn abort_policy_reports_track_index() {
        let mut keys: SlotMap<NodeHandle, ()> = SlotMap::with_key();
        let a = keys.insert(());

        let clip = AnimationClip::new("walk", vec![scalar_track(a)]);
        let err = clip
            .retarget_with(|_| None, UnresolvedTrackPolicy::Abort)
            .unwrap_err();

        assert_eq!(
            err,
            MarionetteError::mismatch(MismatchKind::UnresolvedTrackTarget {
                clip: "walk".to_string(),
                track_index: 0,
                node: a,
            })
        );
    }
}
