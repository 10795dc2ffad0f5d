//! Animation Data Tests
//!
//! Tests for:
//! - KeyframeTrack construction, validation and shared sample storage
//! - TrackData accessors across variants
//! - AnimationClip duration auto-computation and lookup
//! - Track / clip retargeting against a resolver

use std::sync::Arc;

use glam::{Quat, Vec3};
use marionette::prelude::*;
use slotmap::SlotMap;

fn handles(n: usize) -> Vec<NodeHandle> {
    let mut arena: SlotMap<NodeHandle, ()> = SlotMap::with_key();
    (0..n).map(|_| arena.insert(())).collect()
}

fn vec3_track(times: Vec<f32>) -> TrackData {
    let values = vec![Vec3::ZERO; times.len()];
    TrackData::Vector3(KeyframeTrack::new(times, values, InterpolationMode::Linear))
}

// ============================================================================
// KeyframeTrack
// ============================================================================

#[test]
fn track_duration_is_last_key_time() {
    let track = KeyframeTrack::<f32>::new(
        vec![0.0_f32, 0.5, 2.0],
        vec![0.0_f32, 1.0, 2.0],
        InterpolationMode::Linear,
    );
    assert_eq!(track.duration(), 2.0);
    assert_eq!(track.keyframe_count(), 3);
}

#[test]
fn empty_track_has_zero_duration() {
    let track: KeyframeTrack<f32> =
        KeyframeTrack::new(Vec::<f32>::new(), Vec::<f32>::new(), InterpolationMode::Step);
    assert_eq!(track.duration(), 0.0);
    assert!(track.validate().is_ok());
}

#[test]
fn try_new_rejects_value_count_mismatch() {
    let result = KeyframeTrack::<f32>::try_new(
        vec![0.0_f32, 1.0],
        vec![0.0_f32],
        InterpolationMode::Linear,
    );
    assert!(matches!(result, Err(MarionetteError::InvalidTrack(_))));
}

#[test]
fn try_new_expects_three_values_per_cubic_key() {
    let ok = KeyframeTrack::<f32>::try_new(
        vec![0.0_f32, 1.0],
        vec![0.0_f32; 6],
        InterpolationMode::CubicSpline,
    );
    assert!(ok.is_ok());

    let bad = KeyframeTrack::<f32>::try_new(
        vec![0.0_f32, 1.0],
        vec![0.0_f32; 2],
        InterpolationMode::CubicSpline,
    );
    assert!(bad.is_err());
}

#[test]
fn try_new_rejects_decreasing_times() {
    let result = KeyframeTrack::<Quat>::try_new(
        vec![0.0_f32, 1.0, 0.5],
        vec![Quat::IDENTITY; 3],
        InterpolationMode::Linear,
    );
    assert!(matches!(result, Err(MarionetteError::InvalidTrack(_))));
}

#[test]
fn cloned_track_shares_samples() {
    let track = KeyframeTrack::<Vec3>::new(
        vec![0.0_f32, 1.0],
        vec![Vec3::ZERO, Vec3::ONE],
        InterpolationMode::Linear,
    );
    let copy = track.clone();
    assert!(copy.shares_samples_with(&track));

    let rebuilt = KeyframeTrack::<Vec3>::new(
        track.times.to_vec(),
        track.values.to_vec(),
        InterpolationMode::Linear,
    );
    assert!(!rebuilt.shares_samples_with(&track));
}

#[test]
fn tracks_can_be_built_from_existing_arcs() {
    let times: Arc<[f32]> = Arc::from(vec![0.0_f32, 1.0]);
    let a = KeyframeTrack::<f32>::new(times.clone(), vec![0.0_f32, 1.0], InterpolationMode::Linear);
    let b = KeyframeTrack::<f32>::new(times.clone(), vec![1.0_f32, 0.0], InterpolationMode::Linear);

    assert!(Arc::ptr_eq(&a.times, &b.times));
    assert!(!a.shares_samples_with(&b));
}

// ============================================================================
// TrackData
// ============================================================================

#[test]
fn track_data_accessors() {
    let data = TrackData::MorphWeights(KeyframeTrack::new(
        vec![0.0_f32, 0.25],
        vec![MorphWeightData::new(&[1.0, 0.0]), MorphWeightData::new(&[0.0, 1.0])],
        InterpolationMode::Step,
    ));

    assert_eq!(data.times(), &[0.0_f32, 0.25]);
    assert_eq!(data.interpolation(), InterpolationMode::Step);
    assert_eq!(data.keyframe_count(), 2);
    assert_eq!(data.duration(), 0.25);
    assert!(data.validate().is_ok());
}

#[test]
fn different_variants_never_share_samples() {
    let scalar = TrackData::Scalar(KeyframeTrack::new(
        vec![0.0_f32],
        vec![1.0_f32],
        InterpolationMode::Linear,
    ));
    let vector = vec3_track(vec![0.0]);
    assert!(!scalar.shares_samples_with(&vector));
    assert!(scalar.shares_samples_with(&scalar.clone()));
}

#[test]
fn morph_weight_data_len() {
    let w = MorphWeightData::new(&[0.1, 0.2, 0.3]);
    assert_eq!(w.len(), 3);
    assert!(!w.is_empty());
    assert!(MorphWeightData::default().is_empty());
}

#[test]
fn target_path_names_round_trip() {
    for path in [
        TargetPath::Translation,
        TargetPath::Rotation,
        TargetPath::Scale,
        TargetPath::Weights,
    ] {
        assert_eq!(TargetPath::from_channel_path(path.as_str()), Some(path));
        assert_eq!(path.to_string(), path.as_str());
    }
    assert_eq!(TargetPath::from_channel_path("color"), None);
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_from_longest_track() {
    let n = handles(2);
    let clip = AnimationClip::new(
        "Jump",
        vec![
            Track::new(n[0], TargetPath::Translation, vec3_track(vec![0.0, 0.8])),
            Track::new(n[1], TargetPath::Translation, vec3_track(vec![0.0, 1.2])),
        ],
    );
    assert!((clip.duration - 1.2).abs() < 1e-6);
}

#[test]
fn clip_with_explicit_duration_keeps_it() {
    let n = handles(1);
    let clip = AnimationClip::with_duration(
        "Hold",
        3.0,
        vec![Track::new(n[0], TargetPath::Scale, vec3_track(vec![0.0, 1.0]))],
    );
    assert_eq!(clip.duration, 3.0);
}

#[test]
fn clip_find_by_name() {
    let clips = vec![
        AnimationClip::new("Idle", Vec::new()),
        AnimationClip::new("Run", Vec::new()),
    ];
    assert_eq!(
        AnimationClip::find_by_name(&clips, "Run").map(|c| c.name.as_str()),
        Some("Run")
    );
    assert!(AnimationClip::find_by_name(&clips, "Swim").is_none());
}

#[test]
fn clip_target_nodes_are_unique_and_ordered() {
    let n = handles(2);
    let clip = AnimationClip::new(
        "Wave",
        vec![
            Track::new(n[1], TargetPath::Translation, vec3_track(vec![0.0])),
            Track::new(n[0], TargetPath::Scale, vec3_track(vec![0.0])),
            Track::new(n[1], TargetPath::Scale, vec3_track(vec![0.0])),
        ],
    );
    assert_eq!(clip.target_nodes(), vec![n[1], n[0]]);
}

// ============================================================================
// Retargeting
// ============================================================================

#[test]
fn retargeted_track_keeps_everything_but_the_target() {
    let n = handles(2);
    let track = Track::new(n[0], TargetPath::Rotation, vec3_track(vec![0.0, 1.0]));
    let moved = track.retargeted(n[1]);

    assert_eq!(moved.node(), n[1]);
    assert_eq!(moved.meta.target, TargetPath::Rotation);
    assert!(moved.data.shares_samples_with(&track.data));
    assert_eq!(track.node(), n[0]);
}

#[test]
fn clip_retarget_maps_every_track() -> anyhow::Result<()> {
    let n = handles(4);
    let clip = AnimationClip::with_duration(
        "Walk",
        1.5,
        vec![
            Track::new(n[0], TargetPath::Translation, vec3_track(vec![0.0, 1.5])),
            Track::new(n[1], TargetPath::Scale, vec3_track(vec![0.0, 1.5])),
        ],
    );

    let out = clip.retarget_with(
        |node| {
            if node == n[0] {
                Some(n[2])
            } else if node == n[1] {
                Some(n[3])
            } else {
                None
            }
        },
        UnresolvedTrackPolicy::Abort,
    )?;

    assert_eq!(out.name, "Walk");
    assert_eq!(out.duration, 1.5);
    assert_eq!(out.target_nodes(), vec![n[2], n[3]]);
    // The source clip is untouched.
    assert_eq!(clip.target_nodes(), vec![n[0], n[1]]);
    Ok(())
}

#[test]
fn clip_retarget_aborts_on_unresolved_target_by_default() {
    let n = handles(1);
    let clip = AnimationClip::new(
        "Walk",
        vec![Track::new(n[0], TargetPath::Translation, vec3_track(vec![0.0]))],
    );

    let err = clip
        .retarget_with(|_| None, UnresolvedTrackPolicy::default())
        .unwrap_err();
    assert!(err.is_structural_mismatch());
}
