//! Skeleton and animation rebinding onto a cloned subtree.

use marionette_animation::{AnimationClip, UnresolvedTrackPolicy};
use marionette_core::{MarionetteError, MismatchKind, NodeHandle, Result};

use crate::correspondence::CorrespondenceIndex;
use crate::scene::Scene;
use crate::skeleton::{Skeleton, SkinBinding};

/// Gives every skinned node of the clone tree its own skeleton whose bones
/// are the clone-tree counterparts of the source bones.
///
/// The placeholder binding left by [`Scene::deep_copy`] is replaced. Bind
/// matrices and inverse bind matrices are copied by value. All replacements
/// are computed before any is installed, so on error the scene is unchanged.
///
/// Returns the number of skeletons created.
pub fn rebind_skeletons(scene: &mut Scene, index: &CorrespondenceIndex) -> Result<usize> {
    let mut rebound: Vec<(NodeHandle, Skeleton, SkinBinding)> = Vec::new();

    for clone in index.clone_nodes() {
        if !scene.skins.contains_key(clone) {
            continue;
        }
        let Some(source) = index.source_of(clone) else {
            continue;
        };
        let Some(source_binding) = scene.skins.get(source).or_else(|| scene.skins.get(clone))
        else {
            continue;
        };

        let source_skeleton = scene
            .skeletons
            .get(source_binding.skeleton)
            .ok_or(MarionetteError::SkeletonNotFound(source_binding.skeleton))?;

        let bones = source_skeleton
            .bones
            .iter()
            .enumerate()
            .map(|(bone_index, &bone)| {
                index.clone_of(bone).ok_or_else(|| {
                    MarionetteError::mismatch(MismatchKind::UnresolvedBone {
                        skeleton: source_skeleton.name.clone(),
                        bone_index,
                        bone,
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        rebound.push((
            clone,
            source_skeleton.with_bones(bones),
            source_binding.clone(),
        ));
    }

    let count = rebound.len();
    for (clone, skeleton, mut binding) in rebound {
        binding.skeleton = scene.skeletons.insert(skeleton);
        scene.skins.insert(clone, binding);
    }

    Ok(count)
}

/// Appends one retargeted copy of each clip in `clips` to `output`, in input
/// order, with every track target mapped through `index`.
///
/// `None` or an empty slice appends nothing. Either every clip is appended or,
/// on error, none is.
///
/// Returns the number of clips appended.
pub fn retarget_clips(
    index: &CorrespondenceIndex,
    clips: Option<&[AnimationClip]>,
    output: &mut Vec<AnimationClip>,
    policy: UnresolvedTrackPolicy,
) -> Result<usize> {
    let Some(clips) = clips else {
        return Ok(0);
    };

    let retargeted = clips
        .iter()
        .map(|clip| clip.retarget_with(|node| index.clone_of(node), policy))
        .collect::<Result<Vec<_>>>()?;

    let count = retargeted.len();
    output.extend(retargeted);
    Ok(count)
}
