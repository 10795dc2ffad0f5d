//! Utilities for skinned hierarchies.
//!
//! The centrepiece is [`SkeletonUtils::clone`]: a copy of a subtree in which
//! every skinned node owns a skeleton made of the *copied* bones, and every
//! supplied animation clip is rebound to the copied nodes.
//!
//! ```rust,ignore
//! let mut clips = Vec::new();
//! let soldier_b = SkeletonUtils::clone(&mut scene, soldier_a, Some(&gltf_clips), &mut clips)?;
//! scene.attach(soldier_b, level_root);
//! ```

use std::collections::HashMap;
use std::hash::BuildHasher;

use marionette_animation::AnimationClip;
use marionette_core::{NodeHandle, Result, SkeletonKey};

use crate::correspondence::CorrespondenceIndex;
use crate::options::CloneOptions;
use crate::rebind::{rebind_skeletons, retarget_clips};
use crate::scene::Scene;

pub struct SkeletonUtils;

impl SkeletonUtils {
    /// Clones the subtree under `source_root` with default [`CloneOptions`].
    pub fn clone(
        scene: &mut Scene,
        source_root: NodeHandle,
        clips: Option<&[AnimationClip]>,
        output: &mut Vec<AnimationClip>,
    ) -> Result<NodeHandle> {
        Self::clone_with_options(scene, source_root, clips, output, &CloneOptions::default())
    }

    /// Clones the subtree under `source_root` and rebinds skeletons and clips
    /// to the copy.
    ///
    /// 1. structural copy ([`Scene::deep_copy`])
    /// 2. correspondence index over source and copy
    /// 3. clip retargeting (buffered)
    /// 4. skeleton rebinding
    /// 5. retargeted clips appended to `output`
    ///
    /// The returned root is detached. On error the copy is removed again,
    /// `output` is untouched, and nothing of the source subtree, its
    /// skeletons or `clips` has been modified.
    pub fn clone_with_options(
        scene: &mut Scene,
        source_root: NodeHandle,
        clips: Option<&[AnimationClip]>,
        output: &mut Vec<AnimationClip>,
        options: &CloneOptions,
    ) -> Result<NodeHandle> {
        let clone_root = scene.deep_copy(source_root)?;

        match Self::rebind_copy(scene, source_root, clone_root, clips, options) {
            Ok(mut retargeted) => {
                output.append(&mut retargeted);
                Ok(clone_root)
            }
            Err(err) => {
                log::debug!("Clone of {source_root:?} failed, discarding copy: {err}");
                scene.remove_node(clone_root);
                Err(err)
            }
        }
    }

    fn rebind_copy(
        scene: &mut Scene,
        source_root: NodeHandle,
        clone_root: NodeHandle,
        clips: Option<&[AnimationClip]>,
        options: &CloneOptions,
    ) -> Result<Vec<AnimationClip>> {
        let index = CorrespondenceIndex::build(scene, source_root, clone_root)?;

        let mut retargeted = Vec::new();
        retarget_clips(&index, clips, &mut retargeted, options.unresolved_tracks)?;

        let skeletons = rebind_skeletons(scene, &index)?;

        log::debug!(
            "Cloned {source_root:?} -> {clone_root:?}: {} nodes, {skeletons} skeletons, {} clips",
            index.len(),
            retargeted.len()
        );

        Ok(retargeted)
    }

    /// Bones of the skeleton bound to `node`, or `None` if it is not skinned.
    #[must_use]
    pub fn get_bones(scene: &Scene, node: NodeHandle) -> Option<&[NodeHandle]> {
        scene.skeleton_of(node).map(|s| s.bones.as_slice())
    }

    /// First bone of `skeleton` whose node is named `name`.
    #[must_use]
    pub fn get_bone_by_name(scene: &Scene, skeleton: SkeletonKey, name: &str) -> Option<NodeHandle> {
        scene
            .get_skeleton(skeleton)?
            .bones
            .iter()
            .copied()
            .find(|&bone| scene.get_name(bone) == Some(name))
    }

    /// Renames the bone nodes of `skeleton` through an `old name -> new name`
    /// table. Bones without an entry keep their name.
    ///
    /// Returns the number of bones renamed.
    pub fn rename_bones<S: BuildHasher>(
        scene: &mut Scene,
        skeleton: SkeletonKey,
        names: &HashMap<String, String, S>,
    ) -> usize {
        let Some(bones) = scene.get_skeleton(skeleton).map(|s| s.bones.clone()) else {
            return 0;
        };

        let mut renamed = 0;
        for bone in bones {
            let new_name = scene
                .get_name(bone)
                .and_then(|old| names.get(old))
                .cloned();
            if let Some(new_name) = new_name {
                scene.set_name(bone, &new_name);
                renamed += 1;
            }
        }
        renamed
    }
}
