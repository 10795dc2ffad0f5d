use glam::Affine3A;
use marionette_core::{MarionetteError, NodeHandle, Result, SkeletonKey};
use uuid::Uuid;

use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Bones follow the skinned node (the usual character case).
    Attached,
    /// Bones are evaluated against the bind matrix recorded at bind time.
    Detached,
}

/// Attaches a skeleton to a node, turning it into a skinned mesh node.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinBinding {
    pub skeleton: SkeletonKey,
    pub bind_mode: BindMode,
    /// World matrix of the skinned node at bind time.
    pub bind_matrix: Affine3A,
    pub bind_matrix_inv: Affine3A,
}

impl SkinBinding {
    #[must_use]
    pub fn new(skeleton: SkeletonKey, bind_mode: BindMode, bind_matrix: Affine3A) -> Self {
        Self {
            skeleton,
            bind_mode,
            bind_matrix,
            bind_matrix_inv: bind_matrix.inverse(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skeleton {
    pub id: Uuid,
    pub name: String,

    // bones[i] is joint i. The skeleton does not own these nodes.
    pub bones: Vec<NodeHandle>,

    // Rest pose: mesh space -> bone local space, one per bone.
    pub(crate) inverse_bind_matrices: Vec<Affine3A>,

    pub(crate) root_bone_index: usize,
}

impl Skeleton {
    /// # Panics
    /// If `inverse_bind_matrices` and `bones` differ in length.
    #[must_use]
    pub fn new(
        name: &str,
        bones: Vec<NodeHandle>,
        inverse_bind_matrices: Vec<Affine3A>,
        root_bone_index: usize,
    ) -> Self {
        assert_eq!(
            bones.len(),
            inverse_bind_matrices.len(),
            "skeleton '{name}' needs one inverse bind matrix per bone"
        );

        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bones,
            inverse_bind_matrices,
            root_bone_index,
        }
    }

    /// Builds a skeleton whose rest pose is the bones' current world pose.
    pub fn from_bones(scene: &Scene, name: &str, bones: Vec<NodeHandle>) -> Result<Self> {
        let inverse_bind_matrices = bones
            .iter()
            .map(|&bone| {
                scene
                    .world_matrix(bone)
                    .map(|m| m.inverse())
                    .ok_or(MarionetteError::NodeNotFound(bone))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(name, bones, inverse_bind_matrices, 0))
    }

    /// A fresh skeleton (new id) over `bones`, with this skeleton's name,
    /// rest pose and root index copied.
    pub(crate) fn with_bones(&self, bones: Vec<NodeHandle>) -> Self {
        debug_assert_eq!(bones.len(), self.bones.len());
        Self {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            bones,
            inverse_bind_matrices: self.inverse_bind_matrices.clone(),
            root_bone_index: self.root_bone_index,
        }
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    #[inline]
    #[must_use]
    pub fn inverse_bind_matrices(&self) -> &[Affine3A] {
        &self.inverse_bind_matrices
    }

    #[inline]
    #[must_use]
    pub fn root_bone(&self) -> Option<NodeHandle> {
        self.bones.get(self.root_bone_index).copied()
    }

    #[inline]
    #[must_use]
    pub fn bone_index(&self, bone: NodeHandle) -> Option<usize> {
        self.bones.iter().position(|&b| b == bone)
    }
}
