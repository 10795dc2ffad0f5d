//! Scene graph module
//!
//! Manages the node hierarchy and its components:
//! - [`Node`]: hierarchy links, local transform, visibility
//! - [`Scene`]: node arena plus name / mesh / skin component maps and the
//!   skeleton arena
//! - [`Skeleton`] / [`SkinBinding`]: skinning data
//! - [`traverse`]: preorder and lockstep (paired) walks
//! - [`CorrespondenceIndex`]: source <-> copy node mapping
//! - [`SkeletonUtils`]: structure-preserving cloning with skeleton and clip
//!   rebinding

pub mod correspondence;
pub mod mesh;
pub mod node;
pub mod options;
pub mod rebind;
pub mod scene;
pub mod skeleton;
pub mod skeleton_utils;
pub mod transform;
pub mod traverse;

pub use correspondence::CorrespondenceIndex;
pub use marionette_animation::UnresolvedTrackPolicy;
pub use marionette_core::{NodeHandle, SkeletonKey};
pub use mesh::Mesh;
pub use node::Node;
pub use options::CloneOptions;
pub use rebind::{rebind_skeletons, retarget_clips};
pub use scene::Scene;
pub use skeleton::{BindMode, Skeleton, SkinBinding};
pub use skeleton_utils::SkeletonUtils;
pub use transform::Transform;
