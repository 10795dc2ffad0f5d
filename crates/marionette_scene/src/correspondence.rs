//! Positional node correspondence between a subtree and its copy.

use marionette_core::{NodeHandle, Result};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::node::Node;
use crate::scene::Scene;
use crate::traverse;

/// Bidirectional source <-> clone node mapping.
///
/// Both directions are filled in the same lockstep walk and are keyed by
/// handle, never by node contents: two identical sibling subtrees still map
/// to their own counterparts. An index belongs to a single clone operation.
#[derive(Debug, Clone)]
pub struct CorrespondenceIndex {
    source_to_clone: FxHashMap<NodeHandle, NodeHandle>,
    clone_to_source: FxHashMap<NodeHandle, NodeHandle>,
    // Preorder, for deterministic iteration.
    pairs: Vec<(NodeHandle, NodeHandle)>,
}

impl CorrespondenceIndex {
    /// Builds the index for two subtrees of the same scene.
    pub fn build(scene: &Scene, source_root: NodeHandle, clone_root: NodeHandle) -> Result<Self> {
        Self::build_across(&scene.nodes, source_root, &scene.nodes, clone_root)
    }

    /// Builds the index for two subtrees that may live in different arenas.
    ///
    /// Fails with a structural mismatch if the trees are not isomorphic.
    pub fn build_across(
        source_nodes: &SlotMap<NodeHandle, Node>,
        source_root: NodeHandle,
        clone_nodes: &SlotMap<NodeHandle, Node>,
        clone_root: NodeHandle,
    ) -> Result<Self> {
        let mut index = Self {
            source_to_clone: FxHashMap::default(),
            clone_to_source: FxHashMap::default(),
            pairs: Vec::new(),
        };

        traverse::traverse_pairs(
            source_nodes,
            source_root,
            clone_nodes,
            clone_root,
            |source, clone| {
                index.source_to_clone.insert(source, clone);
                index.clone_to_source.insert(clone, source);
                index.pairs.push((source, clone));
            },
        )?;

        Ok(index)
    }

    /// The clone-tree node at the position `source` occupies in the source tree.
    #[inline]
    #[must_use]
    pub fn clone_of(&self, source: NodeHandle) -> Option<NodeHandle> {
        self.source_to_clone.get(&source).copied()
    }

    /// The source-tree node at the position `clone` occupies in the clone tree.
    #[inline]
    #[must_use]
    pub fn source_of(&self, clone: NodeHandle) -> Option<NodeHandle> {
        self.clone_to_source.get(&clone).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains_source(&self, source: NodeHandle) -> bool {
        self.source_to_clone.contains_key(&source)
    }

    #[inline]
    #[must_use]
    pub fn contains_clone(&self, clone: NodeHandle) -> bool {
        self.clone_to_source.contains_key(&clone)
    }

    /// `(source, clone)` pairs in preorder of the source tree.
    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &[(NodeHandle, NodeHandle)] {
        &self.pairs
    }

    /// Clone-tree nodes in preorder.
    pub fn clone_nodes(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.pairs.iter().map(|&(_, clone)| clone)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn source_root(&self) -> Option<NodeHandle> {
        self.pairs.first().map(|&(source, _)| source)
    }

    #[must_use]
    pub fn clone_root(&self) -> Option<NodeHandle> {
        self.pairs.first().map(|&(_, clone)| clone)
    }
}
