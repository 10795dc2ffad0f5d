use std::sync::atomic::{AtomicU32, Ordering};

use glam::Affine3A;
use marionette_core::{MarionetteError, NodeHandle, Result, SkeletonKey};
use slotmap::{SecondaryMap, SlotMap};

use crate::mesh::Mesh;
use crate::node::Node;
use crate::skeleton::{BindMode, Skeleton, SkinBinding};
use crate::traverse;

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Scene graph container.
///
/// Nodes live in a [`SlotMap`] arena and are addressed by [`NodeHandle`].
/// Per-node components (names, meshes, skin bindings) are stored in
/// [`SecondaryMap`]s keyed by the same handle; skeletons have their own arena
/// because several nodes may reference one skeleton.
pub struct Scene {
    pub id: u32,

    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // ==== Components ====
    pub names: SecondaryMap<NodeHandle, String>,
    pub meshes: SecondaryMap<NodeHandle, Mesh>,
    pub skins: SecondaryMap<NodeHandle, SkinBinding>,

    pub skeletons: SlotMap<SkeletonKey, Skeleton>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            names: SecondaryMap::new(),
            meshes: SecondaryMap::new(),
            skins: SecondaryMap::new(),
            skeletons: SlotMap::with_key(),
        }
    }

    // ========================================================================
    // Node creation & hierarchy
    // ========================================================================

    /// Creates a detached node (no parent, not a scene root).
    pub fn create_node(&mut self) -> NodeHandle {
        self.nodes.insert(Node::new())
    }

    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        let handle = self.create_node();
        self.names.insert(handle, name.to_string());
        handle
    }

    /// Inserts `node` as a scene root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Inserts `child` as the last child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> Result<NodeHandle> {
        if !self.nodes.contains_key(parent) {
            return Err(MarionetteError::NodeNotFound(parent));
        }

        let handle = self.nodes.insert(child);
        self.link(handle, parent);
        Ok(handle)
    }

    /// Moves `child` (and its subtree) to the end of `parent`'s child list.
    ///
    /// Refuses, with a warning, to attach a node to itself or to one of its
    /// own descendants.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::error!("attach: node not found ({child:?} -> {parent:?})");
            return;
        }
        if self.is_ancestor_or_self(child, parent) {
            log::warn!("attach: {child:?} cannot become a descendant of itself");
            return;
        }

        self.detach(child);
        self.link(child, parent);
    }

    /// Unlinks `handle` from its parent (or from the root list).
    /// The node stays alive as a detached subtree.
    pub fn detach(&mut self, handle: NodeHandle) {
        let Some(parent) = self.nodes.get(handle).map(Node::parent) else {
            return;
        };

        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(p) {
                    parent_node.children.retain(|&c| c != handle);
                }
            }
            None => self.root_nodes.retain(|&r| r != handle),
        }

        if let Some(node) = self.nodes.get_mut(handle) {
            node.parent = None;
        }
    }

    /// Makes a detached node a scene root.
    pub fn add_to_roots(&mut self, handle: NodeHandle) {
        self.detach(handle);
        if self.nodes.contains_key(handle) {
            self.root_nodes.push(handle);
        }
    }

    /// Removes a node and its whole subtree, including their components.
    ///
    /// Skeletons are not removed: they may be shared and are released with
    /// [`Scene::remove_skeleton`].
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let subtree = self.collect_subtree(handle);
        if subtree.is_empty() {
            return;
        }

        self.detach(handle);

        for h in subtree {
            self.names.remove(h);
            self.meshes.remove(h);
            self.skins.remove(h);
            self.nodes.remove(h);
        }
    }

    fn link(&mut self, child: NodeHandle, parent: NodeHandle) {
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeHandle, mut node: NodeHandle) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes.get(node).and_then(Node::parent) {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    // ========================================================================
    // Node access
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.names.get(handle).map(String::as_str)
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: &str) {
        if self.nodes.contains_key(handle) {
            self.names.insert(handle, name.to_string());
        }
    }

    /// First node named `name` under `root` (inclusive), in preorder.
    #[must_use]
    pub fn find_node_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let mut found = None;
        let _ = traverse::traverse_preorder(&self.nodes, root, |handle, _| {
            if found.is_none() && self.get_name(handle) == Some(name) {
                found = Some(handle);
            }
        });
        found
    }

    /// Handles of `root` and all its descendants, in preorder.
    /// Empty if `root` is stale.
    #[must_use]
    pub fn collect_subtree(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        if traverse::traverse_preorder(&self.nodes, root, |handle, _| out.push(handle)).is_err() {
            out.clear();
        }
        out
    }

    /// Preorder walk of the subtree under `root`.
    pub fn traverse<F>(&self, root: NodeHandle, visitor: F) -> Result<()>
    where
        F: FnMut(NodeHandle, &Node),
    {
        traverse::traverse_preorder(&self.nodes, root, visitor)
    }

    /// Lockstep walk of two subtrees of this scene.
    /// See [`traverse::traverse_pairs`].
    pub fn traverse_pairs<F>(&self, source: NodeHandle, clone: NodeHandle, visitor: F) -> Result<()>
    where
        F: FnMut(NodeHandle, NodeHandle),
    {
        traverse::traverse_pairs(&self.nodes, source, &self.nodes, clone, visitor)
    }

    /// World matrix of `handle`, composed from the local transforms up the
    /// parent chain.
    #[must_use]
    pub fn world_matrix(&self, handle: NodeHandle) -> Option<Affine3A> {
        let node = self.nodes.get(handle)?;
        let mut world = node.transform.local_matrix();
        let mut parent = node.parent;

        while let Some(p) = parent {
            let parent_node = self.nodes.get(p)?;
            world = parent_node.transform.local_matrix() * world;
            parent = parent_node.parent;
        }

        Some(world)
    }

    // ========================================================================
    // Components
    // ========================================================================

    pub fn set_mesh(&mut self, handle: NodeHandle, mesh: Mesh) {
        if self.nodes.contains_key(handle) {
            self.meshes.insert(handle, mesh);
        }
    }

    #[must_use]
    pub fn get_mesh(&self, handle: NodeHandle) -> Option<&Mesh> {
        self.meshes.get(handle)
    }

    pub fn get_mesh_mut(&mut self, handle: NodeHandle) -> Option<&mut Mesh> {
        self.meshes.get_mut(handle)
    }

    pub fn add_skeleton(&mut self, skeleton: Skeleton) -> SkeletonKey {
        self.skeletons.insert(skeleton)
    }

    #[must_use]
    pub fn get_skeleton(&self, key: SkeletonKey) -> Option<&Skeleton> {
        self.skeletons.get(key)
    }

    /// Removes a skeleton. Nodes still bound to it lose their skin binding.
    pub fn remove_skeleton(&mut self, key: SkeletonKey) -> Option<Skeleton> {
        let skeleton = self.skeletons.remove(key)?;
        self.skins.retain(|_, binding| binding.skeleton != key);
        Some(skeleton)
    }

    #[must_use]
    pub fn get_skin(&self, handle: NodeHandle) -> Option<&SkinBinding> {
        self.skins.get(handle)
    }

    /// Skeleton bound to `handle`, if it is a skinned node.
    #[must_use]
    pub fn skeleton_of(&self, handle: NodeHandle) -> Option<&Skeleton> {
        let binding = self.skins.get(handle)?;
        self.skeletons.get(binding.skeleton)
    }

    /// Binds `skeleton` to `handle`, using the node's current world matrix
    /// as bind matrix.
    pub fn bind_skeleton(
        &mut self,
        handle: NodeHandle,
        skeleton: SkeletonKey,
        bind_mode: BindMode,
    ) -> Result<()> {
        if !self.skeletons.contains_key(skeleton) {
            return Err(MarionetteError::SkeletonNotFound(skeleton));
        }
        let bind_matrix = self
            .world_matrix(handle)
            .ok_or(MarionetteError::NodeNotFound(handle))?;

        self.skins
            .insert(handle, SkinBinding::new(skeleton, bind_mode, bind_matrix));
        Ok(())
    }

    // ========================================================================
    // Structural copy
    // ========================================================================

    /// Copies the subtree under `root` node for node, keeping child order.
    ///
    /// The copy root is detached. Names, transforms, visibility and meshes are
    /// copied (geometry/material ids are shared). Skin bindings are copied
    /// as-is and therefore still reference the *source* skeleton; use
    /// [`SkeletonUtils::clone`](crate::SkeletonUtils::clone) to get a copy
    /// whose skeletons point into the new subtree.
    pub fn deep_copy(&mut self, root: NodeHandle) -> Result<NodeHandle> {
        let root_copy = self
            .nodes
            .get(root)
            .map(Node::detached_copy)
            .ok_or(MarionetteError::NodeNotFound(root))?;
        let root_copy = self.nodes.insert(root_copy);

        if let Err(err) = self.copy_descendants(root, root_copy) {
            self.remove_node(root_copy);
            return Err(err);
        }

        Ok(root_copy)
    }

    fn copy_descendants(&mut self, root: NodeHandle, root_copy: NodeHandle) -> Result<()> {
        self.copy_components(root, root_copy);

        // (source, parent of the copy to create)
        let mut stack: Vec<(NodeHandle, NodeHandle)> = Vec::new();
        let children = self.nodes[root].children.clone();
        stack.extend(children.into_iter().rev().map(|c| (c, root_copy)));

        while let Some((source, parent_copy)) = stack.pop() {
            let source_node = self
                .nodes
                .get(source)
                .ok_or(MarionetteError::NodeNotFound(source))?;
            let copy = source_node.detached_copy();
            let children = source_node.children.clone();

            let copy = self.nodes.insert(copy);
            self.link(copy, parent_copy);
            self.copy_components(source, copy);

            stack.extend(children.into_iter().rev().map(|c| (c, copy)));
        }

        Ok(())
    }

    fn copy_components(&mut self, source: NodeHandle, copy: NodeHandle) {
        if let Some(name) = self.names.get(source).cloned() {
            self.names.insert(copy, name);
        }
        if let Some(mesh) = self.meshes.get(source).cloned() {
            self.meshes.insert(copy, mesh);
        }
        if let Some(skin) = self.skins.get(source).cloned() {
            self.skins.insert(copy, skin);
        }
    }
}
