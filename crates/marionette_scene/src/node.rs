use marionette_core::NodeHandle;

use crate::transform::Transform;

/// A scene node holding only hierarchy, local transform and visibility.
///
/// Names, meshes and skin bindings live in the [`Scene`](crate::Scene)
/// component maps, keyed by the node's handle.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeHandle>,
    /// Ordered. Position in this list is what pairs a node with its copy.
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Copies the node's own data without any hierarchy links.
    pub(crate) fn detached_copy(&self) -> Self {
        Self {
            parent: None,
            children: Vec::with_capacity(self.children.len()),
            transform: self.transform,
            visible: self.visible,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
