//! Hierarchy walks.
//!
//! Both walks are preorder (parent before children, children in list order)
//! and use an explicit stack, so very deep hierarchies cannot overflow the
//! call stack.
//!
//! [`traverse_pairs`] walks two trees in lockstep and is the primitive every
//! node-correspondence consumer builds on: the correspondence index, the
//! structural copy checks, and anything else that needs "the node at the same
//! position in the other tree".

use marionette_core::{MarionetteError, MismatchKind, NodeHandle, Result};
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::node::Node;

type NodeArena = SlotMap<NodeHandle, Node>;

/// Visits every node under `root` (inclusive) in preorder.
pub fn traverse_preorder<F>(nodes: &NodeArena, root: NodeHandle, mut visitor: F) -> Result<()>
where
    F: FnMut(NodeHandle, &Node),
{
    let mut stack: SmallVec<[NodeHandle; 32]> = SmallVec::new();
    stack.push(root);

    while let Some(handle) = stack.pop() {
        let node = nodes
            .get(handle)
            .ok_or(MarionetteError::NodeNotFound(handle))?;

        visitor(handle, node);

        stack.extend(node.children.iter().rev().copied());
    }

    Ok(())
}

/// Walks `source_root` and `clone_root` simultaneously and calls
/// `visitor(source, clone)` once per pair of nodes at the same tree position.
///
/// The two trees may live in the same arena or in different ones. Pairing is
/// purely positional: the i-th child of a source node pairs with the i-th
/// child of its counterpart.
///
/// # Errors
/// - [`MarionetteError::NodeNotFound`] for a stale handle on either side.
/// - [`MarionetteError::StructuralMismatch`] with [`MismatchKind::ChildCount`]
///   as soon as a visited pair disagrees on child count. The pair itself has
///   already been visited at that point; its children have not.
pub fn traverse_pairs<F>(
    source_nodes: &NodeArena,
    source_root: NodeHandle,
    clone_nodes: &NodeArena,
    clone_root: NodeHandle,
    mut visitor: F,
) -> Result<()>
where
    F: FnMut(NodeHandle, NodeHandle),
{
    let mut stack: SmallVec<[(NodeHandle, NodeHandle); 32]> = SmallVec::new();
    stack.push((source_root, clone_root));

    while let Some((source, clone)) = stack.pop() {
        let source_node = source_nodes
            .get(source)
            .ok_or(MarionetteError::NodeNotFound(source))?;
        let clone_node = clone_nodes
            .get(clone)
            .ok_or(MarionetteError::NodeNotFound(clone))?;

        log::trace!("traverse_pairs: {source:?} <-> {clone:?}");
        visitor(source, clone);

        if source_node.children.len() != clone_node.children.len() {
            return Err(MarionetteError::mismatch(MismatchKind::ChildCount {
                source,
                clone,
                source_children: source_node.children.len(),
                clone_children: clone_node.children.len(),
            }));
        }

        stack.extend(
            source_node
                .children
                .iter()
                .zip(clone_node.children.iter())
                .rev()
                .map(|(&s, &c)| (s, c)),
        );
    }

    Ok(())
}
