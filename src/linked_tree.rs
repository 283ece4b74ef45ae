//! Linked binary tree with arena-backed nodes and validated positions.

use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{TreeError, TreeResult};
use crate::position::Position;
use crate::tree_traits::{BinaryTree, Children, Tree};

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Node record in the arena-based binary tree.
#[derive(Debug)]
struct TreeNode<T> {
    /// Element stored at this node
    element: T,
    /// Slot of the parent node, `None` for the root
    parent: Option<Index>,
    /// Slot of the left child, `None` when absent
    left: Option<Index>,
    /// Slot of the right child, `None` when absent
    right: Option<Index>,
}

/// Binary tree whose nodes live in a generational arena.
///
/// Accessors and mutations take [`Position`] handles and validate each one
/// before touching the structure: a handle minted by another tree and a
/// handle whose node has since been deleted are both rejected with
/// [`TreeError::InvalidPosition`]. Deleting a slot advances its arena
/// generation, so stale handles never alias a later node.
#[derive(Debug)]
pub struct LinkedBinaryTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Slot of the root node, `None` for empty trees
    root: Option<Index>,
    /// Identity checked against every presented position
    id: Uuid,
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedBinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            id: Uuid::new_v4(),
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Checks that `p` belongs to this tree and still names a live node.
    #[instrument(level = "trace", skip(self))]
    fn validate(&self, p: Position<T>) -> TreeResult<Index> {
        if p.container != self.id || !self.arena.contains(p.node) {
            return Err(TreeError::InvalidPosition);
        }
        Ok(p.node)
    }

    fn make_position(&self, node: Index) -> Position<T> {
        Position::new(self.id, node)
    }

    /// Places `element` at the root of an empty tree.
    #[instrument(level = "trace", skip(self, element))]
    pub fn add_root(&mut self, element: T) -> TreeResult<Position<T>> {
        if self.root.is_some() {
            return Err(TreeError::NonEmptyTree);
        }
        let node = self.arena.insert(TreeNode {
            element,
            parent: None,
            left: None,
            right: None,
        });
        self.root = Some(node);
        Ok(self.make_position(node))
    }

    /// Creates a left child for `p` holding `element`.
    #[instrument(level = "trace", skip(self, element))]
    pub fn add_left(&mut self, p: Position<T>, element: T) -> TreeResult<Position<T>> {
        self.add_child(p, Side::Left, element)
    }

    /// Creates a right child for `p` holding `element`.
    #[instrument(level = "trace", skip(self, element))]
    pub fn add_right(&mut self, p: Position<T>, element: T) -> TreeResult<Position<T>> {
        self.add_child(p, Side::Right, element)
    }

    fn add_child(&mut self, p: Position<T>, side: Side, element: T) -> TreeResult<Position<T>> {
        let parent = self.validate(p)?;
        if self.child_slot(parent, side).is_some() {
            return Err(TreeError::ChildExists(side));
        }
        let node = self.arena.insert(TreeNode {
            element,
            parent: Some(parent),
            left: None,
            right: None,
        });
        *self.child_slot_mut(parent, side) = Some(node);
        Ok(self.make_position(node))
    }

    fn child_slot(&self, node: Index, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.arena[node].left,
            Side::Right => self.arena[node].right,
        }
    }

    fn child_slot_mut(&mut self, node: Index, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.arena[node].left,
            Side::Right => &mut self.arena[node].right,
        }
    }

    /// Swaps the element at `p` for `element` and returns the old one.
    #[instrument(level = "trace", skip(self, element))]
    pub fn replace(&mut self, p: Position<T>, element: T) -> TreeResult<T> {
        let node = self.validate(p)?;
        Ok(mem::replace(&mut self.arena[node].element, element))
    }

    /// Removes the node at `p` and returns its element.
    ///
    /// A sole child is promoted into the vacated place, keeping its whole
    /// subtree. A node with two children cannot be deleted; the call fails
    /// with [`TreeError::TwoChildren`] and the tree is left untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, p: Position<T>) -> TreeResult<T> {
        let node = self.validate(p)?;
        if self.arena[node].left.is_some() && self.arena[node].right.is_some() {
            return Err(TreeError::TwoChildren);
        }
        let record = self.arena.remove(node).ok_or(TreeError::InvalidPosition)?;
        let child = record.left.or(record.right);

        if let Some(child) = child {
            self.arena[child].parent = record.parent;
        }
        match record.parent {
            Some(parent) => {
                if self.arena[parent].left == Some(node) {
                    self.arena[parent].left = child;
                } else {
                    self.arena[parent].right = child;
                }
            }
            None => self.root = child,
        }
        Ok(record.element)
    }

    /// Hangs two whole trees beneath the leaf at `p`: `left` becomes the
    /// left subtree and `right` the right subtree.
    ///
    /// Both donors are drained into this tree and end up empty; they stay
    /// usable afterwards, but positions minted by them before the call are
    /// invalid everywhere. Fails with [`TreeError::NotLeaf`] and mutates
    /// nothing when `p` has a child.
    #[instrument(level = "debug", skip(self, left, right))]
    pub fn attach(&mut self, p: Position<T>, left: &mut Self, right: &mut Self) -> TreeResult<()> {
        let node = self.validate(p)?;
        if self.arena[node].left.is_some() || self.arena[node].right.is_some() {
            return Err(TreeError::NotLeaf);
        }
        if let Some(left_root) = left.take_all(&mut self.arena) {
            self.arena[left_root].parent = Some(node);
            self.arena[node].left = Some(left_root);
        }
        if let Some(right_root) = right.take_all(&mut self.arena) {
            self.arena[right_root].parent = Some(node);
            self.arena[node].right = Some(right_root);
        }
        Ok(())
    }

    /// Moves every node of this tree into `target`, returning the new slot
    /// of the relocated root. Leaves this tree empty.
    fn take_all(&mut self, target: &mut Arena<TreeNode<T>>) -> Option<Index> {
        let root = self.root.take()?;
        let moved = self.relocate(root, None, target);
        debug_assert!(self.arena.is_empty(), "drained donor must keep no nodes");
        Some(moved)
    }

    fn relocate(
        &mut self,
        node: Index,
        parent: Option<Index>,
        target: &mut Arena<TreeNode<T>>,
    ) -> Index {
        let record = self.arena.remove(node).expect("donor links never dangle");
        let moved = target.insert(TreeNode {
            element: record.element,
            parent,
            left: None,
            right: None,
        });
        if let Some(left) = record.left {
            let moved_left = self.relocate(left, Some(moved), target);
            target[moved].left = Some(moved_left);
        }
        if let Some(right) = record.right {
            let moved_right = self.relocate(right, Some(moved), target);
            target[moved].right = Some(moved_right);
        }
        moved
    }
}

impl<T> Tree for LinkedBinaryTree<T> {
    type Item = T;
    type ChildIter = Children<T>;

    fn len(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "trace", skip(self))]
    fn root(&self) -> Option<Position<T>> {
        self.root.map(|node| self.make_position(node))
    }

    #[instrument(level = "trace", skip(self))]
    fn element(&self, p: Position<T>) -> TreeResult<&T> {
        let node = self.validate(p)?;
        Ok(&self.arena[node].element)
    }

    #[instrument(level = "trace", skip(self))]
    fn parent(&self, p: Position<T>) -> TreeResult<Option<Position<T>>> {
        let node = self.validate(p)?;
        Ok(self.arena[node].parent.map(|idx| self.make_position(idx)))
    }

    #[instrument(level = "trace", skip(self))]
    fn num_children(&self, p: Position<T>) -> TreeResult<usize> {
        let node = self.validate(p)?;
        let record = &self.arena[node];
        Ok(usize::from(record.left.is_some()) + usize::from(record.right.is_some()))
    }

    #[instrument(level = "trace", skip(self))]
    fn children(&self, p: Position<T>) -> TreeResult<Children<T>> {
        self.child_positions(p)
    }
}

impl<T> BinaryTree for LinkedBinaryTree<T> {
    #[instrument(level = "trace", skip(self))]
    fn left(&self, p: Position<T>) -> TreeResult<Option<Position<T>>> {
        let node = self.validate(p)?;
        Ok(self.arena[node].left.map(|idx| self.make_position(idx)))
    }

    #[instrument(level = "trace", skip(self))]
    fn right(&self, p: Position<T>) -> TreeResult<Option<Position<T>>> {
        let node = self.validate(p)?;
        Ok(self.arena[node].right.map(|idx| self.make_position(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_test_setup;

    #[test]
    fn test_delete_rewires_arena_links_when_promoting_a_child() {
        init_test_setup();
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root("root").unwrap();
        let mid = tree.add_left(root, "mid").unwrap();
        let leaf = tree.add_right(mid, "leaf").unwrap();

        tree.delete(mid).unwrap();

        assert_eq!(tree.arena[leaf.node].parent, Some(root.node));
        assert_eq!(tree.arena[root.node].left, Some(leaf.node));
        assert!(!tree.arena.contains(mid.node));
    }

    #[test]
    fn test_relocated_nodes_point_at_their_new_parents() {
        init_test_setup();
        let mut host = LinkedBinaryTree::new();
        let anchor = host.add_root(0).unwrap();

        let mut donor = LinkedBinaryTree::new();
        let donor_root = donor.add_root(1).unwrap();
        donor.add_left(donor_root, 2).unwrap();
        donor.add_right(donor_root, 3).unwrap();
        let mut empty = LinkedBinaryTree::new();

        host.attach(anchor, &mut donor, &mut empty).unwrap();

        let moved_root = host.arena[anchor.node].left.unwrap();
        assert_eq!(host.arena[moved_root].parent, Some(anchor.node));
        let moved_left = host.arena[moved_root].left.unwrap();
        let moved_right = host.arena[moved_root].right.unwrap();
        assert_eq!(host.arena[moved_left].parent, Some(moved_root));
        assert_eq!(host.arena[moved_right].parent, Some(moved_root));
        assert_eq!(host.arena[moved_left].element, 2);
        assert_eq!(host.arena[moved_right].element, 3);
    }

    #[test]
    fn test_slot_reuse_after_delete_rejects_the_stale_handle() {
        init_test_setup();
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root("a").unwrap();
        let old = tree.add_left(root, "b").unwrap();
        tree.delete(old).unwrap();

        // The freed slot is recycled at a new generation.
        let fresh = tree.add_left(root, "c").unwrap();
        assert_ne!(old, fresh);
        assert_eq!(tree.element(fresh).unwrap(), &"c");
        assert_eq!(tree.element(old), Err(TreeError::InvalidPosition));
    }
}
