//! Capability traits for position-based trees.
//!
//! [`Tree`] covers what every tree can answer: size, root, parentage and
//! child enumeration. [`BinaryTree`] adds the left/right slot structure.
//! Everything else (`is_root`, `is_leaf`, `depth`, `height`, `sibling`) is
//! derived from those primitives as provided methods.

use std::iter::FusedIterator;

use crate::errors::TreeResult;
use crate::position::Position;

/// Read access to a positional tree.
pub trait Tree {
    /// Element type stored at each node
    type Item;
    /// Iterator over the child positions of one node
    type ChildIter: Iterator<Item = Position<Self::Item>>;

    /// Number of nodes in the tree.
    fn len(&self) -> usize;

    /// Position of the root, `None` for an empty tree.
    fn root(&self) -> Option<Position<Self::Item>>;

    /// Element stored at `p`.
    fn element(&self, p: Position<Self::Item>) -> TreeResult<&Self::Item>;

    /// Position of the parent of `p`, `None` when `p` is the root.
    fn parent(&self, p: Position<Self::Item>) -> TreeResult<Option<Position<Self::Item>>>;

    /// Number of children of `p`.
    fn num_children(&self, p: Position<Self::Item>) -> TreeResult<usize>;

    /// Positions of the children of `p`.
    fn children(&self, p: Position<Self::Item>) -> TreeResult<Self::ChildIter>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_root(&self, p: Position<Self::Item>) -> TreeResult<bool> {
        Ok(self.parent(p)?.is_none())
    }

    fn is_leaf(&self, p: Position<Self::Item>) -> TreeResult<bool> {
        Ok(self.num_children(p)? == 0)
    }

    /// Number of ancestors of `p`; 0 for the root.
    fn depth(&self, p: Position<Self::Item>) -> TreeResult<usize> {
        let mut hops = 0;
        let mut cursor = p;
        while let Some(parent) = self.parent(cursor)? {
            hops += 1;
            cursor = parent;
        }
        Ok(hops)
    }

    /// Height of the subtree rooted at `p`; 0 for a leaf.
    fn height(&self, p: Position<Self::Item>) -> TreeResult<usize> {
        let mut tallest = None;
        for child in self.children(p)? {
            let below = self.height(child)?;
            tallest = Some(tallest.map_or(below, |t: usize| t.max(below)));
        }
        Ok(tallest.map_or(0, |t| t + 1))
    }

    /// Height of the whole tree; 0 for an empty or single-node tree.
    fn tree_height(&self) -> TreeResult<usize> {
        match self.root() {
            Some(root) => self.height(root),
            None => Ok(0),
        }
    }
}

/// A [`Tree`] in which every node has an optional left and right child.
pub trait BinaryTree: Tree {
    /// Position of the left child of `p`, `None` when absent.
    fn left(&self, p: Position<Self::Item>) -> TreeResult<Option<Position<Self::Item>>>;

    /// Position of the right child of `p`, `None` when absent.
    fn right(&self, p: Position<Self::Item>) -> TreeResult<Option<Position<Self::Item>>>;

    /// Position of the other child of `p`'s parent.
    ///
    /// `None` when `p` is the root or an only child.
    fn sibling(&self, p: Position<Self::Item>) -> TreeResult<Option<Position<Self::Item>>> {
        match self.parent(p)? {
            Some(parent) => {
                if self.left(parent)? == Some(p) {
                    self.right(parent)
                } else {
                    self.left(parent)
                }
            }
            None => Ok(None),
        }
    }

    /// Children of `p` in left-then-right order, absent slots skipped.
    fn child_positions(&self, p: Position<Self::Item>) -> TreeResult<Children<Self::Item>> {
        Ok(Children::new([self.left(p)?, self.right(p)?]))
    }
}

/// Iterator over the children of one node, left before right.
///
/// The positions are snapshotted when the iterator is created; it holds no
/// borrow of the tree.
pub struct Children<T> {
    slots: [Option<Position<T>>; 2],
    cursor: usize,
}

impl<T> Children<T> {
    pub(crate) fn new(slots: [Option<Position<T>>; 2]) -> Self {
        Self { slots, cursor: 0 }
    }
}

impl<T> Iterator for Children<T> {
    type Item = Position<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.slots.len() {
            let slot = self.slots[self.cursor];
            self.cursor += 1;
            if slot.is_some() {
                return slot;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots[self.cursor..].iter().flatten().count();
        (remaining, Some(remaining))
    }
}

impl<T> FusedIterator for Children<T> {}

#[cfg(test)]
mod tests {
    use generational_arena::Arena;
    use uuid::Uuid;

    use super::*;
    use crate::testing::init_test_setup;

    #[test]
    fn test_children_yields_left_then_right_and_skips_gaps() {
        init_test_setup();
        let mut arena = Arena::new();
        let container = Uuid::new_v4();
        let left: Position<()> = Position::new(container, arena.insert(()));
        let right: Position<()> = Position::new(container, arena.insert(()));

        let both: Vec<_> = Children::new([Some(left), Some(right)]).collect();
        assert_eq!(both, vec![left, right]);

        let right_only: Vec<_> = Children::new([None, Some(right)]).collect();
        assert_eq!(right_only, vec![right]);

        let none: Vec<_> = Children::<()>::new([None, None]).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_children_size_hint_tracks_remaining_slots() {
        init_test_setup();
        let mut arena = Arena::new();
        let container = Uuid::new_v4();
        let only: Position<()> = Position::new(container, arena.insert(()));

        let mut children = Children::new([Some(only), None]);
        assert_eq!(children.size_hint(), (1, Some(1)));
        assert_eq!(children.next(), Some(only));
        assert_eq!(children.size_hint(), (0, Some(0)));
        assert_eq!(children.next(), None);
        assert_eq!(children.next(), None, "exhausted iterator stays exhausted");
    }
}
