//! Terminal rendering for trees and deques.

use std::fmt::{self, Display};

use termtree::Tree;
use tracing::instrument;

use crate::deque::LinkedDeque;
use crate::linked_tree::LinkedBinaryTree;
use crate::position::Position;
use crate::tree_traits::{BinaryTree, Tree as _};

/// Conversion into a drawable [`termtree::Tree`].
pub trait ToTreeString {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<B> ToTreeString for B
where
    B: BinaryTree,
    B::Item: Display,
{
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn label<B>(tree: &B, p: Position<B::Item>) -> String
        where
            B: BinaryTree,
            B::Item: Display,
        {
            tree.element(p).map(|e| e.to_string()).unwrap_or_default()
        }

        fn build<B>(tree: &B, p: Position<B::Item>, drawn: &mut Tree<String>)
        where
            B: BinaryTree,
            B::Item: Display,
        {
            if let Ok(children) = tree.children(p) {
                for child in children {
                    let mut subtree = Tree::new(label(tree, child));
                    build(tree, child, &mut subtree);
                    drawn.push(subtree);
                }
            }
        }

        match self.root() {
            Some(root) => {
                let mut drawn = Tree::new(label(self, root));
                build(self, root, &mut drawn);
                drawn
            }
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}

impl<T: Display> Display for LinkedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

impl<T: Display> Display for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}
