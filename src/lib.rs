//! Positional containers backed by a generational arena.
//!
//! Two containers share the same handle discipline:
//!
//! * [`LinkedDeque`] keeps its elements in a doubly linked chain between
//!   two sentinel nodes, giving O(1) insertion and removal at both ends.
//! * [`LinkedBinaryTree`] exposes its nodes as opaque [`Position`] handles.
//!   Every accessor and mutation validates the handle against the owning
//!   tree first, so a position from another tree or one whose node has been
//!   deleted comes back as an error instead of reaching a wrong node.
//!
//! Navigation ([`Tree`]) and the binary slot structure ([`BinaryTree`]) are
//! traits; derived queries like `depth`, `height` and `sibling` are
//! provided methods on top of the primitives.
//!
//! ```
//! use bough::{BinaryTree, LinkedBinaryTree, LinkedDeque, Tree};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = LinkedBinaryTree::new();
//! let root = tree.add_root("A")?;
//! let b = tree.add_left(root, "B")?;
//! let c = tree.add_right(root, "C")?;
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.depth(b)?, 1);
//! assert_eq!(tree.tree_height()?, 1);
//! assert_eq!(tree.sibling(b)?, Some(c));
//! assert_eq!(*tree.element(root)?, "A");
//!
//! let mut deque = LinkedDeque::new();
//! deque.insert_first(2);
//! deque.insert_last(3);
//! deque.insert_first(1);
//! assert_eq!(deque.delete_last()?, 3);
//! assert_eq!(*deque.first()?, 1);
//! # Ok(())
//! # }
//! ```

pub mod deque;
pub mod display;
pub mod errors;
mod linked_list;
pub mod linked_tree;
pub mod position;
pub mod testing;
pub mod tree_traits;

pub use deque::LinkedDeque;
pub use display::ToTreeString;
pub use errors::{DequeError, DequeResult, TreeError, TreeResult};
pub use linked_tree::{LinkedBinaryTree, Side};
pub use position::Position;
pub use tree_traits::{BinaryTree, Children, Tree};
