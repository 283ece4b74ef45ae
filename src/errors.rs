//! Typed errors for the positional containers.

use thiserror::Error;

use crate::linked_tree::Side;

/// Errors raised by deque operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    #[error("container is empty")]
    EmptyContainer,
}

pub type DequeResult<T> = Result<T, DequeError>;

/// Errors raised by tree accessors and mutations.
///
/// Every operation that rejects its input leaves the tree exactly as it
/// was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("position is not valid for this tree")]
    InvalidPosition,

    #[error("tree already has a root")]
    NonEmptyTree,

    #[error("{0} child already exists")]
    ChildExists(Side),

    #[error("node has two children")]
    TwoChildren,

    #[error("position is not a leaf")]
    NotLeaf,
}

pub type TreeResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_violation() {
        assert_eq!(
            DequeError::EmptyContainer.to_string(),
            "container is empty"
        );
        assert_eq!(
            TreeError::ChildExists(Side::Left).to_string(),
            "left child already exists"
        );
        assert_eq!(
            TreeError::ChildExists(Side::Right).to_string(),
            "right child already exists"
        );
        assert_eq!(TreeError::TwoChildren.to_string(), "node has two children");
    }
}
