//! Double-ended queue on the sentinel-framed linked base.

use std::iter::FusedIterator;

use generational_arena::Index;
use tracing::instrument;

use crate::errors::{DequeError, DequeResult};
use crate::linked_list::DoublyLinkedBase;

/// Deque with O(1) access and mutation at both ends.
///
/// Accessors on an empty deque report [`DequeError::EmptyContainer`]
/// instead of panicking.
#[derive(Debug)]
pub struct LinkedDeque<T> {
    base: DoublyLinkedBase<T>,
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedDeque<T> {
    pub fn new() -> Self {
        Self {
            base: DoublyLinkedBase::new(),
        }
    }

    /// Number of elements in the deque.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Element at the front without removing it.
    pub fn first(&self) -> DequeResult<&T> {
        let node = self.base.first_node().ok_or(DequeError::EmptyContainer)?;
        Ok(self.base.element(node))
    }

    /// Element at the back without removing it.
    pub fn last(&self) -> DequeResult<&T> {
        let node = self.base.last_node().ok_or(DequeError::EmptyContainer)?;
        Ok(self.base.element(node))
    }

    /// Adds `element` at the front.
    #[instrument(level = "trace", skip(self, element))]
    pub fn insert_first(&mut self, element: T) {
        self.base.link_front(element);
    }

    /// Adds `element` at the back.
    #[instrument(level = "trace", skip(self, element))]
    pub fn insert_last(&mut self, element: T) {
        self.base.link_back(element);
    }

    /// Removes and returns the front element.
    #[instrument(level = "trace", skip(self))]
    pub fn delete_first(&mut self) -> DequeResult<T> {
        let node = self.base.first_node().ok_or(DequeError::EmptyContainer)?;
        Ok(self.base.delete_node(node))
    }

    /// Removes and returns the back element.
    #[instrument(level = "trace", skip(self))]
    pub fn delete_last(&mut self) -> DequeResult<T> {
        let node = self.base.last_node().ok_or(DequeError::EmptyContainer)?;
        Ok(self.base.delete_node(node))
    }

    /// Borrowing iterator from front to back.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            base: &self.base,
            cursor: self.base.first_node(),
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a borrowed deque.
pub struct Iter<'a, T> {
    base: &'a DoublyLinkedBase<T>,
    cursor: Option<Index>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = self.base.successor(node);
        Some(self.base.element(node))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
