//! Sentinel-framed doubly linked storage backing the deque.
//!
//! Header and trailer sentinels are allocated once and never removed;
//! every payload node therefore always has a live predecessor and
//! successor.

use generational_arena::{Arena, Index};
use tracing::instrument;

/// One slot in the chain. Sentinels carry no element.
#[derive(Debug)]
struct ListNode<T> {
    element: Option<T>,
    prev: Option<Index>,
    next: Option<Index>,
}

/// Doubly linked chain between two fixed sentinels.
///
/// Invariants: `header.prev` and `trailer.next` stay `None`; every other
/// link is `Some` and mutually consistent.
#[derive(Debug)]
pub(crate) struct DoublyLinkedBase<T> {
    /// Arena storage for sentinels and payload nodes
    arena: Arena<ListNode<T>>,
    /// Front sentinel, before the first element
    header: Index,
    /// Back sentinel, after the last element
    trailer: Index,
}

impl<T> DoublyLinkedBase<T> {
    pub(crate) fn new() -> Self {
        let mut arena = Arena::with_capacity(2);
        let header = arena.insert(ListNode {
            element: None,
            prev: None,
            next: None,
        });
        let trailer = arena.insert(ListNode {
            element: None,
            prev: Some(header),
            next: None,
        });
        arena[header].next = Some(trailer);
        Self {
            arena,
            header,
            trailer,
        }
    }

    /// Number of payload nodes.
    pub(crate) fn len(&self) -> usize {
        self.arena.len() - 2
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First payload node, `None` when the chain is empty.
    pub(crate) fn first_node(&self) -> Option<Index> {
        self.successor(self.header)
    }

    /// Last payload node, `None` when the chain is empty.
    pub(crate) fn last_node(&self) -> Option<Index> {
        self.predecessor(self.trailer)
    }

    /// Payload node after `node`, `None` at the back of the chain.
    pub(crate) fn successor(&self, node: Index) -> Option<Index> {
        let next = self.arena[node].next?;
        (next != self.trailer).then_some(next)
    }

    fn predecessor(&self, node: Index) -> Option<Index> {
        let prev = self.arena[node].prev?;
        (prev != self.header).then_some(prev)
    }

    pub(crate) fn element(&self, node: Index) -> &T {
        self.arena[node]
            .element
            .as_ref()
            .expect("sentinels hold no element")
    }

    /// Inserts `element` between two adjacent nodes and returns its slot.
    #[instrument(level = "trace", skip(self, element))]
    pub(crate) fn insert_between(&mut self, element: T, pred: Index, succ: Index) -> Index {
        debug_assert_eq!(self.arena[pred].next, Some(succ), "insert site must be adjacent");
        let node = self.arena.insert(ListNode {
            element: Some(element),
            prev: Some(pred),
            next: Some(succ),
        });
        self.arena[pred].next = Some(node);
        self.arena[succ].prev = Some(node);
        node
    }

    /// Inserts `element` right after the header sentinel.
    pub(crate) fn link_front(&mut self, element: T) -> Index {
        let succ = self.arena[self.header]
            .next
            .expect("header always links forward");
        self.insert_between(element, self.header, succ)
    }

    /// Inserts `element` right before the trailer sentinel.
    pub(crate) fn link_back(&mut self, element: T) -> Index {
        let pred = self.arena[self.trailer]
            .prev
            .expect("trailer always links backward");
        self.insert_between(element, pred, self.trailer)
    }

    /// Unlinks a payload node and returns its element.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn delete_node(&mut self, node: Index) -> T {
        let removed = self
            .arena
            .remove(node)
            .expect("only live payload nodes are deleted");
        let pred = removed.prev.expect("payload nodes keep both neighbours");
        let succ = removed.next.expect("payload nodes keep both neighbours");
        self.arena[pred].next = Some(succ);
        self.arena[succ].prev = Some(pred);
        removed.element.expect("sentinels are never deleted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_test_setup;

    #[test]
    fn test_new_chain_has_linked_sentinels_and_no_payload() {
        init_test_setup();
        let base: DoublyLinkedBase<i32> = DoublyLinkedBase::new();

        assert_eq!(base.len(), 0);
        assert!(base.is_empty());
        assert_eq!(base.arena[base.header].next, Some(base.trailer));
        assert_eq!(base.arena[base.trailer].prev, Some(base.header));
        assert_eq!(base.arena[base.header].prev, None);
        assert_eq!(base.arena[base.trailer].next, None);
        assert!(base.first_node().is_none());
        assert!(base.last_node().is_none());
    }

    #[test]
    fn test_insert_between_splices_both_directions() {
        init_test_setup();
        let mut base = DoublyLinkedBase::new();

        let a = base.link_front("a");
        let c = base.link_back("c");
        let b = base.insert_between("b", a, c);

        assert_eq!(base.len(), 3);
        assert_eq!(base.arena[a].next, Some(b));
        assert_eq!(base.arena[b].prev, Some(a));
        assert_eq!(base.arena[b].next, Some(c));
        assert_eq!(base.arena[c].prev, Some(b));
        assert_eq!(base.element(b), &"b");
    }

    #[test]
    fn test_delete_node_reconnects_neighbours() {
        init_test_setup();
        let mut base = DoublyLinkedBase::new();

        let a = base.link_back(1);
        let b = base.link_back(2);
        let c = base.link_back(3);

        assert_eq!(base.delete_node(b), 2);
        assert_eq!(base.len(), 2);
        assert_eq!(base.arena[a].next, Some(c));
        assert_eq!(base.arena[c].prev, Some(a));
        assert_eq!(base.successor(a), Some(c));
    }

    #[test]
    fn test_deleting_all_nodes_restores_the_empty_chain() {
        init_test_setup();
        let mut base = DoublyLinkedBase::new();

        let only = base.link_front("x");
        assert_eq!(base.delete_node(only), "x");

        assert_eq!(base.len(), 0);
        assert_eq!(base.arena[base.header].next, Some(base.trailer));
        assert_eq!(base.arena[base.trailer].prev, Some(base.header));
    }
}
