use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use generational_arena::Index;
use uuid::Uuid;

/// Opaque handle to one element slot inside one specific container.
///
/// A position stays usable until the node it names is removed from its
/// container. Presenting it afterwards, or to a container it never came
/// from, is rejected with
/// [`TreeError::InvalidPosition`](crate::errors::TreeError::InvalidPosition).
pub struct Position<T> {
    /// Identity of the owning container
    pub(crate) container: Uuid,
    /// Slot of the node in the container's arena
    pub(crate) node: Index,
    _marker: PhantomData<T>,
}

impl<T> Position<T> {
    pub(crate) fn new(container: Uuid, node: Index) -> Self {
        Self {
            container,
            node,
            _marker: PhantomData,
        }
    }
}

// Handles are plain slot references. Implemented by hand so none of the
// impls puts a bound on `T`.
impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container && self.node == other.node
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.container.hash(state);
        self.node.hash(state);
    }
}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({:?})", self.node)
    }
}
