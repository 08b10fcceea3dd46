//! Error types for the handful of fallible tree operations.
//!
//! Invariant violations (inserting an already-parented child, calling the
//! leaf-only `mark_dirty` on an internal node, a layout call with
//! mismatched availability/mode) are usage errors per spec: they go through
//! the assertion hook (`debug_assert!`/`assert!`) rather than this type,
//! since the engine makes no attempt to recover from them. `TaffyError` is
//! reserved for recoverable, data-dependent failures a caller can sensibly
//! check for.

use core::fmt;

use crate::node::Node;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaffyError {
    /// A child index was out of bounds for the given parent.
    ChildIndexOutOfBounds { parent: Node, child_index: usize, child_count: usize },
    /// The node is not a child of the given parent.
    InvalidChild { parent: Node, child: Node },
    /// The node has no recorded layout yet (layout was never computed, or
    /// the node was removed from the tree it was computed against).
    InvalidInputNode(Node),
}

impl fmt::Display for TaffyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count } => write!(
                f,
                "Index {child_index} is out of bounds for parent {parent:?}, which has {child_count} children"
            ),
            TaffyError::InvalidChild { parent, child } => {
                write!(f, "Node {child:?} is not a child of parent {parent:?}")
            }
            TaffyError::InvalidInputNode(node) => write!(f, "Node {node:?} has no computed layout"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TaffyError {}

pub type TaffyResult<T> = Result<T, TaffyError>;
