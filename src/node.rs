//! Node identity.
//!
//! A [`Node`] is a generational key into a [`crate::tree::Taffy`] arena, not
//! an owning handle -- removing a node and later reusing its slot produces a
//! different key, so a stale `Node` held elsewhere can never alias new data.

use crate::geometry::Size;
use crate::style::MeasureMode;

slotmap::new_key_type! {
    /// Identifies a node within a [`crate::tree::Taffy`] tree.
    pub struct Node;
}

/// Signature of the measure callback: given the node's own inner
/// (content-box) width/height constraints, return its content size.
///
/// Only ever invoked on a childless node that has one set. The callback
/// must return non-negative, finite dimensions and must not mutate any node
/// in the tree it is being called from.
pub type MeasureFunc = Box<dyn FnMut(Size<Option<f32>>, Size<MeasureMode>) -> Size<f32>>;

/// Signature of the pretty-print callback, invoked by the debug pretty
/// printer for each node it visits.
pub type PrintFunc = Box<dyn FnMut(Node)>;
