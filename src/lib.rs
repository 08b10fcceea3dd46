//! A CSS-flexbox-compatible box-layout engine over a mutable node tree.
//!
//! A [`Taffy`] owns a [`slotmap`] arena of nodes; each node carries a
//! [`Style`] and, after [`Taffy::compute_layout`], a [`Layout`] describing
//! its resolved position and size relative to its parent's content box.
//! Childless nodes can be given a measure callback (`new_leaf_with_measure`)
//! so the tree can embed externally-sized content (text, images, a native
//! widget) without the engine knowing anything about what it contains.
//!
//! ```
//! use flexcore::{Size, Style, Taffy};
//!
//! let mut taffy = Taffy::new();
//! let child = taffy.new_leaf(Style::default()).unwrap();
//! let root = taffy.new_with_children(Style::default(), &[child]).unwrap();
//! taffy.compute_layout(root, Size { width: Some(100.0), height: Some(100.0) }).unwrap();
//! let layout = taffy.layout(root).unwrap();
//! assert_eq!(layout.dimensions.width, 100.0);
//! ```

pub mod axis;
mod compute;
#[cfg(feature = "debug")]
pub mod debug;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod node;
pub mod style;
pub mod tree;
pub mod value;

pub use error::{TaffyError, TaffyResult};
pub use geometry::{Point, Rect, Size};
pub use layout::Layout;
pub use node::{MeasureFunc, Node, PrintFunc};
pub use style::{
    AlignContent, AlignItems, AlignSelf, Direction, Edge, Edges, FlexDirection, FlexWrap,
    JustifyContent, MeasureMode, Overflow, PositionType, Style,
};
pub use tree::Taffy;
pub use value::FloatValue;
