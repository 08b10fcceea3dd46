//! The tree-manipulation and node-storage layer.
//!
//! Spec treats this as "an external collaborator specified only by
//! contract" -- no original design work lives here, just field plumbing
//! over a [`slotmap`] arena, the way the teacher crate separates its own
//! `tree` module from `compute`.

use core::cell::Cell;

use slotmap::SlotMap;

use crate::error::{TaffyError, TaffyResult};
use crate::geometry::Size;
use crate::layout::Layout;
use crate::node::{MeasureFunc, Node, PrintFunc};
use crate::style::{Direction, FlexDirection, MeasureMode, Style};
use crate::value::FloatValue;

/// Everything a node owns besides its identity.
pub(crate) struct NodeData {
    pub style: Style,
    pub layout: Layout,
    pub parent: Option<Node>,
    pub children: Vec<Node>,
    /// Which flex line this node landed in during its parent's last pack
    /// (§4.4 step E). Meaningless until the parent has been laid out.
    pub line_index: usize,
    pub has_new_layout: bool,
    pub is_dirty: bool,
    pub measure: Option<MeasureFunc>,
    pub print: Option<PrintFunc>,
    /// Opts a childless node with a measure callback into the cache's
    /// text-node heuristic (§4.3).
    pub is_text_node: bool,
    /// Scratch "next node in this pass's scratch list" link (§9, "Scratch
    /// linked list of children"). Valid only during a single
    /// `layout_node_impl` activation; never read outside of it.
    pub next_child: Cell<Option<Node>>,
}

impl NodeData {
    fn new(style: Style) -> Self {
        Self {
            style,
            layout: Layout::default(),
            parent: None,
            children: Vec::new(),
            line_index: 0,
            has_new_layout: false,
            is_dirty: true,
            measure: None,
            print: None,
            is_text_node: false,
            next_child: Cell::new(None),
        }
    }

    pub(crate) fn is_childless(&self) -> bool {
        self.children.is_empty()
    }
}

/// The flexbox layout tree: a [`slotmap`] arena of [`NodeData`] plus the
/// process-wide (well, per-`Taffy`-instance, per §9's "should be scoped per
/// engine instance" note) generation counter.
pub struct Taffy {
    pub(crate) nodes: SlotMap<Node, NodeData>,
    pub(crate) generation: u32,
}

impl Default for Taffy {
    fn default() -> Self {
        Self::new()
    }
}

impl Taffy {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: SlotMap::with_capacity_and_key(capacity), generation: 0 }
    }

    pub fn total_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Create a childless node with no measure callback -- its intrinsic
    /// size is just its padding and border (§4.4 step B).
    pub fn new_leaf(&mut self, style: Style) -> TaffyResult<Node> {
        Ok(self.nodes.insert(NodeData::new(style)))
    }

    /// Create a childless node whose intrinsic size comes from invoking
    /// `measure` (§4.4 step A). The node is also flagged as a text node,
    /// opting it into the cache's text-heuristic (§4.3) -- matching
    /// spec's framing that the measure callback is "only ever invoked on a
    /// childless node that set one", i.e. exactly the engine's notion of a
    /// leaf/text node.
    pub fn new_leaf_with_measure(&mut self, style: Style, measure: MeasureFunc) -> TaffyResult<Node> {
        let mut data = NodeData::new(style);
        data.measure = Some(measure);
        data.is_text_node = true;
        Ok(self.nodes.insert(data))
    }

    pub fn new_with_children(&mut self, style: Style, children: &[Node]) -> TaffyResult<Node> {
        let parent = self.nodes.insert(NodeData::new(style));
        for &child in children {
            self.add_child(parent, child)?;
        }
        Ok(parent)
    }

    /// Append `child` to `parent`'s child list. A child with an existing
    /// parent is a usage error per spec §3 invariant 1 -- it goes through
    /// the assertion hook, not a recoverable [`TaffyError`].
    pub fn add_child(&mut self, parent: Node, child: Node) -> TaffyResult<()> {
        let index = self.nodes.get(parent).ok_or(TaffyError::InvalidInputNode(parent))?.children.len();
        self.insert_child_at_index(parent, index, child)
    }

    pub fn insert_child_at_index(&mut self, parent: Node, index: usize, child: Node) -> TaffyResult<()> {
        assert!(
            self.nodes.get(child).map_or(false, |c| c.parent.is_none()),
            "inserting a child that already has a parent is a usage error"
        );
        let child_count =
            self.nodes.get(parent).ok_or(TaffyError::InvalidInputNode(parent))?.children.len();
        if index > child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index: index, child_count });
        }
        self.nodes.get_mut(parent).unwrap().children.insert(index, child);
        self.nodes.get_mut(child).unwrap().parent = Some(parent);
        self.mark_dirty_internal(parent);
        Ok(())
    }

    pub fn remove_child(&mut self, parent: Node, child: Node) -> TaffyResult<Node> {
        let index = self
            .nodes
            .get(parent)
            .ok_or(TaffyError::InvalidInputNode(parent))?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(TaffyError::InvalidChild { parent, child })?;
        self.remove_child_at_index(parent, index)
    }

    pub fn remove_child_at_index(&mut self, parent: Node, index: usize) -> TaffyResult<Node> {
        let child_count =
            self.nodes.get(parent).ok_or(TaffyError::InvalidInputNode(parent))?.children.len();
        if index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index: index, child_count });
        }
        let child = self.nodes.get_mut(parent).unwrap().children.remove(index);
        if let Some(child_data) = self.nodes.get_mut(child) {
            child_data.parent = None;
        }
        self.mark_dirty_internal(parent);
        Ok(child)
    }

    pub fn child_count(&self, parent: Node) -> TaffyResult<usize> {
        Ok(self.nodes.get(parent).ok_or(TaffyError::InvalidInputNode(parent))?.children.len())
    }

    pub fn child_at_index(&self, parent: Node, index: usize) -> TaffyResult<Node> {
        let node = self.nodes.get(parent).ok_or(TaffyError::InvalidInputNode(parent))?;
        node.children.get(index).copied().ok_or(TaffyError::ChildIndexOutOfBounds {
            parent,
            child_index: index,
            child_count: node.children.len(),
        })
    }

    pub fn children(&self, parent: Node) -> TaffyResult<&[Node]> {
        Ok(&self.nodes.get(parent).ok_or(TaffyError::InvalidInputNode(parent))?.children)
    }

    pub fn parent(&self, node: Node) -> Option<Node> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Free `node` and every descendant, parent first removing it from its
    /// own parent's child list (spec §3, "destroyed explicitly -- the
    /// recursive destroyer removes and frees every descendant first").
    pub fn remove(&mut self, node: Node) -> TaffyResult<()> {
        if let Some(parent) = self.parent(node) {
            let _ = self.remove_child(parent, node);
        }
        self.remove_recursive(node);
        Ok(())
    }

    fn remove_recursive(&mut self, node: Node) {
        if let Some(data) = self.nodes.remove(node) {
            for child in data.children {
                self.remove_recursive(child);
            }
        }
    }

    pub fn style(&self, node: Node) -> TaffyResult<&Style> {
        Ok(&self.nodes.get(node).ok_or(TaffyError::InvalidInputNode(node))?.style)
    }

    /// Whole-style replacement. A no-op write (new == old) does not dirty
    /// the node, matching spec §4.1's "any style mutation ... except
    /// no-op writes where old==new".
    pub fn set_style(&mut self, node: Node, style: Style) -> TaffyResult<()> {
        let data = self.nodes.get_mut(node).ok_or(TaffyError::InvalidInputNode(node))?;
        if data.style == style {
            return Ok(());
        }
        data.style = style;
        self.mark_dirty_internal(node);
        Ok(())
    }

    pub fn layout(&self, node: Node) -> TaffyResult<&Layout> {
        Ok(&self.nodes.get(node).ok_or(TaffyError::InvalidInputNode(node))?.layout)
    }

    pub fn is_dirty(&self, node: Node) -> TaffyResult<bool> {
        Ok(self.nodes.get(node).ok_or(TaffyError::InvalidInputNode(node))?.is_dirty)
    }

    pub fn has_new_layout(&self, node: Node) -> TaffyResult<bool> {
        Ok(self.nodes.get(node).ok_or(TaffyError::InvalidInputNode(node))?.has_new_layout)
    }

    pub fn set_has_new_layout(&mut self, node: Node, value: bool) -> TaffyResult<()> {
        self.nodes.get_mut(node).ok_or(TaffyError::InvalidInputNode(node))?.has_new_layout = value;
        Ok(())
    }

    pub fn set_measure(&mut self, node: Node, measure: Option<MeasureFunc>) -> TaffyResult<()> {
        let data = self.nodes.get_mut(node).ok_or(TaffyError::InvalidInputNode(node))?;
        data.measure = measure;
        drop(data);
        self.mark_dirty_internal(node);
        Ok(())
    }

    pub fn set_print(&mut self, node: Node, print: Option<PrintFunc>) -> TaffyResult<()> {
        self.nodes.get_mut(node).ok_or(TaffyError::InvalidInputNode(node))?.print = print;
        Ok(())
    }

    pub fn set_is_text_node(&mut self, node: Node, is_text_node: bool) -> TaffyResult<()> {
        self.nodes.get_mut(node).ok_or(TaffyError::InvalidInputNode(node))?.is_text_node = is_text_node;
        Ok(())
    }

    /// Public `markDirty`, restricted to a leaf with a measure callback
    /// (spec §6). Any other call is a usage error and goes through the
    /// assertion hook rather than returning a [`TaffyError`].
    pub fn mark_dirty(&mut self, node: Node) -> TaffyResult<()> {
        let data = self.nodes.get(node).ok_or(TaffyError::InvalidInputNode(node))?;
        assert!(
            data.is_childless() && data.measure.is_some(),
            "mark_dirty is only valid on a childless node with a measure callback"
        );
        self.mark_dirty_internal(node);
        Ok(())
    }

    /// The unchecked variant used by every internal mutation (tree
    /// structure changes, style setters). Sets `is_dirty`, clears
    /// `computed_flex_basis`, and recurses to the parent unless it is
    /// already dirty (spec §4.1).
    pub(crate) fn mark_dirty_internal(&mut self, node: Node) {
        let Some(data) = self.nodes.get_mut(node) else { return };
        data.is_dirty = true;
        data.layout.computed_flex_basis = FloatValue::UNDEFINED;
        if let Some(parent) = data.parent {
            if !self.nodes.get(parent).map_or(true, |p| p.is_dirty) {
                self.mark_dirty_internal(parent);
            }
        }
    }

    /// §4.5 public entry: derive width/height and their modes from the
    /// supplied availability and the root's own style, increment the
    /// generation, run the recursive algorithm, then set the root's
    /// position the way `setPosition` does for every other node (applying
    /// its own margin against an implicit zero parent origin).
    pub fn compute_layout(&mut self, node: Node, available_space: Size<Option<f32>>) -> TaffyResult<()> {
        if !self.nodes.contains_key(node) {
            return Err(TaffyError::InvalidInputNode(node));
        }
        self.generation = self.generation.wrapping_add(1);

        let style = self.style(node)?.clone();
        let (width, width_mode) = crate::compute::resolve_available_mode(
            available_space.width,
            style.dimension(crate::geometry::PhysicalDimension::Width),
            style.margin_for_axis(FlexDirection::Row),
            style.max_dimension(crate::geometry::PhysicalDimension::Width),
        );
        let (height, height_mode) = crate::compute::resolve_available_mode(
            available_space.height,
            style.dimension(crate::geometry::PhysicalDimension::Height),
            style.margin_for_axis(FlexDirection::Column),
            style.max_dimension(crate::geometry::PhysicalDimension::Height),
        );

        let parent_direction = Direction::LTR;
        let did_compute = crate::compute::layout_node_internal(
            self,
            node,
            width,
            height,
            parent_direction,
            width_mode,
            height_mode,
            true,
            self.generation,
        );

        if did_compute {
            crate::compute::set_position(self, node, parent_direction);
            #[cfg(feature = "debug")]
            crate::debug::print_tree(self, node);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserting_an_already_parented_child_panics() {
        let mut taffy = Taffy::new();
        let a = taffy.new_leaf(Style::default()).unwrap();
        let b = taffy.new_leaf(Style::default()).unwrap();
        taffy.add_child(a, b).unwrap();
        let c = taffy.new_leaf(Style::default()).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut taffy = taffy;
            taffy.add_child(c, b).unwrap();
        }));
        assert!(result.is_err());
    }

    #[test]
    fn removing_a_child_clears_its_parent_link() {
        let mut taffy = Taffy::new();
        let parent = taffy.new_leaf(Style::default()).unwrap();
        let child = taffy.new_leaf(Style::default()).unwrap();
        taffy.add_child(parent, child).unwrap();
        taffy.remove_child(parent, child).unwrap();
        assert_eq!(taffy.parent(child), None);
        assert_eq!(taffy.child_count(parent).unwrap(), 0);
    }

    #[test]
    fn mark_dirty_on_non_leaf_panics() {
        let mut taffy = Taffy::new();
        let parent = taffy.new_leaf(Style::default()).unwrap();
        let child = taffy.new_leaf(Style::default()).unwrap();
        taffy.add_child(parent, child).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut taffy = taffy;
            taffy.mark_dirty(parent).unwrap();
        }));
        assert!(result.is_err());
    }

    #[test]
    fn dirtying_a_child_propagates_to_every_ancestor() {
        let mut taffy = Taffy::new();
        let leaf = taffy.new_leaf_with_measure(
            Style::default(),
            Box::new(|_, _| Size { width: 10.0, height: 10.0 }),
        )
        .unwrap();
        let mid = taffy.new_with_children(Style::default(), &[leaf]).unwrap();
        let root = taffy.new_with_children(Style::default(), &[mid]).unwrap();
        taffy.compute_layout(root, Size { width: Some(100.0), height: Some(100.0) }).unwrap();
        assert!(!taffy.is_dirty(root).unwrap());

        taffy.mark_dirty(leaf).unwrap();
        assert!(taffy.is_dirty(leaf).unwrap());
        assert!(taffy.is_dirty(mid).unwrap());
        assert!(taffy.is_dirty(root).unwrap());
    }
}
