//! The layout algorithm itself.
//!
//! Mirrors the teacher's own `compute::{flexbox, leaf, common}` split: this
//! module owns the shared cache-consult/store dispatch
//! (`layout_node_internal`, folding the teacher's `common` module in, since
//! the cache consult/store step is this engine's only cross-cutting
//! concern), `leaf` owns the childless-node measure rules, and `flexbox`
//! owns the recursive multi-child algorithm.

pub(crate) mod cache;
pub(crate) mod flexbox;
pub(crate) mod leaf;

use crate::geometry::{PhysicalDimension, Size};
use crate::layout::CacheEntry;
use crate::node::Node;
use crate::style::{FlexDirection, MeasureMode, PositionType, Style};
use crate::tree::Taffy;
use crate::value::{float_eq, FloatValue};

/// §4.5's mode-derivation rule, applied independently per axis: definite
/// availability wins as `Exactly`; otherwise a definite style dimension
/// (plus margin) is used as `Exactly`; otherwise a non-negative max
/// dimension bounds an `AtMost` query; otherwise the axis is `Undefined`.
pub(crate) fn resolve_available_mode(
    available: Option<f32>,
    style_dim: FloatValue,
    margin: f32,
    max_dim: FloatValue,
) -> (f32, MeasureMode) {
    if let Some(available) = available {
        (available, MeasureMode::Exactly)
    } else if let Some(style_dim) = style_dim.maybe() {
        (style_dim + margin, MeasureMode::Exactly)
    } else if let Some(max_dim) = max_dim.maybe() {
        if max_dim >= 0.0 {
            (max_dim, MeasureMode::AtMost)
        } else {
            (f32::NAN, MeasureMode::Undefined)
        }
    } else {
        (f32::NAN, MeasureMode::Undefined)
    }
}

/// A node is relatively positioned when its own `position` offsets should
/// shift it from wherever normal flow (or the absolute-positioning rules of
/// §4.4 step K) would otherwise have placed it -- spec §1's "position
/// offsets" style field, applied uniformly to every node's own placement
/// rather than only to the root, since CSS relative positioning is not
/// restricted to the root.
pub(crate) fn relative_position_offset(style: &Style, axis: FlexDirection) -> f32 {
    if style.position_type != PositionType::Relative {
        return 0.0;
    }
    let leading = style.leading_position(axis);
    if let Some(leading) = leading.maybe() {
        return leading;
    }
    let trailing = style.trailing_position(axis);
    if let Some(trailing) = trailing.maybe() {
        return -trailing;
    }
    0.0
}

pub(crate) fn get_dim(size: Size<FloatValue>, dim: PhysicalDimension) -> f32 {
    (*size.get(dim)).unwrap_or(0.0)
}

/// Two nodes' cached input is an exact match -- the strict-equality path
/// used for container nodes (spec §4.4 step 2, "otherwise consult by exact
/// equality of availabilities and modes").
fn exact_match(entry: &CacheEntry, width: f32, height: f32, width_mode: MeasureMode, height_mode: MeasureMode) -> bool {
    entry.width_measure_mode == width_mode
        && entry.height_measure_mode == height_mode
        && float_eq(entry.available_width, width)
        && float_eq(entry.available_height, height)
}

/// §4.4's dispatch entry: consult the cache, and on a miss, run
/// `layout_node_impl` and store a fresh entry. Returns whether the node was
/// actually recomputed (`true`) or served entirely from cache (`false`).
pub(crate) fn layout_node_internal(
    tree: &mut Taffy,
    node: Node,
    available_width: f32,
    available_height: f32,
    parent_direction: crate::style::Direction,
    width_mode: MeasureMode,
    height_mode: MeasureMode,
    perform_layout: bool,
    generation: u32,
) -> bool {
    debug_assert_eq!(
        crate::value::is_defined(available_width),
        width_mode != MeasureMode::Undefined,
        "available width must be finite iff width_mode is not Undefined"
    );
    debug_assert_eq!(
        crate::value::is_defined(available_height),
        height_mode != MeasureMode::Undefined,
        "available height must be finite iff height_mode is not Undefined"
    );

    let style = tree.nodes[node].style;
    let margin_row = style.margin_for_axis(FlexDirection::Row);
    let margin_column = style.margin_for_axis(FlexDirection::Column);

    let data = &tree.nodes[node];
    let need_to_visit = (data.is_dirty && data.layout.generation_count != generation)
        || data.layout.last_parent_direction != parent_direction;
    let is_leaf_with_measure = data.measure.is_some() && data.is_childless();
    let is_text_node = data.is_text_node;

    if need_to_visit {
        tree.nodes[node].layout.invalidate_cache();
    }

    let query = cache::CacheQuery {
        available_width,
        available_height,
        width_mode,
        height_mode,
        margin_row,
        margin_column,
    };

    let mut found: Option<(f32, f32)> = None;
    {
        let data = &mut tree.nodes[node];
        if is_leaf_with_measure {
            if perform_layout {
                if let Some(entry) = data.layout.cached_layout.as_mut() {
                    found = cache::reuse(entry, &query, is_text_node);
                }
            } else {
                for entry in data.layout.cached_measurements.iter_mut() {
                    if let Some(result) = cache::reuse(entry, &query, is_text_node) {
                        found = Some(result);
                        break;
                    }
                }
            }
        } else if perform_layout {
            if let Some(entry) = &data.layout.cached_layout {
                if exact_match(entry, available_width, available_height, width_mode, height_mode) {
                    found = Some((entry.computed_width, entry.computed_height));
                }
            }
        } else {
            for entry in data.layout.cached_measurements.iter() {
                if exact_match(entry, available_width, available_height, width_mode, height_mode) {
                    found = Some((entry.computed_width, entry.computed_height));
                    break;
                }
            }
        }
    }

    // `found` can only be `Some` here if `need_to_visit` was false: the
    // cache was just invalidated above otherwise, leaving nothing to match.
    if let Some((width, height)) = found {
        tree.nodes[node].layout.measured_dimensions =
            Size { width: FloatValue::defined(width), height: FloatValue::defined(height) };
        return false;
    }

    let measured =
        flexbox::layout_node_impl(tree, node, available_width, available_height, parent_direction, width_mode, height_mode, perform_layout, generation);

    let entry = CacheEntry {
        available_width,
        available_height,
        width_measure_mode: width_mode,
        height_measure_mode: height_mode,
        margin_row,
        margin_column,
        computed_width: measured.width,
        computed_height: measured.height,
    };
    let data = &mut tree.nodes[node].layout;
    data.store(entry, perform_layout);
    data.measured_dimensions = measured.map(FloatValue::defined);
    data.last_parent_direction = parent_direction;
    data.generation_count = generation;
    if perform_layout {
        data.dimensions = measured;
        tree.nodes[node].has_new_layout = true;
        tree.nodes[node].is_dirty = false;
    }
    true
}

/// §4.5's final step for the root: apply its own margin and relative
/// position offset against the implicit zero-origin parent. Every other
/// node's position was already written by its parent during the recursive
/// pass (§4.4 steps G/H/I/K/L).
pub(crate) fn set_position(tree: &mut Taffy, node: Node, _parent_direction: crate::style::Direction) {
    let style = tree.nodes[node].style;
    let left = style.leading_margin(FlexDirection::Row).unwrap_or(0.0) + relative_position_offset(&style, FlexDirection::Row);
    let top = style.leading_margin(FlexDirection::Column).unwrap_or(0.0) + relative_position_offset(&style, FlexDirection::Column);
    let layout = &mut tree.nodes[node].layout;
    layout.position.left = left;
    layout.position.top = top;
}
