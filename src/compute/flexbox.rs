//! The recursive flexbox algorithm: §4.4 steps C through L.
//!
//! This is the 70%-of-core component spec calls out. Children are threaded
//! through two scratch lists during a single activation (§9, "Scratch
//! linked list of children"): absolute children use each node's
//! `next_child` field directly, the way the historical implementation
//! does; relative children are grouped into per-line `Vec<Node>`s, the
//! accepted alternative spec's own design notes name ("build an index
//! vector per line").

use crate::axis::{self, cross_axis as resolve_cross_axis, needs_cross_trailing_pos, resolve_axis, resolve_direction};
use crate::geometry::{PhysicalDimension, Size};
use crate::node::Node;
use crate::style::{AlignContent, AlignItems, Direction, FlexDirection, JustifyContent, MeasureMode, Overflow, PositionType, Style};
use crate::tree::Taffy;
use crate::value::FloatValue;

use super::{get_dim, leaf, relative_position_offset};

/// One packed flex line (§4.4 step E): the relative children it holds, in
/// order, plus the running totals used to resolve flexible lengths.
struct FlexLine {
    items: Vec<Node>,
    /// `sizeConsumed`: sum of each item's computed basis + its main-axis
    /// margin, before flexible-length resolution.
    size_consumed: f32,
    total_flex_grow: f32,
    /// Sum of `-flexShrink * basis` over the line (the "scaled shrink
    /// factor" spec names).
    total_flex_shrink_scaled: f32,
    /// Filled in once this line's children have been positioned: the
    /// line's resolved cross-axis extent.
    cross_dim: f32,
    /// Filled in once pass 2 has walked the line: its full main-axis
    /// extent, including the container's own leading and trailing
    /// padding and border (so `bound()` needs no further adjustment).
    main_dim: f32,
}

pub(crate) fn layout_node_impl(
    tree: &mut Taffy,
    node: Node,
    available_width: f32,
    available_height: f32,
    parent_direction: Direction,
    width_mode: MeasureMode,
    height_mode: MeasureMode,
    perform_layout: bool,
    generation: u32,
) -> Size<f32> {
    let style = tree.nodes[node].style;
    let direction = resolve_direction(style.direction, Some(parent_direction));
    let main_axis = resolve_axis(style.flex_direction, direction);
    let cross_axis = resolve_cross_axis(main_axis, direction);
    let is_row = main_axis.is_row();

    tree.nodes[node].layout.direction = direction;

    let margin_row = style.margin_for_axis(FlexDirection::Row);
    let margin_column = style.margin_for_axis(FlexDirection::Column);

    if tree.nodes[node].is_childless() {
        return leaf::measure(tree, node, &style, available_width, available_height, width_mode, height_mode);
    }

    // Step C: measurement shortcut for degenerate available space.
    if !perform_layout {
        let width_zero = width_mode == MeasureMode::AtMost && available_width <= 0.0;
        let height_zero = height_mode == MeasureMode::AtMost && available_height <= 0.0;
        if width_zero && height_zero {
            return Size { width: style.bound_axis(FlexDirection::Row, 0.0), height: style.bound_axis(FlexDirection::Column, 0.0) };
        }
        if width_zero && height_mode == MeasureMode::Exactly {
            return Size {
                width: style.bound_axis(FlexDirection::Row, 0.0),
                height: style.bound_axis(FlexDirection::Column, available_height - margin_column),
            };
        }
        if height_zero && width_mode == MeasureMode::Exactly {
            return Size {
                width: style.bound_axis(FlexDirection::Row, available_width - margin_row),
                height: style.bound_axis(FlexDirection::Column, 0.0),
            };
        }
        if width_mode == MeasureMode::Exactly && height_mode == MeasureMode::Exactly {
            return Size {
                width: style.bound_axis(FlexDirection::Row, available_width - margin_row),
                height: style.bound_axis(FlexDirection::Column, available_height - margin_column),
            };
        }
    }

    let padding_border_row = style.padding_and_border_for_axis(FlexDirection::Row);
    let padding_border_column = style.padding_and_border_for_axis(FlexDirection::Column);
    let available_inner_width = crate::value::is_defined(available_width)
        .then(|| (available_width - margin_row - padding_border_row).max(0.0));
    let available_inner_height = crate::value::is_defined(available_height)
        .then(|| (available_height - margin_column - padding_border_column).max(0.0));
    let (available_inner_main, available_inner_cross) =
        if is_row { (available_inner_width, available_inner_height) } else { (available_inner_height, available_inner_width) };

    let container_main_mode = if is_row { width_mode } else { height_mode };
    let container_cross_mode = if is_row { height_mode } else { width_mode };

    let children: Vec<Node> = tree.nodes[node].children.clone();

    // Step D: compute each relative child's flex basis; thread absolute
    // children onto the scratch `next_child` list.
    let mut relative_children: Vec<Node> = Vec::with_capacity(children.len());
    let mut first_absolute: Option<Node> = None;
    let mut last_absolute: Option<Node> = None;
    for &child in &children {
        let child_style = tree.nodes[child].style;
        if child_style.position_type == PositionType::Absolute {
            tree.nodes[child].next_child.set(None);
            match last_absolute {
                Some(prev) => tree.nodes[prev].next_child.set(Some(child)),
                None => first_absolute = Some(child),
            }
            last_absolute = Some(child);
            continue;
        }
        compute_flex_basis_for_child(
            tree,
            child,
            &style,
            direction,
            main_axis,
            cross_axis,
            available_inner_width,
            available_inner_height,
            available_inner_main,
            width_mode,
            height_mode,
            generation,
        );
        relative_children.push(child);
    }

    // Step E: pack relative children into flex lines.
    let wrap = style.flex_wrap == crate::style::FlexWrap::Wrap;
    let mut lines: Vec<FlexLine> = Vec::new();
    let mut idx = 0usize;
    while idx < relative_children.len() {
        let start = idx;
        let mut size_consumed = 0.0f32;
        let mut total_grow = 0.0f32;
        let mut total_shrink_scaled = 0.0f32;
        loop {
            if idx >= relative_children.len() {
                break;
            }
            let child = relative_children[idx];
            let child_style = tree.nodes[child].style;
            let basis = tree.nodes[child].layout.computed_flex_basis.unwrap_or(0.0);
            let item_size = basis + child_style.margin_for_axis(main_axis);
            if wrap && idx > start {
                if let Some(inner_main) = available_inner_main {
                    if size_consumed + item_size > inner_main {
                        break;
                    }
                }
            }
            size_consumed += item_size;
            total_grow += child_style.flex_grow;
            total_shrink_scaled += -child_style.flex_shrink * basis;
            tree.nodes[child].line_index = lines.len();
            idx += 1;
        }
        let items = relative_children[start..idx].to_vec();
        lines.push(FlexLine {
            items,
            size_consumed,
            total_flex_grow: total_grow,
            total_flex_shrink_scaled: total_shrink_scaled,
            cross_dim: 0.0,
            main_dim: 0.0,
        });
    }
    if lines.is_empty() {
        lines.push(FlexLine { items: Vec::new(), size_consumed: 0.0, total_flex_grow: 0.0, total_flex_shrink_scaled: 0.0, cross_dim: 0.0, main_dim: 0.0 });
    }

    let mut total_line_cross_dim = 0.0f32;
    let leading_padding_border_main = style.leading_padding_and_border(main_axis);
    let trailing_padding_border_main = style.trailing_padding_and_border(main_axis);
    let leading_padding_border_cross = style.leading_padding_and_border(cross_axis);

    for line in &mut lines {
        if line.items.is_empty() {
            line.main_dim = leading_padding_border_main + trailing_padding_border_main;
            continue;
        }

        let remaining_free_initial = match available_inner_main {
            Some(inner) => inner - line.size_consumed,
            None => {
                if line.size_consumed < 0.0 {
                    -line.size_consumed
                } else {
                    0.0
                }
            }
        };

        // Step F is skipped when the caller is only measuring and the
        // cross mode is pinned Exactly: the line's main extent is wanted
        // only for this node's own Undefined/AtMost main-dim total
        // (Step J), so running the full grow/shrink resolution -- which
        // means a `layout_node_internal` call per child -- would be pure
        // overhead. Each child's already-known flex basis stands in for
        // its resolved main size instead.
        let skip_flex_resolution = !perform_layout && container_cross_mode == MeasureMode::Exactly;
        let remaining_free = if skip_flex_resolution {
            remaining_free_initial
        } else {
            resolve_flexible_lengths(
                tree,
                line,
                remaining_free_initial,
                main_axis,
                cross_axis,
                &style,
                direction,
                container_cross_mode,
                available_inner_cross,
                perform_layout,
                generation,
            )
        };

        // Step G: justify along the main axis. `remainingFree` only gets
        // re-derived from a main-axis min-dim when the container's own
        // main mode is AtMost; every other case keeps whatever Step F
        // left (typically ~0 once growth has absorbed it, or the line's
        // untouched slack when nothing could grow).
        let justify_free = if container_main_mode == MeasureMode::AtMost && remaining_free > 0.0 {
            match style.min_main_dimension(main_axis).maybe() {
                Some(min_main) if min_main >= 0.0 => {
                    let inner = available_inner_main.unwrap_or(0.0);
                    (min_main - (inner - remaining_free)).max(0.0)
                }
                _ => 0.0,
            }
        } else {
            remaining_free
        };

        let items_on_line = line.items.len();
        let (leading, between) = match style.justify_content {
            JustifyContent::FlexStart => (0.0, 0.0),
            JustifyContent::Center => (justify_free / 2.0, 0.0),
            JustifyContent::FlexEnd => (justify_free, 0.0),
            JustifyContent::SpaceBetween => {
                (0.0, if items_on_line > 1 { justify_free.max(0.0) / (items_on_line as f32 - 1.0) } else { 0.0 })
            }
            JustifyContent::SpaceAround => (justify_free / (2.0 * items_on_line as f32), justify_free / items_on_line as f32),
        };

        let mut main_cursor = leading_padding_border_main + leading;
        for (i, &child) in line.items.iter().enumerate() {
            let child_style = tree.nodes[child].style;
            if i > 0 {
                main_cursor += between;
            }
            let leading_margin_main = child_style.leading_margin(main_axis).unwrap_or(0.0);
            let offset = relative_position_offset(&child_style, main_axis);
            set_leading_physical(tree, child, main_axis, main_cursor + leading_margin_main + offset);

            let main_size = if skip_flex_resolution {
                tree.nodes[child].layout.computed_flex_basis.unwrap_or(0.0)
            } else {
                get_dim(tree.nodes[child].layout.measured_dimensions, axis::dimension(main_axis))
            };
            main_cursor += main_size + child_style.margin_for_axis(main_axis);
        }
        line.main_dim = main_cursor + trailing_padding_border_main;

        // Step H: stretch-relayout pass, then cross-axis alignment.
        for &child in &line.items {
            let child_style = tree.nodes[child].style;
            let align = child_style.align_self.resolve(style.align_items);
            let cross_dim_defined = child_style.dimension(axis::dimension(cross_axis)).is_defined();
            if align == AlignItems::Stretch && !cross_dim_defined {
                let measured_main = get_dim(tree.nodes[child].layout.measured_dimensions, axis::dimension(main_axis));
                let main_with_margin = measured_main + child_style.margin_for_axis(main_axis);
                let cross_target = line_target_cross(&style, container_cross_mode, available_inner_cross, wrap, line_raw_cross(tree, &line.items, cross_axis));
                let (w, h) = if is_row { (main_with_margin, cross_target) } else { (cross_target, main_with_margin) };
                super::layout_node_internal(tree, child, w, h, direction, MeasureMode::Exactly, MeasureMode::Exactly, true, generation);
            }
        }

        let line_cross_raw = line_raw_cross(tree, &line.items, cross_axis);
        let resolved_cross = line_target_cross(&style, container_cross_mode, available_inner_cross, wrap, line_cross_raw);

        for &child in &line.items {
            let child_style = tree.nodes[child].style;
            let align = child_style.align_self.resolve(style.align_items);
            let child_cross_measured = get_dim(tree.nodes[child].layout.measured_dimensions, axis::dimension(cross_axis));
            let child_outer_cross = child_cross_measured + child_style.margin_for_axis(cross_axis);
            let remaining_cross = resolved_cross - child_outer_cross;
            let lead = leading_padding_border_cross
                + match align {
                    AlignItems::Center => remaining_cross / 2.0,
                    AlignItems::FlexEnd => remaining_cross,
                    AlignItems::FlexStart | AlignItems::Stretch => 0.0,
                };
            let leading_margin_cross = child_style.leading_margin(cross_axis).unwrap_or(0.0);
            let offset = relative_position_offset(&child_style, cross_axis);
            set_leading_physical(tree, child, cross_axis, lead + leading_margin_cross + offset + total_line_cross_dim);
        }

        line.cross_dim = resolved_cross;
        total_line_cross_dim += resolved_cross;
    }

    // Step I: multi-line content alignment, overriding step H's cross
    // positions.
    if lines.len() > 1 && perform_layout {
        if let Some(inner_cross) = available_inner_cross {
            let total_cross: f32 = lines.iter().map(|l| l.cross_dim).sum();
            let remaining_align = inner_cross - total_cross;
            let n = lines.len() as f32;
            let (start, extra_per_line, between_line) = match style.align_content {
                AlignContent::FlexStart => (leading_padding_border_cross, 0.0, 0.0),
                AlignContent::FlexEnd => (leading_padding_border_cross + remaining_align, 0.0, 0.0),
                AlignContent::Center => (leading_padding_border_cross + remaining_align / 2.0, 0.0, 0.0),
                AlignContent::Stretch => (leading_padding_border_cross, remaining_align / n, 0.0),
                AlignContent::SpaceBetween => {
                    (leading_padding_border_cross, 0.0, if n > 1.0 { remaining_align.max(0.0) / (n - 1.0) } else { 0.0 })
                }
                AlignContent::SpaceAround => (leading_padding_border_cross + remaining_align / (2.0 * n), 0.0, remaining_align / n),
            };
            let mut current_lead = start;
            for line in &lines {
                let line_height = line.cross_dim + extra_per_line;
                for &child in &line.items {
                    let child_style = tree.nodes[child].style;
                    let align = child_style.align_self.resolve(style.align_items);
                    let child_cross_measured = get_dim(tree.nodes[child].layout.measured_dimensions, axis::dimension(cross_axis));
                    let leading_margin_cross = child_style.leading_margin(cross_axis).unwrap_or(0.0);
                    let trailing_margin_cross = child_style.trailing_margin(cross_axis).unwrap_or(0.0);
                    let pos = match align {
                        AlignItems::FlexStart => current_lead + leading_margin_cross,
                        AlignItems::FlexEnd => current_lead + line_height - trailing_margin_cross - child_cross_measured,
                        AlignItems::Center => current_lead + (line_height - child_cross_measured) / 2.0,
                        AlignItems::Stretch => current_lead + leading_margin_cross,
                    };
                    let offset = relative_position_offset(&child_style, cross_axis);
                    set_leading_physical(tree, child, cross_axis, pos + offset);
                }
                current_lead += line_height + between_line;
            }
        }
    }

    // Step J: the container's own dimensions.
    let mut width = style.bound_axis(FlexDirection::Row, available_width - margin_row);
    let mut height = style.bound_axis(FlexDirection::Column, available_height - margin_column);
    let max_line_main = lines.iter().map(|l| l.main_dim).fold(0.0f32, f32::max);
    let total_cross = lines.iter().map(|l| l.cross_dim).sum::<f32>() + style.padding_and_border_for_axis(cross_axis);

    let main_resolved = match container_main_mode {
        MeasureMode::Undefined => Some(style.bound_axis(main_axis, max_line_main)),
        MeasureMode::AtMost => {
            let inner = available_inner_main.unwrap_or(0.0);
            let pad_main = style.padding_and_border_for_axis(main_axis);
            Some((inner + pad_main).min(style.bound_axis_within_min_and_max(main_axis, max_line_main)).max(pad_main))
        }
        MeasureMode::Exactly => None,
    };
    if let Some(v) = main_resolved {
        if is_row {
            width = v;
        } else {
            height = v;
        }
    }

    let cross_resolved = match container_cross_mode {
        MeasureMode::Undefined => Some(style.bound_axis(cross_axis, total_cross)),
        MeasureMode::AtMost => {
            let inner = available_inner_cross.unwrap_or(0.0);
            let pad_cross = style.padding_and_border_for_axis(cross_axis);
            Some((inner + pad_cross).min(style.bound_axis_within_min_and_max(cross_axis, total_cross)).max(pad_cross))
        }
        MeasureMode::Exactly => None,
    };
    if let Some(v) = cross_resolved {
        if is_row {
            height = v;
        } else {
            width = v;
        }
    }

    // Step K: absolute children.
    if perform_layout {
        let mut cursor = first_absolute;
        while let Some(child) = cursor {
            layout_absolute_child(tree, node, child, &style, direction, Size { width, height }, generation);
            cursor = tree.nodes[child].next_child.get();
        }
    }

    // Step L: trailing-position fix-up for reverse axes.
    if perform_layout {
        if main_axis.is_reverse() {
            let main_measured = if is_row { width } else { height };
            for &child in &relative_children {
                fix_up_trailing(tree, child, main_axis, main_measured);
            }
            let mut cursor = first_absolute;
            while let Some(child) = cursor {
                fix_up_trailing(tree, child, main_axis, main_measured);
                cursor = tree.nodes[child].next_child.get();
            }
        }
        if needs_cross_trailing_pos(cross_axis) {
            let cross_measured = if is_row { height } else { width };
            for &child in &relative_children {
                fix_up_trailing(tree, child, cross_axis, cross_measured);
            }
            let mut cursor = first_absolute;
            while let Some(child) = cursor {
                fix_up_trailing(tree, child, cross_axis, cross_measured);
                cursor = tree.nodes[child].next_child.get();
            }
        }
    }

    Size { width, height }
}

/// The line's cross dimension before any container-mode clamp: the max
/// margin-box cross size over its children, read fresh (after any stretch
/// relayout has already updated `measured_dimensions`).
fn line_raw_cross(tree: &Taffy, items: &[Node], cross_axis: FlexDirection) -> f32 {
    items.iter().fold(0.0f32, |acc, &child| {
        let child_style = tree.nodes[child].style;
        let measured_cross = get_dim(tree.nodes[child].layout.measured_dimensions, axis::dimension(cross_axis));
        acc.max(measured_cross + child_style.margin_for_axis(cross_axis))
    })
}

/// §4.4 step H's `containerCross` clamp: bound to `availableInnerCross`
/// when the container's cross mode is `AtMost`; pin to it outright when
/// the container's cross mode is `Exactly` and there is only one line.
fn line_target_cross(
    style: &Style,
    container_cross_mode: MeasureMode,
    available_inner_cross: Option<f32>,
    wrap: bool,
    raw: f32,
) -> f32 {
    let mut resolved = raw;
    if container_cross_mode == MeasureMode::AtMost {
        if let Some(inner) = available_inner_cross {
            resolved = resolved.min(inner);
        }
    }
    if container_cross_mode == MeasureMode::Exactly && !wrap {
        if let Some(inner) = available_inner_cross {
            resolved = inner;
        }
    }
    let _ = style;
    resolved
}

#[allow(clippy::too_many_arguments)]
fn compute_flex_basis_for_child(
    tree: &mut Taffy,
    child: Node,
    parent_style: &Style,
    direction: Direction,
    main_axis: FlexDirection,
    cross_axis: FlexDirection,
    available_inner_width: Option<f32>,
    available_inner_height: Option<f32>,
    available_inner_main: Option<f32>,
    parent_width_mode: MeasureMode,
    parent_height_mode: MeasureMode,
    generation: u32,
) {
    let child_style = tree.nodes[child].style;

    if let Some(flex_basis) = child_style.flex_basis.maybe() {
        if available_inner_main.is_some() {
            let basis = flex_basis.max(child_style.padding_and_border_for_axis(main_axis));
            tree.nodes[child].layout.computed_flex_basis = FloatValue::defined(basis);
            return;
        }
    }
    if let Some(style_dim) = child_style.main_dimension(main_axis).maybe() {
        let basis = style_dim.max(child_style.padding_and_border_for_axis(main_axis));
        tree.nodes[child].layout.computed_flex_basis = FloatValue::defined(basis);
        return;
    }

    let parent_cross_mode = if main_axis.is_row() { parent_height_mode } else { parent_width_mode };
    let child_align = child_style.align_self.resolve(parent_style.align_items);

    let mut width = child_style.dimension(PhysicalDimension::Width).maybe();
    let mut width_mode = if width.is_some() { MeasureMode::Exactly } else { default_child_mode(PhysicalDimension::Width, main_axis, parent_style.overflow, available_inner_width) };
    if width.is_none() {
        width = match width_mode {
            MeasureMode::AtMost => available_inner_width,
            _ => None,
        };
    }

    let mut height = child_style.dimension(PhysicalDimension::Height).maybe();
    let mut height_mode = if height.is_some() { MeasureMode::Exactly } else { default_child_mode(PhysicalDimension::Height, main_axis, parent_style.overflow, available_inner_height) };
    if height.is_none() {
        height = match height_mode {
            MeasureMode::AtMost => available_inner_height,
            _ => None,
        };
    }

    if child_align == AlignItems::Stretch && parent_cross_mode == MeasureMode::Exactly {
        match axis::dimension(cross_axis) {
            PhysicalDimension::Width => {
                if child_style.dimension(PhysicalDimension::Width).is_undefined() {
                    width = available_inner_width;
                    width_mode = MeasureMode::Exactly;
                }
            }
            PhysicalDimension::Height => {
                if child_style.dimension(PhysicalDimension::Height).is_undefined() {
                    height = available_inner_height;
                    height_mode = MeasureMode::Exactly;
                }
            }
        }
    }

    let width_val = width.unwrap_or(f32::NAN);
    let height_val = height.unwrap_or(f32::NAN);
    super::layout_node_internal(tree, child, width_val, height_val, direction, width_mode, height_mode, false, generation);

    let measured = tree.nodes[child].layout.measured_dimensions;
    let main_measured = get_dim(measured, axis::dimension(main_axis));
    let basis = main_measured.max(child_style.padding_and_border_for_axis(main_axis));
    tree.nodes[child].layout.computed_flex_basis = FloatValue::defined(basis);
}

fn default_child_mode(
    dim: PhysicalDimension,
    main_axis: FlexDirection,
    parent_overflow: Overflow,
    available_inner: Option<f32>,
) -> MeasureMode {
    let is_cross_dim = axis::dimension(main_axis) != dim;
    if is_cross_dim && parent_overflow == Overflow::Scroll {
        MeasureMode::Undefined
    } else if available_inner.is_some() {
        MeasureMode::AtMost
    } else {
        MeasureMode::Undefined
    }
}

#[allow(clippy::too_many_arguments)]
fn resolve_flexible_lengths(
    tree: &mut Taffy,
    line: &mut FlexLine,
    remaining_free_initial: f32,
    main_axis: FlexDirection,
    cross_axis: FlexDirection,
    style: &Style,
    direction: Direction,
    container_cross_mode: MeasureMode,
    available_inner_cross: Option<f32>,
    perform_layout: bool,
    generation: u32,
) -> f32 {
    // Pass 1: detect items whose naive grow/shrink share would be clamped
    // by their own min/max, and remove their contribution from the totals.
    let mut delta_free_space = 0.0f32;
    let mut delta_grow = 0.0f32;
    let mut delta_shrink = 0.0f32;
    for &child in &line.items {
        let child_style = tree.nodes[child].style;
        let basis = tree.nodes[child].layout.computed_flex_basis.unwrap_or(0.0);
        if remaining_free_initial < 0.0 && child_style.flex_shrink > 0.0 && line.total_flex_shrink_scaled != 0.0 {
            let scaled_factor = -child_style.flex_shrink * basis;
            let candidate = basis + (remaining_free_initial / line.total_flex_shrink_scaled) * scaled_factor;
            let bounded = child_style.bound_axis(main_axis, candidate);
            if bounded != candidate {
                delta_free_space -= bounded - basis;
                delta_shrink -= scaled_factor;
            }
        } else if remaining_free_initial > 0.0 && child_style.flex_grow > 0.0 && line.total_flex_grow != 0.0 {
            let candidate = basis + (remaining_free_initial / line.total_flex_grow) * child_style.flex_grow;
            let bounded = child_style.bound_axis(main_axis, candidate);
            if bounded != candidate {
                delta_free_space -= bounded - basis;
                delta_grow -= child_style.flex_grow;
            }
        }
    }

    let total_shrink = line.total_flex_shrink_scaled + delta_shrink;
    let total_grow = line.total_flex_grow + delta_grow;
    let remaining_free = remaining_free_initial + delta_free_space;

    let is_row = main_axis.is_row();
    let parent_cross_mode = container_cross_mode;

    // Pass 2: size the remainder and lay each child out along the main
    // axis (Exactly) with a cross mode derived from stretch rules.
    for &child in &line.items {
        let child_style = tree.nodes[child].style;
        let basis = tree.nodes[child].layout.computed_flex_basis.unwrap_or(0.0);

        let child_main_size = if remaining_free < 0.0 && child_style.flex_shrink > 0.0 && total_shrink != 0.0 {
            let scaled_factor = -child_style.flex_shrink * basis;
            child_style.bound_axis(main_axis, basis + (remaining_free / total_shrink) * scaled_factor)
        } else if remaining_free > 0.0 && child_style.flex_grow > 0.0 && total_grow != 0.0 {
            child_style.bound_axis(main_axis, basis + (remaining_free / total_grow) * child_style.flex_grow)
        } else {
            child_style.bound_axis(main_axis, basis)
        };

        let child_align = child_style.align_self.resolve(style.align_items);
        let cross_dim_defined = child_style.dimension(axis::dimension(cross_axis)).is_defined();
        let requires_stretch_layout = child_align == AlignItems::Stretch && !cross_dim_defined;

        let (cross_value, cross_mode) = if let Some(style_cross) = child_style.dimension(axis::dimension(cross_axis)).maybe() {
            (style_cross, MeasureMode::Exactly)
        } else if requires_stretch_layout && parent_cross_mode == MeasureMode::Exactly {
            (available_inner_cross.unwrap_or(f32::NAN), MeasureMode::Exactly)
        } else if let Some(inner_cross) = available_inner_cross {
            (inner_cross, MeasureMode::AtMost)
        } else {
            (f32::NAN, MeasureMode::Undefined)
        };

        let child_main_with_margin = child_main_size + child_style.margin_for_axis(main_axis);
        let (w, h, wm, hm) = if is_row {
            (child_main_with_margin, cross_value, MeasureMode::Exactly, cross_mode)
        } else {
            (cross_value, child_main_with_margin, cross_mode, MeasureMode::Exactly)
        };

        let inner_perform_layout = perform_layout && !requires_stretch_layout;
        super::layout_node_internal(tree, child, w, h, direction, wm, hm, inner_perform_layout, generation);
    }

    // Free space that flex factors actually absorbed is not available for
    // justify-content: whenever some child could grow (or shrink) into it,
    // it is gone, no matter whether that child ended up re-hitting its own
    // bound. Only a line where nothing could flex leaves free space behind.
    if remaining_free > 0.0 && total_grow != 0.0 {
        0.0
    } else if remaining_free < 0.0 && total_shrink != 0.0 {
        0.0
    } else {
        remaining_free
    }
}

fn layout_absolute_child(
    tree: &mut Taffy,
    parent: Node,
    child: Node,
    parent_style: &Style,
    direction: Direction,
    parent_measured: Size<f32>,
    generation: u32,
) {
    let child_style = tree.nodes[child].style;

    let mut width = resolve_absolute_dim(&child_style, PhysicalDimension::Width, FlexDirection::Row, parent_measured.width, parent_style);
    let mut height = resolve_absolute_dim(&child_style, PhysicalDimension::Height, FlexDirection::Column, parent_measured.height, parent_style);

    if width.is_none() || height.is_none() {
        let width_mode = if width.is_some() { MeasureMode::Exactly } else { MeasureMode::Undefined };
        let height_mode = if height.is_some() { MeasureMode::Exactly } else { MeasureMode::Undefined };
        super::layout_node_internal(
            tree,
            child,
            width.unwrap_or(f32::NAN),
            height.unwrap_or(f32::NAN),
            direction,
            width_mode,
            height_mode,
            false,
            generation,
        );
        let measured = tree.nodes[child].layout.measured_dimensions;
        if width.is_none() {
            width = Some(get_dim(measured, PhysicalDimension::Width));
        }
        if height.is_none() {
            height = Some(get_dim(measured, PhysicalDimension::Height));
        }
    }

    let width = width.unwrap();
    let height = height.unwrap();
    super::layout_node_internal(tree, child, width, height, direction, MeasureMode::Exactly, MeasureMode::Exactly, true, generation);

    position_absolute_axis(tree, child, FlexDirection::Row, parent_style, parent_measured.width, width);
    position_absolute_axis(tree, child, FlexDirection::Column, parent_style, parent_measured.height, height);

    let _ = parent;
}

fn resolve_absolute_dim(
    child_style: &Style,
    dim: PhysicalDimension,
    axis_for_dim: FlexDirection,
    parent_measured: f32,
    parent_style: &Style,
) -> Option<f32> {
    if let Some(style_dim) = child_style.dimension(dim).maybe() {
        return Some(child_style.bound_axis(axis_for_dim, style_dim));
    }
    let leading = child_style.leading_position(axis_for_dim);
    let trailing = child_style.trailing_position(axis_for_dim);
    if let (Some(leading), Some(trailing)) = (leading.maybe(), trailing.maybe()) {
        let available = parent_measured - parent_style.border_for_axis(axis_for_dim) - leading - trailing;
        return Some(child_style.bound_axis(axis_for_dim, available.max(0.0)));
    }
    None
}

fn position_absolute_axis(
    tree: &mut Taffy,
    child: Node,
    axis: FlexDirection,
    parent_style: &Style,
    parent_measured: f32,
    child_measured: f32,
) {
    let child_style = tree.nodes[child].style;
    let leading = child_style.leading_position(axis);
    let trailing = child_style.trailing_position(axis);
    let pos = if let Some(leading) = leading.maybe() {
        leading + parent_style.leading_border(axis) + child_style.leading_margin(axis).unwrap_or(0.0)
    } else if let Some(trailing) = trailing.maybe() {
        parent_measured - child_measured - trailing
    } else {
        parent_style.leading_padding_and_border(axis) + child_style.leading_margin(axis).unwrap_or(0.0)
    };
    set_leading_physical(tree, child, axis, pos);
}

fn fix_up_trailing(tree: &mut Taffy, child: Node, axis: FlexDirection, container_measured: f32) {
    let measured = tree.nodes[child].layout.measured_dimensions;
    let child_measured = get_dim(measured, axis::dimension(axis));
    let leading = get_physical(tree, child, axis::leading_physical(axis));
    let trailing_value = container_measured - child_measured - leading;
    set_physical(tree, child, axis::trailing_physical(axis), trailing_value);
}

fn set_leading_physical(tree: &mut Taffy, node: Node, axis: FlexDirection, value: f32) {
    set_physical(tree, node, axis::leading_physical(axis), value);
}

fn set_physical(tree: &mut Taffy, node: Node, edge: crate::style::Edge, value: f32) {
    let position = &mut tree.nodes[node].layout.position;
    match edge {
        crate::style::Edge::Left => position.left = value,
        crate::style::Edge::Top => position.top = value,
        crate::style::Edge::Right => position.right = value,
        crate::style::Edge::Bottom => position.bottom = value,
        _ => unreachable!("physical edge is always Left/Top/Right/Bottom"),
    }
}

fn get_physical(tree: &Taffy, node: Node, edge: crate::style::Edge) -> f32 {
    let position = &tree.nodes[node].layout.position;
    match edge {
        crate::style::Edge::Left => position.left,
        crate::style::Edge::Top => position.top,
        crate::style::Edge::Right => position.right,
        crate::style::Edge::Bottom => position.bottom,
        _ => unreachable!("physical edge is always Left/Top/Right/Bottom"),
    }
}
