//! Childless-node measurement: §4.4 steps A (measure callback) and B
//! (childless, no callback). A node reaches here only once
//! `layout_node_impl` has confirmed it has no children.

use crate::geometry::Size;
use crate::style::{FlexDirection, MeasureMode, Style};
use crate::tree::Taffy;
use crate::value::is_defined;
use crate::node::Node;

pub(crate) fn measure(
    tree: &mut Taffy,
    node: Node,
    style: &Style,
    available_width: f32,
    available_height: f32,
    width_mode: MeasureMode,
    height_mode: MeasureMode,
) -> Size<f32> {
    let margin_row = style.margin_for_axis(FlexDirection::Row);
    let margin_column = style.margin_for_axis(FlexDirection::Column);

    if tree.nodes[node].measure.is_none() {
        // Step B: childless, no measure callback -- intrinsic size is just
        // padding and border, unless both axes are pinned exactly.
        let width = if matches!(width_mode, MeasureMode::Undefined | MeasureMode::AtMost) {
            style.bound_axis(FlexDirection::Row, style.padding_and_border_for_axis(FlexDirection::Row))
        } else {
            style.bound_axis(FlexDirection::Row, available_width - margin_row)
        };
        let height = if matches!(height_mode, MeasureMode::Undefined | MeasureMode::AtMost) {
            style.bound_axis(FlexDirection::Column, style.padding_and_border_for_axis(FlexDirection::Column))
        } else {
            style.bound_axis(FlexDirection::Column, available_height - margin_column)
        };
        return Size { width, height };
    }

    // Step A: a measure callback is set.
    if width_mode == MeasureMode::Exactly && height_mode == MeasureMode::Exactly {
        return Size {
            width: style.bound_axis(FlexDirection::Row, available_width - margin_row),
            height: style.bound_axis(FlexDirection::Column, available_height - margin_column),
        };
    }

    let inner_width = available_width - margin_row - style.padding_and_border_for_axis(FlexDirection::Row);
    let inner_height = available_height - margin_column - style.padding_and_border_for_axis(FlexDirection::Column);
    let width_collapsed = is_defined(inner_width) && inner_width <= 0.0;
    let height_collapsed = is_defined(inner_height) && inner_height <= 0.0;
    if width_collapsed || height_collapsed {
        return Size {
            width: style.bound_axis(FlexDirection::Row, 0.0),
            height: style.bound_axis(FlexDirection::Column, 0.0),
        };
    }

    let known = Size {
        width: if width_mode != MeasureMode::Undefined { Some(inner_width) } else { None },
        height: if height_mode != MeasureMode::Undefined { Some(inner_height) } else { None },
    };
    let modes = Size { width: width_mode, height: height_mode };

    // The callback is a boxed `FnMut`; take it out to call it without
    // holding a conflicting borrow of the node's own storage.
    let mut measure = tree.nodes[node].measure.take().expect("checked above");
    let measured = measure(known, modes);
    tree.nodes[node].measure = Some(measure);

    let width = if matches!(width_mode, MeasureMode::Undefined | MeasureMode::AtMost) {
        style.bound_axis(FlexDirection::Row, measured.width + style.padding_and_border_for_axis(FlexDirection::Row))
    } else {
        style.bound_axis(FlexDirection::Row, available_width - margin_row)
    };
    let height = if matches!(height_mode, MeasureMode::Undefined | MeasureMode::AtMost) {
        style.bound_axis(FlexDirection::Column, measured.height + style.padding_and_border_for_axis(FlexDirection::Column))
    } else {
        style.bound_axis(FlexDirection::Column, available_height - margin_column)
    };
    Size { width, height }
}
