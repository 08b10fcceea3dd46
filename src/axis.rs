//! Pure functions mapping (flex-direction, writing direction) onto main and
//! cross axes, leading/trailing edges, and the corresponding dimension index.
//!
//! Nothing here touches a node or does layout; it is the "axis resolver"
//! leaf component the rest of the engine builds on.

use crate::geometry::PhysicalDimension;
use crate::style::edges::{Edge, Edges};
use crate::style::{Direction, FlexDirection};
use crate::value::FloatValue;

/// `resolveDirection`: inherited direction becomes the parent's resolved
/// direction, defaulting to LTR at the root or when the parent is itself
/// still `Inherit`.
pub fn resolve_direction(node_direction: Direction, parent_direction: Option<Direction>) -> Direction {
    match node_direction {
        Direction::Inherit => match parent_direction {
            Some(Direction::LTR) => Direction::LTR,
            Some(Direction::RTL) => Direction::RTL,
            _ => Direction::LTR,
        },
        other => other,
    }
}

/// `resolveAxis`: swap Row/RowReverse under RTL; Column axes are untouched
/// (wrap-reverse and vertical writing modes are out of scope).
pub fn resolve_axis(flex_direction: FlexDirection, direction: Direction) -> FlexDirection {
    if direction == Direction::RTL {
        match flex_direction {
            FlexDirection::Row => FlexDirection::RowReverse,
            FlexDirection::RowReverse => FlexDirection::Row,
            other => other,
        }
    } else {
        flex_direction
    }
}

/// `crossAxis`: Column when main is a row; otherwise a (direction-resolved)
/// row.
pub fn cross_axis(main_axis: FlexDirection, direction: Direction) -> FlexDirection {
    if main_axis.is_row() {
        FlexDirection::Column
    } else {
        resolve_axis(FlexDirection::Row, direction)
    }
}

/// Cross-axis trailing position is needed when the cross axis itself runs
/// in a reverse direction (Row/Column-Reverse) -- not merely "whenever the
/// main axis happens to be RowReverse", which is what a literal port of the
/// historical C boolean would compute.
pub fn needs_cross_trailing_pos(cross_axis: FlexDirection) -> bool {
    matches!(cross_axis, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
}

fn leading_physical_edge(axis: FlexDirection) -> Edge {
    match axis {
        FlexDirection::Column => Edge::Top,
        FlexDirection::ColumnReverse => Edge::Bottom,
        FlexDirection::Row => Edge::Left,
        FlexDirection::RowReverse => Edge::Right,
    }
}

fn trailing_physical_edge(axis: FlexDirection) -> Edge {
    match axis {
        FlexDirection::Column => Edge::Bottom,
        FlexDirection::ColumnReverse => Edge::Top,
        FlexDirection::Row => Edge::Right,
        FlexDirection::RowReverse => Edge::Left,
    }
}

/// The physical edge updated for the leading side of `axis`, used by
/// trailing-position fix-up (§4.4 step L) which writes a single physical
/// edge directly rather than going through the Start/End override.
pub fn leading_physical(axis: FlexDirection) -> Edge {
    leading_physical_edge(axis)
}

/// The physical edge updated for the trailing side of `axis`.
pub fn trailing_physical(axis: FlexDirection) -> Edge {
    trailing_physical_edge(axis)
}

/// Which `Size` slot (width or height) this axis measures.
pub fn dimension(axis: FlexDirection) -> PhysicalDimension {
    if axis.is_row() {
        PhysicalDimension::Width
    } else {
        PhysicalDimension::Height
    }
}

/// Edge-aware leading-edge accessor: on a row axis, `Start` overrides
/// `Left`/`Right` when set.
pub fn leading_edge_value(edges: &Edges, axis: FlexDirection, default: FloatValue) -> FloatValue {
    if axis.is_row() && edges.start.is_defined() {
        return edges.start;
    }
    edges.resolve(leading_physical_edge(axis), default)
}

/// Edge-aware trailing-edge accessor: on a row axis, `End` overrides
/// `Left`/`Right` when set.
pub fn trailing_edge_value(edges: &Edges, axis: FlexDirection, default: FloatValue) -> FloatValue {
    if axis.is_row() && edges.end.is_defined() {
        return edges.end;
    }
    edges.resolve(trailing_physical_edge(axis), default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_direction_inherits_from_parent() {
        assert_eq!(resolve_direction(Direction::Inherit, Some(Direction::RTL)), Direction::RTL);
        assert_eq!(resolve_direction(Direction::Inherit, None), Direction::LTR);
        assert_eq!(resolve_direction(Direction::LTR, Some(Direction::RTL)), Direction::LTR);
    }

    #[test]
    fn resolve_axis_flips_row_under_rtl() {
        assert_eq!(resolve_axis(FlexDirection::Row, Direction::RTL), FlexDirection::RowReverse);
        assert_eq!(resolve_axis(FlexDirection::RowReverse, Direction::RTL), FlexDirection::Row);
        assert_eq!(resolve_axis(FlexDirection::Column, Direction::RTL), FlexDirection::Column);
    }

    #[test]
    fn cross_axis_of_row_is_column() {
        assert_eq!(cross_axis(FlexDirection::Row, Direction::LTR), FlexDirection::Column);
        assert_eq!(cross_axis(FlexDirection::Column, Direction::RTL), FlexDirection::RowReverse);
    }

    #[test]
    fn start_overrides_left_on_row_axis_regardless_of_reverse() {
        let mut edges = Edges::default();
        edges.set(Edge::Start, FloatValue::defined(3.0));
        edges.set(Edge::Left, FloatValue::defined(99.0));
        assert_eq!(leading_edge_value(&edges, FlexDirection::Row, FloatValue::ZERO).value(), 3.0);
        assert_eq!(leading_edge_value(&edges, FlexDirection::RowReverse, FloatValue::ZERO).value(), 3.0);
    }
}
