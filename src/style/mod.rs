//! CSS-flexbox-like per-node style attributes.
//!
//! Defaults throughout this module follow the original flexbox engine's
//! defaults rather than the CSS spec's, where the two disagree (most
//! visibly `FlexDirection::Column` and `flex_shrink: 0.0`) -- this is a
//! deliberate, specified choice, not an oversight.

pub mod edges;

pub use edges::{Edge, Edges};

use crate::axis::{self, dimension};
use crate::geometry::{PhysicalDimension, Size};
use crate::value::FloatValue;

/// Writing direction. `Inherit` resolves from the parent at layout time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Inherit,
    LTR,
    RTL,
}

/// Which axis items flow along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl Default for FlexDirection {
    fn default() -> Self {
        FlexDirection::Column
    }
}

impl FlexDirection {
    #[inline]
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    #[inline]
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }

    #[inline]
    pub fn is_reverse(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

impl Default for JustifyContent {
    fn default() -> Self {
        JustifyContent::FlexStart
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignContent {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    SpaceBetween,
    SpaceAround,
}

impl Default for AlignContent {
    fn default() -> Self {
        AlignContent::FlexStart
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl Default for AlignItems {
    fn default() -> Self {
        AlignItems::Stretch
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignSelf {
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl Default for AlignSelf {
    fn default() -> Self {
        AlignSelf::Auto
    }
}

impl AlignSelf {
    /// Resolve `Auto` against the parent's `AlignItems`.
    pub fn resolve(self, parent_align_items: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => parent_align_items,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionType {
    Relative,
    Absolute,
}

impl Default for PositionType {
    fn default() -> Self {
        PositionType::Relative
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexWrap {
    NoWrap,
    Wrap,
}

impl Default for FlexWrap {
    fn default() -> Self {
        FlexWrap::NoWrap
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Visible
    }
}

impl Overflow {
    #[inline]
    pub fn clips(self) -> bool {
        !matches!(self, Overflow::Visible)
    }
}

/// How a dimension's measurement is constrained during a single layout
/// query: left open (`Undefined`), matched exactly (`Exactly`), or bounded
/// from above (`AtMost`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    Undefined,
    Exactly,
    AtMost,
}

/// The full set of per-node style attributes the layout algorithm reads.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub position_type: PositionType,
    pub flex_wrap: FlexWrap,
    pub overflow: Overflow,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: FloatValue,
    pub margin: Edges,
    pub position: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub dimensions: Size<FloatValue>,
    pub min_dimensions: Size<FloatValue>,
    pub max_dimensions: Size<FloatValue>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            flex_direction: FlexDirection::default(),
            justify_content: JustifyContent::default(),
            align_content: AlignContent::default(),
            align_items: AlignItems::default(),
            align_self: AlignSelf::default(),
            position_type: PositionType::default(),
            flex_wrap: FlexWrap::default(),
            overflow: Overflow::default(),
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_basis: FloatValue::UNDEFINED,
            margin: Edges::default(),
            position: Edges::default(),
            padding: Edges::default(),
            border: Edges::default(),
            dimensions: Size::default(),
            min_dimensions: Size::default(),
            max_dimensions: Size::default(),
        }
    }
}

impl Style {
    pub fn dimension(&self, dim: PhysicalDimension) -> FloatValue {
        *self.dimensions.get(dim)
    }

    pub fn min_dimension(&self, dim: PhysicalDimension) -> FloatValue {
        *self.min_dimensions.get(dim)
    }

    pub fn max_dimension(&self, dim: PhysicalDimension) -> FloatValue {
        *self.max_dimensions.get(dim)
    }

    /// Style dimension along `axis` (width for a row axis, height for a
    /// column axis).
    pub fn main_dimension(&self, axis: FlexDirection) -> FloatValue {
        self.dimension(dimension(axis))
    }

    pub fn min_main_dimension(&self, axis: FlexDirection) -> FloatValue {
        self.min_dimension(dimension(axis))
    }

    pub fn max_main_dimension(&self, axis: FlexDirection) -> FloatValue {
        self.max_dimension(dimension(axis))
    }

    pub fn leading_margin(&self, axis: FlexDirection) -> FloatValue {
        axis::leading_edge_value(&self.margin, axis, FloatValue::UNDEFINED)
    }

    pub fn trailing_margin(&self, axis: FlexDirection) -> FloatValue {
        axis::trailing_edge_value(&self.margin, axis, FloatValue::UNDEFINED)
    }

    /// Sum of leading and trailing margin along `axis`. Margin is never
    /// clamped (unlike padding/border) -- a negative margin is honored.
    pub fn margin_for_axis(&self, axis: FlexDirection) -> f32 {
        self.leading_margin(axis).unwrap_or(0.0) + self.trailing_margin(axis).unwrap_or(0.0)
    }

    pub fn leading_padding(&self, axis: FlexDirection) -> f32 {
        axis::leading_edge_value(&self.padding, axis, FloatValue::UNDEFINED).unwrap_or(0.0).max(0.0)
    }

    pub fn trailing_padding(&self, axis: FlexDirection) -> f32 {
        axis::trailing_edge_value(&self.padding, axis, FloatValue::UNDEFINED).unwrap_or(0.0).max(0.0)
    }

    pub fn leading_border(&self, axis: FlexDirection) -> f32 {
        axis::leading_edge_value(&self.border, axis, FloatValue::UNDEFINED).unwrap_or(0.0).max(0.0)
    }

    pub fn trailing_border(&self, axis: FlexDirection) -> f32 {
        axis::trailing_edge_value(&self.border, axis, FloatValue::UNDEFINED).unwrap_or(0.0).max(0.0)
    }

    pub fn leading_padding_and_border(&self, axis: FlexDirection) -> f32 {
        self.leading_padding(axis) + self.leading_border(axis)
    }

    pub fn trailing_padding_and_border(&self, axis: FlexDirection) -> f32 {
        self.trailing_padding(axis) + self.trailing_border(axis)
    }

    pub fn padding_and_border_for_axis(&self, axis: FlexDirection) -> f32 {
        self.leading_padding_and_border(axis) + self.trailing_padding_and_border(axis)
    }

    pub fn border_for_axis(&self, axis: FlexDirection) -> f32 {
        self.leading_border(axis) + self.trailing_border(axis)
    }

    pub fn leading_position(&self, axis: FlexDirection) -> FloatValue {
        axis::leading_edge_value(&self.position, axis, FloatValue::UNDEFINED)
    }

    pub fn trailing_position(&self, axis: FlexDirection) -> FloatValue {
        axis::trailing_edge_value(&self.position, axis, FloatValue::UNDEFINED)
    }

    /// `bound`: clamp to `[min, max]` (each ignored when undefined or
    /// negative) then floor at padding+border for `axis`.
    pub fn bound_axis(&self, axis: FlexDirection, value: f32) -> f32 {
        self.bound_axis_within_min_and_max(axis, value).max(self.padding_and_border_for_axis(axis))
    }

    pub fn bound_axis_within_min_and_max(&self, axis: FlexDirection, value: f32) -> f32 {
        let min = self.min_main_dimension(axis);
        let max = self.max_main_dimension(axis);
        let mut bounded = value;
        if let Some(max) = max.maybe() {
            if max >= 0.0 && bounded > max {
                bounded = max;
            }
        }
        if let Some(min) = min.maybe() {
            if min >= 0.0 && bounded < min {
                bounded = min;
            }
        }
        bounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine_not_css() {
        let style = Style::default();
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.align_content, AlignContent::FlexStart);
        assert_eq!(style.flex_shrink, 0.0);
        assert_eq!(style.flex_grow, 0.0);
        assert!(style.flex_basis.is_undefined());
    }

    #[test]
    fn negative_padding_is_ignored_but_negative_margin_is_not() {
        let mut style = Style::default();
        style.padding.left = FloatValue::defined(-5.0);
        style.margin.left = FloatValue::defined(-5.0);
        assert_eq!(style.leading_padding(FlexDirection::Row), 0.0);
        assert_eq!(style.leading_margin(FlexDirection::Row).value(), -5.0);
    }

    #[test]
    fn bound_axis_floors_at_padding_and_border() {
        let mut style = Style::default();
        style.padding.all = FloatValue::defined(10.0);
        assert_eq!(style.bound_axis(FlexDirection::Row, 4.0), 10.0);
    }

    #[test]
    fn negative_max_dimension_is_ignored() {
        let mut style = Style::default();
        style.max_dimensions.width = FloatValue::defined(-1.0);
        assert_eq!(style.bound_axis_within_min_and_max(FlexDirection::Row, 50.0), 50.0);
    }
}
