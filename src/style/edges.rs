//! The 9-slot edge-value set used by margin, padding, border and position,
//! and its fallback-resolution rule.

use crate::value::FloatValue;

/// A single concrete edge, plus the three shorthand slots that can stand in
/// for a group of edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    Start,
    End,
    Horizontal,
    Vertical,
    All,
}

/// Per-edge style values with shorthand fallback, as authored on a [`Style`](crate::style::Style).
///
/// Resolution for a concrete edge `E` ([`Edges::resolve`]): if slot `E` is
/// set, use it; else if `E` is `Top`/`Bottom` and `Vertical` is set, use
/// `Vertical`; else if `E` is `Left`/`Right`/`Start`/`End` and `Horizontal`
/// is set, use `Horizontal`; else if `All` is set, use `All`; else if `E`
/// is `Start`/`End`, return undefined; else return the caller's default.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges {
    pub left: FloatValue,
    pub top: FloatValue,
    pub right: FloatValue,
    pub bottom: FloatValue,
    pub start: FloatValue,
    pub end: FloatValue,
    pub horizontal: FloatValue,
    pub vertical: FloatValue,
    pub all: FloatValue,
}

impl Edges {
    pub fn get(&self, edge: Edge) -> FloatValue {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Start => self.start,
            Edge::End => self.end,
            Edge::Horizontal => self.horizontal,
            Edge::Vertical => self.vertical,
            Edge::All => self.all,
        }
    }

    pub fn set(&mut self, edge: Edge, value: FloatValue) {
        let slot = match edge {
            Edge::Left => &mut self.left,
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Start => &mut self.start,
            Edge::End => &mut self.end,
            Edge::Horizontal => &mut self.horizontal,
            Edge::Vertical => &mut self.vertical,
            Edge::All => &mut self.all,
        };
        *slot = value;
    }

    /// The computed-edge-value resolution chain from the type's doc comment.
    /// `computedEdgeValue` on a shorthand edge (`Horizontal`/`Vertical`/`All`)
    /// is a usage error at the call site -- this function is only ever asked
    /// for a concrete edge or `Start`/`End`.
    pub fn resolve(&self, edge: Edge, default: FloatValue) -> FloatValue {
        debug_assert!(
            !matches!(edge, Edge::Horizontal | Edge::Vertical | Edge::All),
            "computedEdgeValue is only defined for a concrete edge"
        );

        let direct = self.get(edge);
        if direct.is_defined() {
            return direct;
        }
        match edge {
            Edge::Top | Edge::Bottom => {
                if self.vertical.is_defined() {
                    return self.vertical;
                }
            }
            Edge::Left | Edge::Right | Edge::Start | Edge::End => {
                if self.horizontal.is_defined() {
                    return self.horizontal;
                }
            }
            _ => {}
        }
        if self.all.is_defined() {
            return self.all;
        }
        match edge {
            Edge::Start | Edge::End => FloatValue::UNDEFINED,
            _ => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_slot_wins() {
        let mut edges = Edges::default();
        edges.set(Edge::Left, FloatValue::defined(4.0));
        edges.set(Edge::Horizontal, FloatValue::defined(9.0));
        assert_eq!(edges.resolve(Edge::Left, FloatValue::ZERO).value(), 4.0);
    }

    #[test]
    fn horizontal_falls_back_for_start_and_end() {
        let mut edges = Edges::default();
        edges.set(Edge::Horizontal, FloatValue::defined(9.0));
        assert_eq!(edges.resolve(Edge::Start, FloatValue::ZERO).value(), 9.0);
        assert_eq!(edges.resolve(Edge::Right, FloatValue::ZERO).value(), 9.0);
    }

    #[test]
    fn start_and_end_never_fall_back_to_caller_default() {
        let edges = Edges::default();
        assert!(edges.resolve(Edge::Start, FloatValue::defined(5.0)).is_undefined());
        assert!(edges.resolve(Edge::End, FloatValue::defined(5.0)).is_undefined());
    }

    #[test]
    fn physical_edge_falls_back_to_caller_default() {
        let edges = Edges::default();
        assert_eq!(edges.resolve(Edge::Top, FloatValue::defined(5.0)).value(), 5.0);
    }

    #[test]
    fn all_is_weaker_than_vertical_and_horizontal() {
        let mut edges = Edges::default();
        edges.set(Edge::All, FloatValue::defined(1.0));
        edges.set(Edge::Vertical, FloatValue::defined(2.0));
        assert_eq!(edges.resolve(Edge::Top, FloatValue::ZERO).value(), 2.0);
        assert_eq!(edges.resolve(Edge::Left, FloatValue::ZERO).value(), 1.0);
    }
}
