//! Plain geometric value types shared across style and layout.

/// Selects one of the two physical dimensions, used to index
/// [`Size`]-shaped style fields without duplicating accessor code per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhysicalDimension {
    Width,
    Height,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn map<R>(self, mut f: impl FnMut(T) -> R) -> Size<R> {
        Size { width: f(self.width), height: f(self.height) }
    }

    pub fn get(&self, dim: PhysicalDimension) -> &T {
        match dim {
            PhysicalDimension::Width => &self.width,
            PhysicalDimension::Height => &self.height,
        }
    }
}

impl Size<f32> {
    pub const ZERO: Size<f32> = Size { width: 0.0, height: 0.0 };
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl Point<f32> {
    pub const ZERO: Point<f32> = Point { x: 0.0, y: 0.0 };
}

/// A concrete, resolved set of the four physical box edges -- the position
/// result written into [`crate::layout::Layout`], distinct from the
/// 9-slot style-authoring [`crate::style::Edges`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl Rect<f32> {
    pub const ZERO: Rect<f32> = Rect { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
