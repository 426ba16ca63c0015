/*!
 * Geometric primitives.
 *
 * Points are publicly imported from tiny-skia-path.
 *
 * Rectangles are expressed in figure-relative units (0 to 1 on both directions),
 * with Y low coordinates at the top.
 */

use strict_num::{FiniteF32, PositiveF32};
pub use tiny_skia_path::Point;

/// A size in 2D space reprensented by width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    w: f32,
    h: f32,
}

impl Size {
    /// Build a size from width and height
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }

    /// The width
    pub const fn width(&self) -> f32 {
        self.w
    }

    /// The height
    pub const fn height(&self) -> f32 {
        self.h
    }

    /// Scale width and height by the given factors
    pub const fn scale(&self, sx: f32, sy: f32) -> Size {
        Size {
            w: self.w * sx,
            h: self.h * sy,
        }
    }
}

/// A rectangle in 2D space reprensented by x, y, width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: FiniteF32,
    y: FiniteF32,
    w: PositiveF32,
    h: PositiveF32,
}

impl Rect {
    /// The unit rectangle, covering the whole reference frame
    pub fn unit() -> Self {
        Rect::from_xywh(0.0, 0.0, 1.0, 1.0)
    }

    /// Build a rectangle from x, y, width and height.
    /// Negative sizes are clamped to zero.
    ///
    /// Panics if a value is not finite. See [`Rect::try_from_xywh`].
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect::try_from_xywh(x, y, w, h).expect("Rect values must be finite")
    }

    /// Build a rectangle from x, y, width and height, or None if a value is not finite.
    /// Negative sizes are clamped to zero.
    pub fn try_from_xywh(x: f32, y: f32, w: f32, h: f32) -> Option<Self> {
        if !w.is_finite() || !h.is_finite() {
            return None;
        }
        Some(Rect {
            x: FiniteF32::new(x)?,
            y: FiniteF32::new(y)?,
            w: PositiveF32::new(w.max(0.0))?,
            h: PositiveF32::new(h.max(0.0))?,
        })
    }

    /// Build a rectangle from top, right, bottom and left
    pub fn from_trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Rect::from_xywh(left, top, right - left, bottom - top)
    }

    /// The X coordinate of the left side
    pub const fn x(&self) -> f32 {
        self.x.get()
    }

    /// The Y coordinate of the top side
    pub const fn y(&self) -> f32 {
        self.y.get()
    }

    /// The width of the rectangle
    pub const fn width(&self) -> f32 {
        self.w.get()
    }

    /// The height of the rectangle
    pub const fn height(&self) -> f32 {
        self.h.get()
    }

    /// The size of the rectangle
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The top Y coordinate
    pub const fn top(&self) -> f32 {
        self.y()
    }

    /// The right X coordinate
    pub const fn right(&self) -> f32 {
        self.x() + self.width()
    }

    /// The bottom Y coordinate
    pub const fn bottom(&self) -> f32 {
        self.y() + self.height()
    }

    /// The left X coordinate
    pub const fn left(&self) -> f32 {
        self.x()
    }

    /// The center point of the rectangle
    pub const fn center(&self) -> Point {
        Point {
            x: self.x() + self.width() / 2.0,
            y: self.y() + self.height() / 2.0,
        }
    }

    /// Map a rectangle expressed relatively to this one (0 to 1 on both directions)
    /// into the reference frame of this rectangle.
    pub fn map_rel(&self, rel: &Rect) -> Rect {
        self.try_map_rel(rel).expect("mapped Rect values must be finite")
    }

    /// Same as [`Rect::map_rel`], returning None if the result overflows
    pub fn try_map_rel(&self, rel: &Rect) -> Option<Rect> {
        Rect::try_from_xywh(
            self.x() + rel.x() * self.width(),
            self.y() + rel.y() * self.height(),
            rel.width() * self.width(),
            rel.height() * self.height(),
        )
    }

    /// Translate the rectangle by dx and dy
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::from_xywh(self.x() + dx, self.y() + dy, self.width(), self.height())
    }

    /// Test if the rectangle contains a point
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}
