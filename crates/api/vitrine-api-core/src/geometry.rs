//! Document-space geometry shared by the engine and hosts.
//!
//! All rects are axis-aligned boxes in document coordinates: y grows downward
//! and `top` is measured from the document origin, not the viewport. The host
//! converts client rects before handing them to the engine.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// True when the point lies inside the box (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Box expansion in CSS order. Positive values grow the box, negative shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform margin on all four sides.
    pub fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Margin on the bottom edge only.
    pub fn bottom_only(v: f32) -> Self {
        Self::new(0.0, 0.0, v, 0.0)
    }

    /// Apply this margin to a box, returning the expanded (or shrunk) box.
    pub fn expand(&self, rect: &Rect) -> Rect {
        Rect {
            left: rect.left - self.left,
            top: rect.top - self.top,
            width: rect.width + self.left + self.right,
            height: rect.height + self.top + self.bottom,
        }
    }
}

/// Fraction of `elem`'s area that lies inside `viewport`, clamped to [0, 1].
///
/// Degenerate (zero-area) elements count as fully visible when their top-left
/// point lies inside the viewport box, else not visible at all.
pub fn visible_fraction(elem: &Rect, viewport: &Rect) -> f32 {
    let elem_area = elem.area();
    if elem_area <= 0.0 {
        return if viewport.contains(elem.left, elem.top) {
            1.0
        } else {
            0.0
        };
    }
    let ix = (elem.right().min(viewport.right()) - elem.left.max(viewport.left)).max(0.0);
    let iy = (elem.bottom().min(viewport.bottom()) - elem.top.max(viewport.top)).max(0.0);
    (ix * iy / elem_area).clamp(0.0, 1.0)
}
