use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels, origin top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn area(&self) -> f64 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    /// Interiors intersect. Rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrink by `by` on every side, never below zero size.
    pub fn inset(&self, by: f64) -> Rect {
        let w = (self.w - 2.0 * by).max(0.0);
        let h = (self.h - 2.0 * by).max(0.0);
        Rect::new(self.x + by, self.y + by, w, h)
    }

    /// The part below a header band of height `header`.
    pub fn below_header(&self, header: f64) -> Rect {
        let header = header.clamp(0.0, self.h.max(0.0));
        Rect::new(self.x, self.y + header, self.w, self.h - header)
    }

    /// Cut across the longer axis so the first part gets `fraction` of the
    /// extent. The cut coordinate is rounded to a whole pixel and shared by
    /// both halves.
    pub fn split_longer(&self, fraction: f64) -> (Rect, Rect) {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.5
        };
        if self.w >= self.h {
            let cut = (self.x + self.w * fraction)
                .round()
                .clamp(self.x, self.right());
            (
                Rect::new(self.x, self.y, cut - self.x, self.h),
                Rect::new(cut, self.y, self.right() - cut, self.h),
            )
        } else {
            let cut = (self.y + self.h * fraction)
                .round()
                .clamp(self.y, self.bottom());
            (
                Rect::new(self.x, self.y, self.w, cut - self.y),
                Rect::new(self.x, cut, self.w, self.bottom() - cut),
            )
        }
    }
}
