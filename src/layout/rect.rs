/// An axis-aligned rectangle on the canvas. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Both extents strictly positive and every coordinate finite.
    pub fn is_non_degenerate(&self) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
    }

    /// Shrink by `side` on the left, right and bottom edges and by `top` on the top edge.
    pub fn inset(&self, top: f64, side: f64) -> Rect {
        Rect {
            x: self.x + side,
            y: self.y + top,
            w: self.w - 2.0 * side,
            h: self.h - top - side,
        }
    }

    /// Whether `other` lies inside `self`, allowing `eps` of slack on every edge.
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }

    /// Area shared by the interiors of both rectangles (0 when they only touch).
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn inset_reserves_header_on_top_only() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0).inset(15.0, 2.0);
        assert_eq!(r, Rect::new(12.0, 35.0, 96.0, 33.0));
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.overlap_area(&b), 0.0);
        assert_eq!(a.overlap_area(&Rect::new(5.0, 5.0, 10.0, 10.0)), 25.0);
    }

    #[test]
    fn zero_extent_is_degenerate() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 5.0).is_non_degenerate());
        assert!(!Rect::new(0.0, 0.0, 5.0, -1.0).is_non_degenerate());
        assert!(!Rect::new(f64::NAN, 0.0, 5.0, 5.0).is_non_degenerate());
        assert!(Rect::new(0.0, 0.0, 5.0, 5.0).is_non_degenerate());
    }
}
