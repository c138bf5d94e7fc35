//! Squarified strip partitioning.
//!
//! Siblings arrive sorted by descending size. The largest one is placed in the
//! corner of the current rectangle; if it cannot fill the short side on its own,
//! the following siblings are grouped with it into a strip running along the
//! short side, sized so the largest box comes out as close to square as possible.
//! The strip and the remainder are then partitioned recursively.

use super::container::ContainerStyle;
use super::error::LayoutError;
use super::node::WeightedNode;
use super::placed::PlacedBox;
use super::rect::Rect;

/// Working rectangle kept as edges so neighbouring boxes share exact coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(self.x0, self.y0, self.width(), self.height())
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Bounds {
            x0: r.x,
            y0: r.y,
            x1: r.x + r.w,
            y1: r.y + r.h,
        }
    }
}

/// State shared by one layout pass: decoration settings and the output list.
pub(crate) struct Placement<'c, T> {
    /// `Some` when containers are decorated
    pub style: Option<&'c ContainerStyle>,
    /// Area of the top-level canvas, the reference for the decoration threshold
    pub canvas_area: f64,
    pub out: Vec<PlacedBox<T>>,
}

impl<'c, T: Clone> Placement<'c, T> {
    pub fn new(style: Option<&'c ContainerStyle>, canvas_area: f64) -> Self {
        Self {
            style,
            canvas_area,
            out: Vec::new(),
        }
    }

    /// Partition `bounds` among `sorted` (visible, descending by size).
    ///
    /// Fails when rounding has left no room for nodes that still need a box;
    /// whatever was pushed to `out` is then incomplete and must be discarded.
    pub fn place_sorted<N>(
        &mut self,
        sorted: &[&N],
        bounds: Bounds,
        depth: u16,
    ) -> Result<(), LayoutError>
    where
        N: WeightedNode<Item = T>,
    {
        let Some((&first, rest)) = sorted.split_first() else {
            return Ok(());
        };

        let width = bounds.width();
        let height = bounds.height();
        if !(width > 0.0 && height > 0.0) {
            tracing::debug!(
                "No room for {} nodes: {}x{} rectangle at ({}, {})",
                sorted.len(),
                width,
                height,
                bounds.x0,
                bounds.y0
            );
            return Err(LayoutError::Degenerate {
                nodes: sorted.len(),
                width,
                height,
            });
        }

        if rest.is_empty() {
            return self.place_node(first, bounds.to_rect(), depth);
        }

        let total: f64 = sorted.iter().map(|n| n.size()).sum();
        let percentage = first.size() / total;
        let area = width * height;
        let box_area = area * percentage;
        let small_side = width.min(height);
        let Bounds { x0, y0, x1, y1 } = bounds;

        if small_side * small_side < box_area {
            // The first box spans the whole short side.
            if width > height {
                let box_width = box_area / height;
                self.place_node(first, Rect::new(x0, y0, box_width, height), depth)?;
                let remainder = Bounds { x0: x0 + box_width, y0, x1, y1 };
                return self.place_sorted(rest, remainder, depth);
            }
            let box_height = box_area / width;
            self.place_node(first, Rect::new(x0, y0, width, box_height), depth)?;
            let remainder = Bounds { x0, y0: y0 + box_height, x1, y1 };
            return self.place_sorted(rest, remainder, depth);
        }

        let (count, thickness) = strip_extent(
            sorted.iter().map(|n| n.size()),
            total,
            area,
            small_side,
            box_area.sqrt(),
        );
        debug_assert!(count >= 1 && thickness > 0.0);
        let (strip_rest, remainder) = rest.split_at(count - 1);

        if width > height {
            // Vertical strip on the left; the first box sits at its top.
            let box_height = box_area / thickness;
            self.place_node(first, Rect::new(x0, y0, thickness, box_height), depth)?;
            let below = Bounds { x0, y0: y0 + box_height, x1: x0 + thickness, y1 };
            self.place_sorted(strip_rest, below, depth)?;
            let right = Bounds { x0: x0 + thickness, y0, x1, y1 };
            self.place_sorted(remainder, right, depth)
        } else {
            // Horizontal strip on top; the first box sits at its left.
            let box_width = box_area / thickness;
            self.place_node(first, Rect::new(x0, y0, box_width, thickness), depth)?;
            let beside = Bounds { x0: x0 + box_width, y0, x1, y1: y0 + thickness };
            self.place_sorted(strip_rest, beside, depth)?;
            let under = Bounds { x0, y0: y0 + thickness, x1, y1 };
            self.place_sorted(remainder, under, depth)
        }
    }
}

/// Decide how many leading siblings share the first strip.
///
/// Grows the strip one sibling at a time and tracks how far its thickness is
/// from `ideal_side`, the side of a square with the first box's area. Growth
/// stops at the first sibling that makes the distance larger; the strip keeps
/// everything before it. Returns the member count (including the first
/// sibling) and the strip thickness along the long axis.
pub(crate) fn strip_extent(
    sizes: impl IntoIterator<Item = f64>,
    total_size: f64,
    total_area: f64,
    small_side: f64,
    ideal_side: f64,
) -> (usize, f64) {
    let mut min_distance = f64::MAX;
    let mut included_area = 0.0;
    let mut thickness = 0.0;
    let mut count = 0;

    for size in sizes {
        let next_area = included_area + total_area * size / total_size;
        let next_thickness = next_area / small_side;
        let distance = (next_thickness - ideal_side).abs();
        // The distance is V-shaped in the prefix length, so the first rise is the minimum.
        if min_distance < distance {
            break;
        }
        min_distance = distance;
        included_area = next_area;
        thickness = next_thickness;
        count += 1;
    }

    (count, thickness)
}
