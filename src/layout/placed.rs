use compact_str::CompactString;

use super::rect::Rect;

/// One laid-out rectangle, ready for a renderer.
#[derive(Debug, Clone)]
pub struct PlacedBox<T> {
    pub item: T,
    pub label: CompactString,
    pub size: f64,
    pub rect: Rect,
    /// Nesting level of the originating node (top-level nodes = 0)
    pub depth: u16,
    /// Decorated non-leaf; its children sit inside `content_rect()`
    pub is_container: bool,
    /// Height of the label strip below the top border (containers only)
    pub container_header_height: f64,
    /// Border thickness on every edge (containers only)
    pub border_thickness: f64,
}

impl<T> PlacedBox<T> {
    pub fn leaf(item: T, label: CompactString, size: f64, rect: Rect, depth: u16) -> Self {
        Self {
            item,
            label,
            size,
            rect,
            depth,
            is_container: false,
            container_header_height: 0.0,
            border_thickness: 0.0,
        }
    }

    /// The area children were placed into. For leaves this is the whole rect.
    pub fn content_rect(&self) -> Rect {
        if self.is_container {
            self.rect.inset(
                self.container_header_height + self.border_thickness,
                self.border_thickness,
            )
        } else {
            self.rect
        }
    }
}
