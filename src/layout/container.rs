use super::error::LayoutError;
use super::node::{visible_sorted, WeightedNode};
use super::placed::PlacedBox;
use super::rect::Rect;
use super::strip::{Bounds, Placement};

/// Header and border reserved around the children of a decorated container.
#[derive(Debug, Clone)]
pub struct ContainerStyle {
    /// A container is decorated only when `height² > canvas area * min_area_fraction`
    pub min_area_fraction: f64,
    /// Space reserved above the children, top border included (px)
    pub header_height: f64,
    /// Border on the left, right and bottom edges (px)
    pub border_width: f64,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            min_area_fraction: 0.005,
            header_height: 15.0,
            border_width: 2.0,
        }
    }
}

impl ContainerStyle {
    /// Legibility gate. Only the height is compared against the canvas area, so
    /// wide, short containers can pass while tall, narrow ones of the same area
    /// do not.
    pub fn is_legible(&self, rect: &Rect, canvas_area: f64) -> bool {
        rect.h * rect.h > canvas_area * self.min_area_fraction
    }

    /// Where the children of a decorated container go.
    pub fn content_rect(&self, rect: &Rect) -> Rect {
        rect.inset(self.header_height, self.border_width)
    }
}

impl<T: Clone> Placement<'_, T> {
    /// Emit one node into its allotted rectangle, recursing into its children.
    pub(crate) fn place_node<N>(
        &mut self,
        node: &N,
        rect: Rect,
        depth: u16,
    ) -> Result<(), LayoutError>
    where
        N: WeightedNode<Item = T>,
    {
        if node.is_leaf() {
            self.out.push(PlacedBox::leaf(
                node.item().clone(),
                node.label().into(),
                node.size(),
                rect,
                depth,
            ));
            return Ok(());
        }

        let children = visible_sorted(node.children());
        if children.is_empty() {
            tracing::trace!("'{}' has no visible children, nothing placed", node.label());
            return Ok(());
        }
        let child_depth = depth.saturating_add(1);

        if let Some(style) = self.style {
            let inner = style.content_rect(&rect);
            if style.is_legible(&rect, self.canvas_area) && inner.is_non_degenerate() {
                self.out.push(PlacedBox {
                    item: node.item().clone(),
                    label: node.label().into(),
                    size: node.size(),
                    rect,
                    depth,
                    is_container: true,
                    container_header_height: style.header_height - style.border_width,
                    border_thickness: style.border_width,
                });
                return self.place_sorted(&children, Bounds::from(inner), child_depth);
            }
        }

        self.place_sorted(&children, Bounds::from(rect), child_depth)
    }
}
