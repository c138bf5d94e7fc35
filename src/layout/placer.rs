use super::container::ContainerStyle;
use super::error::LayoutError;
use super::node::{visible_sorted, WeightedNode};
use super::placed::PlacedBox;
use super::rect::Rect;
use super::strip::{Bounds, Placement};

/// Configuration for one layout pass.
#[derive(Debug, Clone, Default)]
pub struct PlacerConfig {
    /// Draw non-leaf nodes as boxes with a header and border around their children
    pub render_containers: bool,
    pub container: ContainerStyle,
}

/// Lay out `nodes` on a `width` x `height` canvas anchored at the origin.
///
/// Boxes come back in depth-first order: a node's box (if any) precedes the
/// boxes of its descendants, which precede the node's later siblings.
pub fn place<N: WeightedNode>(
    nodes: &[N],
    width: f64,
    height: f64,
    config: &PlacerConfig,
) -> Result<Vec<PlacedBox<N::Item>>, LayoutError> {
    place_in(nodes, Rect::new(0.0, 0.0, width, height), config)
}

/// Lay out `nodes` inside an arbitrary canvas rectangle.
///
/// Either every visible node gets a box or an error is returned; no partial
/// layout is ever handed back.
pub fn place_in<N: WeightedNode>(
    nodes: &[N],
    canvas: Rect,
    config: &PlacerConfig,
) -> Result<Vec<PlacedBox<N::Item>>, LayoutError> {
    if !canvas.is_non_degenerate() {
        return Err(LayoutError::InvalidCanvas {
            width: canvas.w,
            height: canvas.h,
        });
    }

    let sorted = visible_sorted(nodes);
    if sorted.is_empty() {
        return Err(LayoutError::Empty);
    }

    tracing::debug!(
        "Placing {} of {} top-level nodes in {:.0}x{:.0} (containers={})",
        sorted.len(),
        nodes.len(),
        canvas.w,
        canvas.h,
        config.render_containers
    );

    let style = config.render_containers.then_some(&config.container);
    let mut placement = Placement::new(style, canvas.area());
    placement.place_sorted(&sorted, Bounds::from(canvas), 0)?;

    tracing::debug!("Placed {} boxes", placement.out.len());
    Ok(placement.out)
}

/// Holds a configuration so repeated layouts (e.g. on resize) share it.
#[derive(Debug, Clone, Default)]
pub struct TreeMapPlacer {
    config: PlacerConfig,
}

impl TreeMapPlacer {
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    pub fn set_render_containers(&mut self, enabled: bool) {
        self.config.render_containers = enabled;
    }

    pub fn place<N: WeightedNode>(
        &self,
        nodes: &[N],
        width: f64,
        height: f64,
    ) -> Result<Vec<PlacedBox<N::Item>>, LayoutError> {
        place(nodes, width, height, &self.config)
    }
}
