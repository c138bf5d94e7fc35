//! Squarified treemap layout.
//!
//! [`place`] turns a weighted hierarchy into non-overlapping boxes covering a
//! canvas, each with an area proportional to its weight. Non-leaf nodes are
//! either laid out transparently (their children tile their rectangle) or, with
//! [`PlacerConfig::render_containers`], drawn as a box with a header and border
//! around their children.

pub mod container;
pub mod error;
pub mod node;
pub mod placed;
pub mod placer;
pub mod rect;
mod strip;

pub use container::ContainerStyle;
pub use error::LayoutError;
pub use node::{TreeMapNode, WeightedNode};
pub use placed::PlacedBox;
pub use placer::{place, place_in, PlacerConfig, TreeMapPlacer};
pub use rect::Rect;
