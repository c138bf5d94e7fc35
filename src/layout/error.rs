use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("no elements to place: every node has a non-positive size")]
    Empty,
    #[error("canvas must have a positive finite size, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    /// Sizes differ by more than `f64` can resolve, so a sibling's rectangle
    /// rounded away to nothing.
    #[error("no room left for {nodes} nodes: sizes differ too much for a {width}x{height} rectangle")]
    Degenerate { nodes: usize, width: f64, height: f64 },
}
