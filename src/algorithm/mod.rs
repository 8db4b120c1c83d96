/// Connected-component labeling with cached results
pub mod components;
/// Midpoint ellipse outlines
pub mod ellipse;
/// Frontier flood fill
pub mod flood_fill;
/// Straight line rasterization
pub mod line;
/// Neighbor generators
pub mod neighbors;
