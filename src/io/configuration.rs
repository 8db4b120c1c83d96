//! Command-line defaults and output settings

// Input limits
/// Largest accepted image side, in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible component colors
pub const DEFAULT_SEED: u64 = 42;

/// Paint color used when none is given (`RRGGBB` or `RRGGBBAA`)
pub const DEFAULT_PAINT_COLOR: &str = "000000";

// Output settings
/// Suffix added to painted image filenames
pub const PAINTED_SUFFIX: &str = "_painted";
/// Suffix added to component map filenames
pub const COMPONENTS_SUFFIX: &str = "_components";
/// Color of cells that no component reached
pub const UNLABELED_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Lowest channel value of generated component colors, keeping them off black
pub const COMPONENT_CHANNEL_FLOOR: u8 = 48;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
