//! Generation constants and runtime configuration defaults

// Grid size bounds enforced by the generator itself; callers clamp if they want to
/// Smallest grid size that still has a quadrant to synthesize
pub const MIN_GRID_SIZE: usize = 2;
/// Largest accepted grid size
pub const MAX_GRID_SIZE: usize = 1024;

// World-space drawing
/// Distance between neighbouring dots in output coordinates
pub const CELL_SPACING: f64 = 60.0;
/// Radius of every emitted dot
pub const DOT_RADIUS: f64 = 3.0;
/// Colour attached to dots in the pattern record
pub const STROKE_COLOR: &str = "#ffffff";

// Motif curve shape, in cell units
/// Radius of the loop drawn around a dot
pub const MOTIF_BASE_RADIUS: f64 = 0.3;
/// Distance from the dot at which an opening meets its neighbour
pub const MOTIF_REACH: f64 = 0.5;
/// Exponent controlling how narrow each opening lobe is
pub const MOTIF_LOBE_SHARPNESS: i32 = 12;
/// Number of segments sampled around a motif loop
pub const MOTIF_SAMPLES: usize = 48;

// Default values for configurable parameters
/// Grid size used when none is given
pub const DEFAULT_SIZE: usize = 7;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Number of patterns generated per run
pub const DEFAULT_COUNT: usize = 1;

// Output settings
/// Prefix of generated file names
pub const OUTPUT_PREFIX: &str = "kolam";
/// Suffix added to rule-set file names
pub const RULES_SUFFIX: &str = "_rules";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
