/// Default capacity of the run arena.
pub const DEFAULT_MAX_RUNS: usize = 100_000;

/// Default capacity of the region arena.
pub const DEFAULT_MAX_REGIONS: usize = 10_000;

/// Default number of color classes (sizes the per-color bucket array).
pub const DEFAULT_NUM_COLORS: usize = 32;

/// Upper bound on color classes: labels are stored as `u8`.
pub const MAX_NUM_COLORS: usize = 256;

/// Default minimum region area (pixels) to be kept by the partitioner.
pub const DEFAULT_MIN_AREA: u32 = 1;

/// Largest pass count accepted by `SortPasses::Bounded`. 2^32 regions per
/// bucket cannot exist in a `usize`-indexed arena on any supported target.
pub const MAX_SORT_PASSES: u32 = 32;
