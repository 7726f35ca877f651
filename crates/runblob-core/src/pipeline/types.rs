use crate::arena::Coverage;

/// Per-frame counts reported by `BlobPipeline::process_frame`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Runs written by the encoder.
    pub runs: usize,
    /// Regions written by the extractor, before the area filter.
    pub regions: usize,
    /// Regions kept across all color buckets.
    pub kept_regions: usize,
    /// Largest kept area, 0 if none.
    pub max_area: u32,
    /// Merge passes spent per bucket.
    pub sort_passes: u32,
    pub run_coverage: Coverage,
    pub region_coverage: Coverage,
}

impl FrameSummary {
    pub fn is_truncated(&self) -> bool {
        self.run_coverage.is_truncated() || self.region_coverage.is_truncated()
    }
}
