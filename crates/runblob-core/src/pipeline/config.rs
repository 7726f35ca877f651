use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX_REGIONS, DEFAULT_MAX_RUNS, DEFAULT_MIN_AREA, DEFAULT_NUM_COLORS, MAX_NUM_COLORS,
    MAX_SORT_PASSES,
};
use crate::error::{Result, RunblobError};
use crate::regions::SortPasses;
use crate::runs::Connectivity;

/// Construction-time settings for a `BlobPipeline`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlobConfig {
    /// Capacity of the run arena.
    #[serde(default = "default_max_runs")]
    pub max_runs: usize,
    /// Capacity of the region arena.
    #[serde(default = "default_max_regions")]
    pub max_regions: usize,
    /// Number of color classes; labels must be below this value.
    #[serde(default = "default_num_colors")]
    pub num_colors: usize,
    /// Regions smaller than this (pixels) are dropped by the partitioner.
    #[serde(default = "default_min_area")]
    pub min_area: u32,
    #[serde(default)]
    pub connectivity: Connectivity,
    #[serde(default)]
    pub sort_passes: SortPasses,
}

fn default_max_runs() -> usize {
    DEFAULT_MAX_RUNS
}
fn default_max_regions() -> usize {
    DEFAULT_MAX_REGIONS
}
fn default_num_colors() -> usize {
    DEFAULT_NUM_COLORS
}
fn default_min_area() -> u32 {
    DEFAULT_MIN_AREA
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            max_runs: DEFAULT_MAX_RUNS,
            max_regions: DEFAULT_MAX_REGIONS,
            num_colors: DEFAULT_NUM_COLORS,
            min_area: DEFAULT_MIN_AREA,
            connectivity: Connectivity::default(),
            sort_passes: SortPasses::default(),
        }
    }
}

impl BlobConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_runs == 0 {
            return Err(RunblobError::InvalidConfig(
                "max_runs must be at least 1".into(),
            ));
        }
        if self.max_regions == 0 {
            return Err(RunblobError::InvalidConfig(
                "max_regions must be at least 1".into(),
            ));
        }
        if self.num_colors == 0 || self.num_colors > MAX_NUM_COLORS {
            return Err(RunblobError::InvalidConfig(format!(
                "num_colors must be in 1..={MAX_NUM_COLORS}, got {}",
                self.num_colors
            )));
        }
        if let SortPasses::Bounded(n) = self.sort_passes {
            if n > MAX_SORT_PASSES {
                return Err(RunblobError::InvalidConfig(format!(
                    "sort_passes must be at most {MAX_SORT_PASSES}, got {n}"
                )));
            }
        }
        Ok(())
    }
}
