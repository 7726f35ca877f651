use tracing::{debug, info};

use crate::error::Result;
use crate::frame::ClassifiedImage;
use crate::regions::{
    extract_regions, separate_regions, sort_regions, ColorRegionList, RegionIter, RegionList,
    RegionLinkedList,
};
use crate::runs::{connect_components, encode_runs, RunList};

use super::config::BlobConfig;
use super::types::FrameSummary;

/// Owns the run, region and color-bucket arenas and runs the five stages
/// over one classified frame at a time.
///
/// All storage is sized from the config at construction; `process_frame`
/// only clears and refills it.
#[derive(Debug)]
pub struct BlobPipeline {
    config: BlobConfig,
    runs: RunList,
    regions: RegionList,
    colors: ColorRegionList,
}

impl BlobPipeline {
    pub fn new(config: BlobConfig) -> Result<Self> {
        config.validate()?;
        info!(
            max_runs = config.max_runs,
            max_regions = config.max_regions,
            num_colors = config.num_colors,
            min_area = config.min_area,
            sort_passes = %config.sort_passes,
            connectivity = %config.connectivity,
            "Blob pipeline allocated"
        );
        Ok(Self {
            runs: RunList::with_capacity(config.max_runs),
            regions: RegionList::with_capacity(config.max_regions),
            colors: ColorRegionList::new(config.num_colors),
            config,
        })
    }

    /// Encode, connect, extract, partition and sort one frame.
    ///
    /// Arena overflow truncates the frame and is reported in the summary.
    /// A label outside the configured color range is returned as
    /// `InvalidColor`; the frame's buckets are then incomplete.
    pub fn process_frame(&mut self, image: &ClassifiedImage) -> Result<FrameSummary> {
        let run_coverage = encode_runs(image, &mut self.runs);
        connect_components(&mut self.runs, self.config.connectivity);
        let region_coverage = extract_regions(&self.runs, &mut self.regions);

        self.colors.reset();
        let max_area = separate_regions(&mut self.colors, &mut self.regions, self.config.min_area)?;
        let sort_passes = sort_regions(
            &mut self.colors,
            &mut self.regions,
            max_area,
            self.config.sort_passes,
        );

        let summary = FrameSummary {
            runs: self.runs.used(),
            regions: self.regions.used(),
            kept_regions: self.colors.total(),
            max_area,
            sort_passes,
            run_coverage,
            region_coverage,
        };
        debug!(
            runs = summary.runs,
            regions = summary.regions,
            kept = summary.kept_regions,
            max_area,
            truncated = summary.is_truncated(),
            "Frame processed"
        );
        Ok(summary)
    }

    pub fn config(&self) -> &BlobConfig {
        &self.config
    }

    pub fn runs(&self) -> &RunList {
        &self.runs
    }

    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Mutable access for consumers that stamp `Region::visit`.
    pub fn regions_mut(&mut self) -> &mut RegionList {
        &mut self.regions
    }

    pub fn colors(&self) -> &ColorRegionList {
        &self.colors
    }

    /// The sorted bucket for one color class.
    pub fn color_list(&self, color: u8) -> Option<&RegionLinkedList> {
        self.colors.get(color)
    }

    /// Regions of one color, largest first.
    pub fn iter_color(&self, color: u8) -> RegionIter<'_> {
        self.colors.iter_color(color, &self.regions)
    }
}
