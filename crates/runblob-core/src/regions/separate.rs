use crate::error::{Result, RunblobError};

use super::{ColorRegionList, RegionList};

/// Bucket regions by color, dropping those smaller than `min_area`.
///
/// Each kept region is pushed onto the front of its color's list, so buckets
/// hold reverse extraction order until sorted. Buckets are expected to be
/// empty on entry. Returns the largest kept area, or 0 if nothing was kept.
///
/// A region whose color has no bucket is a violation of the classifier's
/// contract and is reported as `InvalidColor`; buckets filled before it was
/// reached are left as they are.
pub fn separate_regions(
    colors: &mut ColorRegionList,
    regions: &mut RegionList,
    min_area: u32,
) -> Result<u32> {
    let num_colors = colors.num_colors();
    let mut max_area = 0;

    for index in 0..regions.used() {
        let region = &regions[index];
        if region.area < min_area {
            continue;
        }
        let (color, area) = (region.color, region.area);

        let bucket = colors
            .get_mut(color)
            .ok_or(RunblobError::InvalidColor { color, num_colors })?;
        bucket.insert_front(regions, index);
        max_area = max_area.max(area);
    }

    Ok(max_area)
}
