use tracing::warn;

use crate::arena::Coverage;
use crate::runs::RunList;

use super::moments::range_sum;
use super::{Region, RegionList};

/// Summarise every component of a connected run list into `regions`.
///
/// One region is written per root run, in root index order. The arena is
/// cleared first; components beyond its capacity are dropped.
pub fn extract_regions(runs: &RunList, regions: &mut RegionList) -> Coverage {
    regions.clear();

    for root in 0..runs.used() {
        if !runs.is_root(root) {
            continue;
        }

        let region = summarise_component(runs, root);
        if regions.push(region).is_err() {
            warn!(
                capacity = regions.capacity(),
                root_run = root,
                "Region arena full, extraction truncated"
            );
            return Coverage::Truncated;
        }
    }

    Coverage::Complete
}

fn summarise_component(runs: &RunList, root: usize) -> Region {
    let head = &runs[root];
    let mut x1 = head.x;
    let mut y1 = head.y;
    let mut x2 = head.end();
    let mut y2 = head.y;
    let mut area: i64 = 0;
    let mut sum_x: i64 = 0;
    let mut sum_y: i64 = 0;

    for (_, run) in runs.component(root) {
        let width = run.width as i64;
        area += width;
        sum_x += range_sum(run.x as i64, width);
        sum_y += run.y as i64 * width;

        x1 = x1.min(run.x);
        y1 = y1.min(run.y);
        x2 = x2.max(run.end());
        y2 = y2.max(run.y);
    }

    Region {
        color: head.color,
        x1,
        y1,
        x2,
        y2,
        cen_x: (sum_x as f64 / area as f64) as f32,
        cen_y: (sum_y as f64 / area as f64) as f32,
        area: area as u32,
        run_start: root,
        iterator_id: 0,
        next: None,
        tree_next: None,
    }
}
