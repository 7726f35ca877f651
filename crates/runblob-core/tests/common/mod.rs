#![allow(dead_code)]

use runblob_core::frame::ClassifiedImage;
use runblob_core::regions::{Region, RegionList};

/// Build a label image from ASCII rows: digits are labels, `.` is label 0.
///
/// ```text
/// "..11.."
/// ".111.."
/// ```
pub fn image_from_rows(rows: &[&str]) -> ClassifiedImage {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut labels = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "ragged test image");
        for ch in row.chars() {
            let label = match ch {
                '.' => 0,
                d => d.to_digit(10).expect("digit or '.'") as u8,
            };
            labels.push(label);
        }
    }
    ClassifiedImage::from_raw(width, height, labels).unwrap()
}

/// Checkerboard of labels 0/1: every pixel is its own run.
pub fn checkerboard(width: usize, height: usize) -> ClassifiedImage {
    let labels = (0..height)
        .flat_map(|y| (0..width).map(move |x| ((x + y) % 2) as u8))
        .collect();
    ClassifiedImage::from_raw(width, height, labels).unwrap()
}

/// Label-1 squares of the given sides on a label-0 background, laid out left
/// to right with a two-pixel gap.
pub fn squares(sides: &[usize]) -> ClassifiedImage {
    let height = sides.iter().copied().max().unwrap_or(0) + 2;
    let width: usize = sides.iter().map(|s| s + 2).sum::<usize>() + 2;
    let mut img = ClassifiedImage::filled(width, height, 0);
    let mut x0 = 2;
    for &side in sides {
        for y in 1..1 + side {
            for x in x0..x0 + side {
                img.labels[[y, x]] = 1;
            }
        }
        x0 += side + 2;
    }
    img
}

/// Collect regions of one chain in order.
pub fn areas<'a>(iter: impl Iterator<Item = &'a Region>) -> Vec<u32> {
    iter.map(|r| r.area).collect()
}

/// Regions of one color, in arena order.
pub fn regions_of_color(regions: &RegionList, color: u8) -> Vec<Region> {
    regions.iter().filter(|r| r.color == color).copied().collect()
}

/// A bare region for list and sort tests.
pub fn make_region(color: u8, area: u32) -> Region {
    Region {
        color,
        x1: 0,
        y1: 0,
        x2: area - 1,
        y2: 0,
        cen_x: (area - 1) as f32 / 2.0,
        cen_y: 0.0,
        area,
        run_start: 0,
        iterator_id: 0,
        next: None,
        tree_next: None,
    }
}

/// Fill a region arena with `(color, area)` pairs in order.
pub fn region_list(entries: &[(u8, u32)]) -> RegionList {
    let mut regions = RegionList::with_capacity(entries.len().max(1));
    for &(color, area) in entries {
        regions.push(make_region(color, area)).unwrap();
    }
    regions
}
