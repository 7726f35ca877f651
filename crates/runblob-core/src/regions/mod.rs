pub mod color_list;
pub mod extract;
pub mod moments;
pub mod separate;
pub mod sort;

pub use color_list::{ColorRegionList, RegionIter, RegionLinkedList};
pub use extract::extract_regions;
pub use moments::{range_sum, range_sum_sq};
pub use separate::separate_regions;
pub use sort::{passes_for, sort_region_list_by_area, sort_regions, SortPasses};

use crate::arena::FixedArena;

/// Aggregated summary of one connected component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// Color-class label of the component.
    pub color: u8,
    /// Bounding box, inclusive: (x1, y1) - (x2, y2).
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    /// Mean pixel column.
    pub cen_x: f32,
    /// Mean pixel row.
    pub cen_y: f32,
    /// Occupied area in pixels. Can be less than the bounding box area.
    pub area: u32,
    /// Index of the component's root run in the run arena.
    pub run_start: usize,
    /// Generation stamp of the last traversal that visited this region.
    pub iterator_id: u32,
    /// Next region in the owning color bucket.
    pub next: Option<usize>,
    /// Reserved link for an external spatial index; never set here.
    pub tree_next: Option<usize>,
}

impl Region {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }

    /// Centroid as `(x, y)`.
    pub fn centroid(&self) -> (f32, f32) {
        (self.cen_x, self.cen_y)
    }

    /// Stamp this region for traversal `generation`.
    ///
    /// Returns `true` if the region had not yet been visited by that
    /// generation, so a traversal reaching it through several paths reports
    /// it once.
    pub fn visit(&mut self, generation: u32) -> bool {
        if self.iterator_id == generation {
            return false;
        }
        self.iterator_id = generation;
        true
    }
}

/// Fixed-capacity region arena reused every frame.
pub type RegionList = FixedArena<Region>;
