use super::{Region, RegionList};

/// Intrusive singly linked list threaded through the region arena by
/// `Region::next`. Insertion is at the front only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionLinkedList {
    first: Option<usize>,
    count: usize,
}

impl RegionLinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<usize> {
        self.first
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn reset(&mut self) {
        self.first = None;
        self.count = 0;
    }

    /// Replace the head, e.g. after sorting. The member count is unchanged.
    pub fn set_first(&mut self, first: Option<usize>) {
        self.first = first;
    }

    pub fn insert_front(&mut self, regions: &mut RegionList, index: usize) {
        regions[index].next = self.first;
        self.first = Some(index);
        self.count += 1;
    }

    pub fn iter<'a>(&self, regions: &'a RegionList) -> RegionIter<'a> {
        RegionIter {
            regions,
            cursor: self.first,
        }
    }
}

/// Walks a region chain from a given head.
pub struct RegionIter<'a> {
    regions: &'a RegionList,
    cursor: Option<usize>,
}

impl<'a> RegionIter<'a> {
    pub fn from_head(regions: &'a RegionList, head: Option<usize>) -> Self {
        Self {
            regions,
            cursor: head,
        }
    }
}

impl<'a> Iterator for RegionIter<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let region = &self.regions[self.cursor?];
        self.cursor = region.next;
        Some(region)
    }
}

/// One region bucket per color class, indexed by label.
#[derive(Clone, Debug)]
pub struct ColorRegionList {
    buckets: Vec<RegionLinkedList>,
}

impl ColorRegionList {
    pub fn new(num_colors: usize) -> Self {
        Self {
            buckets: vec![RegionLinkedList::new(); num_colors],
        }
    }

    pub fn num_colors(&self) -> usize {
        self.buckets.len()
    }

    pub fn reset(&mut self) {
        for bucket in &mut self.buckets {
            bucket.reset();
        }
    }

    pub fn get(&self, color: u8) -> Option<&RegionLinkedList> {
        self.buckets.get(color as usize)
    }

    pub fn get_mut(&mut self, color: u8) -> Option<&mut RegionLinkedList> {
        self.buckets.get_mut(color as usize)
    }

    pub fn buckets(&self) -> &[RegionLinkedList] {
        &self.buckets
    }

    pub fn buckets_mut(&mut self) -> &mut [RegionLinkedList] {
        &mut self.buckets
    }

    /// Regions of one color in list order; empty for an unknown color.
    pub fn iter_color<'a>(&self, color: u8, regions: &'a RegionList) -> RegionIter<'a> {
        let head = self.get(color).and_then(RegionLinkedList::first);
        RegionIter::from_head(regions, head)
    }

    /// Total number of regions across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(RegionLinkedList::len).sum()
    }
}
