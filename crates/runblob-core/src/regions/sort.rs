use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ColorRegionList, RegionList};

/// How many merge passes the region sorter may spend per bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortPasses {
    /// Enough passes to fully sort the largest bucket of the frame.
    #[default]
    Full,
    /// A fixed pass budget; blocks of `2^n` regions are sorted, the
    /// order between blocks is not.
    Bounded(u32),
}

impl fmt::Display for SortPasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortPasses::Full => write!(f, "Full"),
            SortPasses::Bounded(n) => write!(f, "Bounded ({n} passes)"),
        }
    }
}

/// Passes needed to fully sort `count` elements: `ceil(log2(count))`.
pub fn passes_for(count: usize) -> u32 {
    if count <= 1 {
        0
    } else {
        usize::BITS - (count - 1).leading_zeros()
    }
}

/// Merge sort the chain starting at `head` into non-increasing area order,
/// stopping after `passes` passes. Returns the new head.
///
/// Pass `p` merges neighbouring sorted blocks of `2^(p-1)` regions, so after
/// `p` passes every block of `2^p` regions from the head is sorted. Equal
/// areas keep their relative order. Sorting stops early once a pass performs
/// a single merge, since the whole list is then in order.
pub fn sort_region_list_by_area(
    regions: &mut RegionList,
    head: Option<usize>,
    passes: u32,
) -> Option<usize> {
    let mut list = head;
    let mut block = 1usize;

    for _ in 0..passes {
        let mut p = list;
        let mut tail: Option<usize> = None;
        let mut merges = 0;
        list = None;

        while let Some(left) = p {
            merges += 1;

            // Split off a left block of up to `block` regions.
            let mut q = Some(left);
            let mut left_len = 0;
            while left_len < block {
                match q {
                    Some(i) => {
                        left_len += 1;
                        q = regions[i].next;
                    }
                    None => break,
                }
            }
            let mut right_len = block;
            let mut p_cursor = Some(left);

            while left_len > 0 || (right_len > 0 && q.is_some()) {
                let take_left = match (left_len, q) {
                    (0, _) => false,
                    (_, None) => true,
                    _ if right_len == 0 => true,
                    (_, Some(r)) => {
                        // `p_cursor` is always Some while left_len > 0.
                        p_cursor.is_some_and(|l| regions[l].area >= regions[r].area)
                    }
                };

                let element = if take_left {
                    let Some(l) = p_cursor else { break };
                    p_cursor = regions[l].next;
                    left_len -= 1;
                    l
                } else {
                    let Some(r) = q else { break };
                    q = regions[r].next;
                    right_len -= 1;
                    r
                };

                match tail {
                    Some(t) => regions[t].next = Some(element),
                    None => list = Some(element),
                }
                tail = Some(element);
            }

            p = q;
        }

        if let Some(t) = tail {
            regions[t].next = None;
        }
        if merges <= 1 {
            break;
        }
        block *= 2;
    }

    list
}

/// Sort every color bucket by descending area.
///
/// `max_area` is the value returned by the partitioner; 0 means no region
/// survived and there is nothing to do. With `SortPasses::Full` the pass
/// count is derived once from the largest bucket and shared by all buckets.
/// Returns the pass count applied.
pub fn sort_regions(
    colors: &mut ColorRegionList,
    regions: &mut RegionList,
    max_area: u32,
    policy: SortPasses,
) -> u32 {
    if max_area == 0 {
        return 0;
    }

    let passes = match policy {
        SortPasses::Full => {
            let largest = colors.buckets().iter().map(|b| b.len()).max().unwrap_or(0);
            passes_for(largest)
        }
        SortPasses::Bounded(n) => n,
    };
    debug!(passes, max_area, "Sorting region buckets");

    for bucket in colors.buckets_mut() {
        if bucket.len() < 2 {
            continue;
        }
        let head = sort_region_list_by_area(regions, bucket.first(), passes);
        bucket.set_first(head);
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::passes_for;

    #[test]
    fn test_passes_for_powers_of_two() {
        assert_eq!(passes_for(0), 0);
        assert_eq!(passes_for(1), 0);
        assert_eq!(passes_for(2), 1);
        assert_eq!(passes_for(3), 2);
        assert_eq!(passes_for(4), 2);
        assert_eq!(passes_for(5), 3);
        assert_eq!(passes_for(1024), 10);
        assert_eq!(passes_for(1025), 11);
    }
}
