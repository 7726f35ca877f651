use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{Run, RunList};

/// Which neighbouring runs on the previous row count as connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Column intervals must overlap.
    #[default]
    Four,
    /// Column intervals may also touch diagonally.
    Eight,
}

impl Connectivity {
    /// Columns by which a run's interval is widened on each side when
    /// searching the previous row.
    fn slack(self) -> u32 {
        match self {
            Connectivity::Four => 0,
            Connectivity::Eight => 1,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Four => write!(f, "4-connected"),
            Connectivity::Eight => write!(f, "8-connected"),
        }
    }
}

/// Link runs into connected components.
///
/// Runs phase one (`union_runs`) followed by phase two (`chain_components`).
/// Afterwards every run's `parent` is its component root and every root heads
/// a `next` chain visiting all members in index order.
pub fn connect_components(runs: &mut RunList, connectivity: Connectivity) {
    union_runs(runs, connectivity);
    chain_components(runs);
}

/// Phase one: union same-colored runs on adjacent rows whose columns overlap.
///
/// Roots always end up at the lowest index of their component, so the root is
/// the first run of the component in raster order.
pub fn union_runs(runs: &mut RunList, connectivity: Connectivity) {
    let slice = runs.as_mut_slice();
    let used = slice.len();
    let slack = connectivity.slack();

    let mut prev_start = 0usize;
    let mut cur_start = 0usize;
    while cur_start < used {
        let y = slice[cur_start].y;
        let mut cur_end = cur_start + 1;
        while cur_end < used && slice[cur_end].y == y {
            cur_end += 1;
        }

        // Only the row directly above can hold connected runs.
        if cur_start > 0 && slice[cur_start - 1].y + 1 == y {
            connect_rows(slice, prev_start..cur_start, cur_start..cur_end, slack);
        }

        prev_start = cur_start;
        cur_start = cur_end;
    }
}

/// Union every run of `cur` with the matching runs of `prev`, the row above.
///
/// Both ranges are sorted by column, so a single cursor into `prev` is enough.
fn connect_rows(runs: &mut [Run], prev: Range<usize>, cur: Range<usize>, slack: u32) {
    let mut cursor = prev.start;

    for i in cur {
        let lo = runs[i].x.saturating_sub(slack);
        let hi = runs[i].end() + slack;
        let color = runs[i].color;

        while cursor < prev.end && runs[cursor].end() < lo {
            cursor += 1;
        }

        let mut k = cursor;
        while k < prev.end && runs[k].x <= hi {
            if runs[k].color == color {
                join(runs, i, k);
            }
            k += 1;
        }
    }
}

/// Merge the components of `a` and `b`, keeping the lower root index.
fn join(runs: &mut [Run], a: usize, b: usize) {
    let ra = find_root(runs, a);
    let rb = find_root(runs, b);
    if ra == rb {
        return;
    }
    let (keep, absorb) = if ra < rb { (ra, rb) } else { (rb, ra) };
    runs[absorb].parent = keep;
}

/// Follow parent links to the component root, halving the path on the way.
pub fn find_root(runs: &mut [Run], mut index: usize) -> usize {
    while runs[index].parent != index {
        let grand = runs[runs[index].parent].parent;
        runs[index].parent = grand;
        index = grand;
    }
    index
}

/// Phase two: point every run straight at its root and thread each component
/// into a `next` chain headed by the root.
pub fn chain_components(runs: &mut RunList) {
    let slice = runs.as_mut_slice();

    for i in 0..slice.len() {
        let root = find_root(slice, i);
        slice[i].parent = root;
        slice[i].next = None;
    }

    // Walking backwards and inserting after the root leaves members in
    // ascending index order.
    for i in (0..slice.len()).rev() {
        let root = slice[i].parent;
        if root != i {
            slice[i].next = slice[root].next;
            slice[root].next = Some(i);
        }
    }
}
