pub mod connect;
pub mod encode;

pub use connect::{chain_components, connect_components, find_root, union_runs, Connectivity};
pub use encode::encode_runs;

use crate::arena::FixedArena;

/// A maximal horizontal span of one color class on one image row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Column of the first pixel.
    pub x: u32,
    /// Image row.
    pub y: u32,
    /// Number of pixels in the span (always >= 1).
    pub width: u32,
    /// Color-class label shared by every pixel of the span.
    pub color: u8,
    /// Forest link toward the component root. A root is its own parent.
    pub parent: usize,
    /// Next run of the same component, in index order, starting at the root.
    pub next: Option<usize>,
}

impl Run {
    /// A run that is its own root and has no chain successor.
    pub fn new(index: usize, x: u32, y: u32, width: u32, color: u8) -> Self {
        Self {
            x,
            y,
            width,
            color,
            parent: index,
            next: None,
        }
    }

    /// Column of the last pixel (inclusive).
    pub fn end(&self) -> u32 {
        self.x + self.width - 1
    }
}

/// Fixed-capacity run arena reused every frame.
pub type RunList = FixedArena<Run>;

impl RunList {
    /// True if the run at `index` is the root of its component.
    pub fn is_root(&self, index: usize) -> bool {
        self[index].parent == index
    }

    /// Iterate the members of the component whose root is `root`, following
    /// the `next` chain. Only meaningful after `chain_components`.
    pub fn component(&self, root: usize) -> ComponentIter<'_> {
        ComponentIter {
            runs: self,
            cursor: Some(root),
        }
    }
}

pub struct ComponentIter<'a> {
    runs: &'a RunList,
    cursor: Option<usize>,
}

impl<'a> Iterator for ComponentIter<'a> {
    type Item = (usize, &'a Run);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let run = &self.runs[index];
        self.cursor = run.next;
        Some((index, run))
    }
}
