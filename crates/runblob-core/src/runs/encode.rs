use tracing::warn;

use crate::arena::Coverage;
use crate::frame::ClassifiedImage;

use super::{Run, RunList};

/// Run-length encode a classified image into `runs`.
///
/// Scans rows top to bottom, left to right, emitting one run per maximal span
/// of identical labels. Every pixel belongs to exactly one run, including the
/// background class. The arena is cleared first; when it fills up, encoding
/// stops and the truncated prefix is kept.
pub fn encode_runs(image: &ClassifiedImage, runs: &mut RunList) -> Coverage {
    runs.clear();

    for (y, row) in image.labels.rows().into_iter().enumerate() {
        let width = row.len();
        let mut x = 0usize;

        while x < width {
            let color = row[x];
            let start = x;
            x += 1;
            while x < width && row[x] == color {
                x += 1;
            }

            let index = runs.used();
            let run = Run::new(index, start as u32, y as u32, (x - start) as u32, color);
            if runs.push(run).is_err() {
                warn!(
                    capacity = runs.capacity(),
                    row = y,
                    "Run arena full, encoding truncated"
                );
                return Coverage::Truncated;
            }
        }
    }

    Coverage::Complete
}
