use ndarray::{Array2, ArrayView1};

use crate::error::{Result, RunblobError};

/// A classified image: one color-class label per pixel.
/// Row-major, shape = (height, width).
#[derive(Clone, Debug)]
pub struct ClassifiedImage {
    pub labels: Array2<u8>,
}

impl ClassifiedImage {
    pub fn new(labels: Array2<u8>) -> Self {
        Self { labels }
    }

    /// Build from a flat row-major label buffer.
    pub fn from_raw(width: usize, height: usize, labels: Vec<u8>) -> Result<Self> {
        let len = labels.len();
        if width.checked_mul(height) != Some(len) {
            return Err(RunblobError::InvalidDimensions { width, height, len });
        }
        let labels = Array2::from_shape_vec((height, width), labels).map_err(|_| {
            RunblobError::InvalidDimensions { width, height, len }
        })?;
        Ok(Self { labels })
    }

    /// An image with every pixel set to `label`.
    pub fn filled(width: usize, height: usize, label: u8) -> Self {
        Self {
            labels: Array2::from_elem((height, width), label),
        }
    }

    pub fn width(&self) -> usize {
        self.labels.ncols()
    }

    pub fn height(&self) -> usize {
        self.labels.nrows()
    }

    pub fn row(&self, y: usize) -> ArrayView1<'_, u8> {
        self.labels.row(y)
    }

    /// Pixel count per label value, indexed by label.
    pub fn histogram(&self) -> [usize; 256] {
        let mut hist = [0usize; 256];
        for &label in self.labels.iter() {
            hist[label as usize] += 1;
        }
        hist
    }
}
