use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::Result;
use crate::frame::ClassifiedImage;

/// Load an image whose 8-bit gray values are color-class labels.
///
/// Color inputs are converted with `to_luma8`, so only files that were
/// written as label maps give meaningful classes.
pub fn load_label_image(path: &Path) -> Result<ClassifiedImage> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    let mut labels = Array2::<u8>::zeros((h as usize, w as usize));

    for (col, row, pixel) in gray.enumerate_pixels() {
        labels[[row as usize, col as usize]] = pixel.0[0];
    }

    Ok(ClassifiedImage::new(labels))
}

/// Save a label map as 8-bit grayscale PNG.
pub fn save_label_image(image: &ClassifiedImage, path: &Path) -> Result<()> {
    let mut img = GrayImage::new(image.width() as u32, image.height() as u32);
    for ((row, col), &label) in image.labels.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([label]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
