pub mod label_image;

pub use label_image::{load_label_image, save_label_image};
