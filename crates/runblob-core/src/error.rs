use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunblobError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height} ({len} labels supplied)")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Color class {color} out of range (configured classes: {num_colors})")]
    InvalidColor { color: u8, num_colors: usize },

    #[error("Arena capacity {capacity} exhausted")]
    CapacityExhausted { capacity: usize },
}

pub type Result<T> = std::result::Result<T, RunblobError>;
