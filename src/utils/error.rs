use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Directory request failed: {0}")]
    DirectoryError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Capture failed: {message}")]
    CaptureError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
