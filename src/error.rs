use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised around the layout core: config and primitive validation,
/// JSON contracts and drawing backends.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
