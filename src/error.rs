use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures surfaced by frame validation, config parsing and raster backends.
///
/// Marker geometry itself never fails; degenerate inputs produce degenerate
/// shapes instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
