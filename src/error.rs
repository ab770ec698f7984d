use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// Date math was requested before any time frame was assigned.
    #[error("no time frame set: unit/date conversion requires a time frame")]
    TimeFrameNotSet,

    #[error("date out of range: {0}")]
    DateOutOfRange(String),
}
