use thiserror::Error;

pub type TrendsResult<T> = Result<T, TrendsError>;

#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("missing ALPHAVANTAGE_API_KEY in environment (.env)")]
    MissingApiKey,

    #[cfg(feature = "live-data")]
    #[error("quote api transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote api error: {0}")]
    Api(String),
}
