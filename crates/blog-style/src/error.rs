use style_data::error::DataError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
