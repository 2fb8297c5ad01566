pub type MorphResult<T> = Result<T, MorphError>;

#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("measurement error: {0}")]
    Measure(String),
}

impl MorphError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }
}
