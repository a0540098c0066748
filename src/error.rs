use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinPulseError {
    #[error("Unsupported file format: {0}. Please upload CSV or Excel.")]
    UnsupportedFormat(String),

    #[error("Error parsing file: {0}")]
    DecodeError(String),

    #[cfg(feature = "gemini")]
    #[error("Advisor transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[cfg(feature = "gemini")]
    #[error("Advisor request failed: {0}")]
    AdvisorError(String),
}

pub type Result<T> = std::result::Result<T, FinPulseError>;
