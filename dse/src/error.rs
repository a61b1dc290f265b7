use dse_dom::FromHexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DseError {
    #[error("invalid colour '{hex}': {source}")]
    InvalidColor {
        hex: String,
        #[source]
        source: FromHexError,
    },
    #[error("option index {index} out of range for {len} options")]
    OptionIndexOutOfRange { index: usize, len: usize },
    #[error("no element matching {0}")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, DseError>;
