use td_core::{SurfaceId, TdError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("dashboard configuration error: {0}")]
    Config(String),

    #[error("surface `{surface}` is not available")]
    MissingResource { surface: SurfaceId },

    #[error(transparent)]
    Core(#[from] TdError),
}

pub type SimResult<T> = Result<T, SimError>;
