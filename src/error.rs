use thiserror::Error;

use crate::{ChainError, CheckError, ParsePropertyNameError, ParseVerdictError};

/// Unified error type covering chain construction, node checks, and status
/// code parsing.
#[derive(Debug, Error)]
pub enum ViewCheckError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Verdict(#[from] ParseVerdictError),

    #[error(transparent)]
    PropertyName(#[from] ParsePropertyNameError),
}
