//! Errors returned by the library.
//!
//! Parameter violations are detected before any enumeration begins.
//! An empty graph or a graph inducing no valid tuple is not an error.

use thiserror::Error;


#[derive(Error, Debug)]
pub enum KernelError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("bad dataset format: {0}")]
    Format(String),
} // end of KernelError


pub type KernelResult<T> = Result<T, KernelError>;
