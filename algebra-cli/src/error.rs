//! This module defines all the errors that can occur while executing algebra-cli.

use thiserror::Error;

/// Error that occur during execution of the CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Error while serializing a result row
    #[error("row serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Error originating from the logical layer
    #[error(transparent)]
    AlgebraError(#[from] algebra::error::Error),
    /// Error originating from the physical layer while rows were produced
    #[error(transparent)]
    PhysicalError(#[from] algebra::algebra_physical::error::Error),
}
