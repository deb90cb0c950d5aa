//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum Error {
    /// An operator was given a number of inputs it does not support
    #[error("Operator `{operator}` expects {expected} input(s) but was given {found}.")]
    InvalidOperatorShape {
        /// Name of the operator
        operator: &'static str,
        /// Number of inputs the operator requires
        expected: usize,
        /// Number of inputs that were provided
        found: usize,
    },
    /// Translation was requested for a plan without a root
    #[error("Cannot translate an empty plan")]
    EmptyPlan,
    /// The plan is deeper than the configured translation limit
    #[error("Plan has depth {depth}, which exceeds the configured limit of {limit}")]
    PlanTooDeep {
        /// Depth of the plan
        depth: usize,
        /// Configured maximal depth
        limit: usize,
    },
    /// Plan description is not well-formed
    #[error("Malformed plan description: {0}")]
    PlanFormat(#[source] serde_json::Error),
    /// Errors on reading a file
    #[error("Failed to read \"{filename}\": {error}.")]
    IOReading {
        /// Contains the wrapped error
        error: std::io::Error,
        /// Filename which caused the error
        filename: String,
    },
    /// CSV deserialization error
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// Error in the physical layer
    #[error(transparent)]
    PhysicalError(#[from] algebra_physical::error::Error),
}
