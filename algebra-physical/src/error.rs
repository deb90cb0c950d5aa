//! Error-handling module for the crate

use thiserror::Error;

use crate::management::id::GroupId;

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The storage layer does not know the requested group
    #[error("Group \"{0}\" is not known to the storage layer")]
    UnknownGroup(GroupId),
    /// An operator referred to a column that is not part of the row
    #[error("Column {column} does not exist in a row with {arity} columns")]
    ColumnOutOfBounds {
        /// Requested column index
        column: usize,
        /// Number of columns of the row
        arity: usize,
    },
}
