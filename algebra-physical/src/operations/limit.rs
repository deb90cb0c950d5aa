//! This module defines [PhysicalLimit].

use crate::{error::Error, management::storage::GroupStorage};

use super::{PhysicalOperator, PhysicalOperatorEnum, RowCursor};

/// Skips a number of rows of its input and bounds the number of returned rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalLimit {
    /// Operator producing the rows
    input: Box<PhysicalOperatorEnum>,
    /// Number of leading rows that are dropped
    offset: usize,
    /// Maximum number of rows returned after the offset, if any
    limit: Option<usize>,
}

impl PhysicalLimit {
    /// Create a new [PhysicalLimit].
    pub fn new(input: PhysicalOperatorEnum, offset: usize, limit: Option<usize>) -> Self {
        Self {
            input: Box::new(input),
            offset,
            limit,
        }
    }

    /// Return the number of skipped rows.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the maximum number of returned rows.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl PhysicalOperator for PhysicalLimit {
    fn input(&self) -> Option<&PhysicalOperatorEnum> {
        Some(self.input.as_ref())
    }

    fn cursor<'a>(&'a self, storage: &'a dyn GroupStorage) -> Result<RowCursor<'a>, Error> {
        let rows = self.input.cursor(storage)?;

        // Errors are never skipped, only rows count towards offset and limit
        let mut remaining_offset = self.offset;
        let mut rows = rows.filter(move |row| {
            if row.is_ok() && remaining_offset > 0 {
                remaining_offset -= 1;
                false
            } else {
                true
            }
        });

        let mut remaining_limit = self.limit;
        Ok(Box::new(std::iter::from_fn(move || {
            if remaining_limit == Some(0) {
                return None;
            }

            let row = rows.next()?;
            if let (Ok(_), Some(remaining)) = (&row, remaining_limit.as_mut()) {
                *remaining -= 1;
            }

            Some(row)
        })))
    }

    fn label(&self) -> String {
        match self.limit {
            Some(limit) => format!("Limit offset {} limit {limit}", self.offset),
            None => format!("Limit offset {}", self.offset),
        }
    }
}
