//! This module defines [PhysicalProject].

use crate::{datavalues::Row, error::Error, management::storage::GroupStorage};

use super::{PhysicalOperator, PhysicalOperatorEnum, RowCursor};

/// Builds output rows from a selection of the input columns
///
/// Columns may be repeated or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalProject {
    /// Operator producing the rows that are projected
    input: Box<PhysicalOperatorEnum>,
    /// Input column for each output column
    columns: Vec<usize>,
}

impl PhysicalProject {
    /// Create a new [PhysicalProject].
    pub fn new(input: PhysicalOperatorEnum, columns: Vec<usize>) -> Self {
        Self {
            input: Box::new(input),
            columns,
        }
    }

    /// Return the input column for each output column.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    fn project_row(columns: &[usize], row: Row) -> Result<Row, Error> {
        columns
            .iter()
            .map(|&column| {
                row.get(column).cloned().ok_or(Error::ColumnOutOfBounds {
                    column,
                    arity: row.len(),
                })
            })
            .collect()
    }
}

impl PhysicalOperator for PhysicalProject {
    fn input(&self) -> Option<&PhysicalOperatorEnum> {
        Some(self.input.as_ref())
    }

    fn cursor<'a>(&'a self, storage: &'a dyn GroupStorage) -> Result<RowCursor<'a>, Error> {
        let rows = self.input.cursor(storage)?;
        let columns = &self.columns;

        Ok(Box::new(rows.map(move |row| {
            row.and_then(|row| Self::project_row(columns, row))
        })))
    }

    fn label(&self) -> String {
        format!("Project {:?}", self.columns)
    }
}
