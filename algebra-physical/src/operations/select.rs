//! This module defines [PhysicalSelect].

use crate::{condition::Condition, error::Error, management::storage::GroupStorage};

use super::{PhysicalOperator, PhysicalOperatorEnum, RowCursor};

/// Filters the rows of its input by a [Condition]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalSelect {
    /// Operator producing the rows that are filtered
    input: Box<PhysicalOperatorEnum>,
    /// Condition a row has to satisfy
    condition: Condition,
}

impl PhysicalSelect {
    /// Create a new [PhysicalSelect].
    pub fn new(input: PhysicalOperatorEnum, condition: Condition) -> Self {
        Self {
            input: Box::new(input),
            condition,
        }
    }

    /// Return the condition applied by this operator.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

impl PhysicalOperator for PhysicalSelect {
    fn input(&self) -> Option<&PhysicalOperatorEnum> {
        Some(self.input.as_ref())
    }

    fn cursor<'a>(&'a self, storage: &'a dyn GroupStorage) -> Result<RowCursor<'a>, Error> {
        let rows = self.input.cursor(storage)?;
        let condition = &self.condition;

        Ok(Box::new(rows.filter_map(move |row| match row {
            Ok(row) => match condition.evaluate(&row) {
                Ok(true) => Some(Ok(row)),
                Ok(false) => None,
                Err(error) => Some(Err(error)),
            },
            Err(error) => Some(Err(error)),
        })))
    }

    fn label(&self) -> String {
        format!("Select {}", self.condition)
    }
}
