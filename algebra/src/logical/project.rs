//! This module defines [Project].

use algebra_physical::operations::PhysicalOperatorEnum;

use crate::error::Error;

use super::{single_input, LogicalOperator, LogicalOperatorEnum};

/// Builds rows out of a selection of the columns of its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Operator producing the projected rows
    input: Box<LogicalOperatorEnum>,
    /// Input column for each output column
    columns: Vec<usize>,
}

impl Project {
    /// Name of this operator
    pub const NAME: &'static str = "Project";

    /// Create a new [Project].
    pub fn new(input: LogicalOperatorEnum, columns: Vec<usize>) -> Self {
        Self {
            input: Box::new(input),
            columns,
        }
    }

    /// Create a new [Project] from a potential input.
    ///
    /// Returns [Error::InvalidOperatorShape] if no input is given.
    pub fn try_new(input: Option<LogicalOperatorEnum>, columns: Vec<usize>) -> Result<Self, Error> {
        Ok(Self::new(single_input(Self::NAME, input)?, columns))
    }

    /// Return the input column for each output column.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

impl LogicalOperator for Project {
    fn input(&self) -> Option<&LogicalOperatorEnum> {
        Some(self.input.as_ref())
    }

    fn translate(
        &self,
        input: Option<PhysicalOperatorEnum>,
    ) -> Result<PhysicalOperatorEnum, Error> {
        let input = single_input(Self::NAME, input)?;

        Ok(PhysicalOperatorEnum::project(input, self.columns.clone()))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> String {
        format!("{} {:?}", Self::NAME, self.columns)
    }
}
