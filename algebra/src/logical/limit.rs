//! This module defines [Limit].

use algebra_physical::operations::PhysicalOperatorEnum;

use crate::error::Error;

use super::{single_input, LogicalOperator, LogicalOperatorEnum};

/// Skips leading rows of its input and bounds the number of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    /// Operator producing the rows
    input: Box<LogicalOperatorEnum>,
    /// Number of leading rows that are dropped
    offset: usize,
    /// Maximum number of rows after the offset
    limit: Option<usize>,
}

impl Limit {
    /// Name of this operator
    pub const NAME: &'static str = "Limit";

    /// Create a new [Limit].
    pub fn new(input: LogicalOperatorEnum, offset: usize, limit: Option<usize>) -> Self {
        Self {
            input: Box::new(input),
            offset,
            limit,
        }
    }

    /// Create a new [Limit] from a potential input.
    ///
    /// Returns [Error::InvalidOperatorShape] if no input is given.
    pub fn try_new(
        input: Option<LogicalOperatorEnum>,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Self, Error> {
        Ok(Self::new(single_input(Self::NAME, input)?, offset, limit))
    }

    /// Return the number of skipped rows.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the maximum number of rows.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl LogicalOperator for Limit {
    fn input(&self) -> Option<&LogicalOperatorEnum> {
        Some(self.input.as_ref())
    }

    fn translate(
        &self,
        input: Option<PhysicalOperatorEnum>,
    ) -> Result<PhysicalOperatorEnum, Error> {
        let input = single_input(Self::NAME, input)?;

        Ok(PhysicalOperatorEnum::limit(input, self.offset, self.limit))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> String {
        match self.limit {
            Some(limit) => format!("{} offset {} limit {limit}", Self::NAME, self.offset),
            None => format!("{} offset {}", Self::NAME, self.offset),
        }
    }
}
