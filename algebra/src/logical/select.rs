//! This module defines [Select].

use algebra_physical::{condition::Condition, operations::PhysicalOperatorEnum};

use crate::error::Error;

use super::{single_input, LogicalOperator, LogicalOperatorEnum};

/// Keeps the rows of its input that satisfy a [Condition]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    /// Operator producing the filtered rows
    input: Box<LogicalOperatorEnum>,
    /// Condition a row has to satisfy
    condition: Condition,
}

impl Select {
    /// Name of this operator
    pub const NAME: &'static str = "Select";

    /// Create a new [Select].
    pub fn new(input: LogicalOperatorEnum, condition: Condition) -> Self {
        Self {
            input: Box::new(input),
            condition,
        }
    }

    /// Create a new [Select] from a potential input.
    ///
    /// Returns [Error::InvalidOperatorShape] if no input is given.
    pub fn try_new(input: Option<LogicalOperatorEnum>, condition: Condition) -> Result<Self, Error> {
        Ok(Self::new(single_input(Self::NAME, input)?, condition))
    }

    /// Return the condition of this operator.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

impl LogicalOperator for Select {
    fn input(&self) -> Option<&LogicalOperatorEnum> {
        Some(self.input.as_ref())
    }

    fn translate(
        &self,
        input: Option<PhysicalOperatorEnum>,
    ) -> Result<PhysicalOperatorEnum, Error> {
        let input = single_input(Self::NAME, input)?;

        Ok(PhysicalOperatorEnum::select(input, self.condition.clone()))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> String {
        format!("{} {}", Self::NAME, self.condition)
    }
}

#[cfg(test)]
mod test {
    use algebra_physical::{
        condition::{Comparison, Condition},
        management::id::GroupId,
        operations::{PhysicalOperator, PhysicalOperatorEnum},
    };
    use test_log::test;

    use crate::{error::Error, logical::group_scan::GroupScan};

    use super::{LogicalOperator, Select};

    #[test]
    fn translate_wraps_input() {
        let condition = Condition::new(1, Comparison::NotEqual, "x");
        let select = Select::new(GroupScan::new("orders").into(), condition.clone());
        let translated_input = PhysicalOperatorEnum::group_scan(GroupId::new("orders"));

        let physical = select.translate(Some(translated_input.clone())).unwrap();

        match &physical {
            PhysicalOperatorEnum::Select(physical_select) => {
                assert_eq!(physical_select.condition(), &condition);
            }
            other => panic!("unexpected physical operator {other:?}"),
        }
        assert_eq!(physical.input(), Some(&translated_input));
    }

    #[test]
    fn construction_requires_input() {
        assert!(matches!(
            Select::try_new(None, Condition::new(0, Comparison::Equal, 0)),
            Err(Error::InvalidOperatorShape {
                operator: "Select",
                expected: 1,
                found: 0
            })
        ));
    }
}
