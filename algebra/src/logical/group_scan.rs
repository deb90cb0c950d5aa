//! This module defines [GroupScan].

use algebra_physical::{management::id::GroupId, operations::PhysicalOperatorEnum};

use crate::error::Error;

use super::{LogicalOperator, LogicalOperatorEnum};

/// Reads all rows of a storage group
///
/// A [GroupScan] is always a leaf of a logical plan.
/// The group is kept as an opaque identifier;
/// whether it exists is only discovered when the physical plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupScan {
    /// Group whose rows are read
    group: GroupId,
}

impl GroupScan {
    /// Name of this operator
    pub const NAME: &'static str = "GroupScan";

    /// Create a new [GroupScan].
    pub fn new(group: impl Into<GroupId>) -> Self {
        Self {
            group: group.into(),
        }
    }

    /// Create a new [GroupScan] from a group and a potential input.
    ///
    /// Returns [Error::InvalidOperatorShape] if an input is given.
    pub fn try_new(
        group: impl Into<GroupId>,
        input: Option<LogicalOperatorEnum>,
    ) -> Result<Self, Error> {
        if input.is_some() {
            return Err(Error::InvalidOperatorShape {
                operator: Self::NAME,
                expected: 0,
                found: 1,
            });
        }

        Ok(Self::new(group))
    }

    /// Return the group read by this operator.
    pub fn group(&self) -> &GroupId {
        &self.group
    }
}

impl LogicalOperator for GroupScan {
    fn input(&self) -> Option<&LogicalOperatorEnum> {
        None
    }

    fn translate(
        &self,
        input: Option<PhysicalOperatorEnum>,
    ) -> Result<PhysicalOperatorEnum, Error> {
        if input.is_some() {
            log::debug!("ignoring translated input passed to leaf {}", self.label());
        }

        Ok(PhysicalOperatorEnum::group_scan(self.group.clone()))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> String {
        format!("{} {}", Self::NAME, self.group)
    }
}
