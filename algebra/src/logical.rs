//! This module defines the logical operators
//! and [LogicalOperatorEnum], the closed set of all of them.
//!
//! Every logical operator knows which physical operator realizes it.
//! The mapping is fixed at compile time by [LogicalOperator::translate].

pub mod group_scan;
pub mod limit;
pub mod project;
pub mod select;

use std::fmt::{Debug, Display};

use algebra_physical::operations::PhysicalOperatorEnum;
use delegate::delegate;

use crate::error::Error;

use self::{group_scan::GroupScan, limit::Limit, project::Project, select::Select};

/// Common interface of all logical operators
pub trait LogicalOperator: Debug {
    /// Return the input of this operator, if there is one.
    fn input(&self) -> Option<&LogicalOperatorEnum>;

    /// Produce the physical counterpart of this operator.
    ///
    /// `input` is the already translated input of this operator,
    /// or `None` if the operator is a leaf.
    /// Calling this twice with equal inputs produces equal physical operators.
    fn translate(&self, input: Option<PhysicalOperatorEnum>)
        -> Result<PhysicalOperatorEnum, Error>;

    /// Return the name of this kind of operator.
    fn name(&self) -> &'static str;

    /// Return a short human readable description of this operator,
    /// excluding its input.
    fn label(&self) -> String;
}

/// Logical operator of any kind
#[allow(variant_size_differences)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalOperatorEnum {
    /// Read all rows of a group
    GroupScan(GroupScan),
    /// Keep only the rows satisfying a condition
    Select(Select),
    /// Reorder or remove columns
    Project(Project),
    /// Skip and bound the number of rows
    Limit(Limit),
}

impl LogicalOperator for LogicalOperatorEnum {
    delegate! {
        to match self {
            Self::GroupScan(operator) => operator,
            Self::Select(operator) => operator,
            Self::Project(operator) => operator,
            Self::Limit(operator) => operator,
        } {
            fn input(&self) -> Option<&LogicalOperatorEnum>;
            fn translate(&self, input: Option<PhysicalOperatorEnum>) -> Result<PhysicalOperatorEnum, Error>;
            fn name(&self) -> &'static str;
            fn label(&self) -> String;
        }
    }
}

impl LogicalOperatorEnum {
    /// Return the number of operators on the path from this node to its leaf.
    pub fn depth(&self) -> usize {
        1 + self.input().map_or(0, LogicalOperatorEnum::depth)
    }

    /// Return an ascii tree representation of this operator and its inputs.
    pub fn ascii_tree(&self) -> ascii_tree::Tree {
        match self.input() {
            Some(input) => ascii_tree::Tree::Node(self.label(), vec![input.ascii_tree()]),
            None => ascii_tree::Tree::Leaf(vec![self.label()]),
        }
    }
}

impl Display for LogicalOperatorEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ascii_tree::write_tree(f, &self.ascii_tree())
    }
}

impl From<GroupScan> for LogicalOperatorEnum {
    fn from(value: GroupScan) -> Self {
        Self::GroupScan(value)
    }
}

impl From<Select> for LogicalOperatorEnum {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Project> for LogicalOperatorEnum {
    fn from(value: Project) -> Self {
        Self::Project(value)
    }
}

impl From<Limit> for LogicalOperatorEnum {
    fn from(value: Limit) -> Self {
        Self::Limit(value)
    }
}

/// Unwrap the single input of a unary operator.
///
/// Returns [Error::InvalidOperatorShape] if the input is missing.
pub(crate) fn single_input<Input>(
    operator: &'static str,
    input: Option<Input>,
) -> Result<Input, Error> {
    input.ok_or(Error::InvalidOperatorShape {
        operator,
        expected: 1,
        found: 0,
    })
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        condition::{Comparison, Condition},
        error::Error,
    };

    use super::{
        group_scan::GroupScan, limit::Limit, project::Project, select::Select, LogicalOperator,
        LogicalOperatorEnum,
    };

    fn plan() -> LogicalOperatorEnum {
        Limit::new(
            Project::new(
                Select::new(
                    GroupScan::new("orders").into(),
                    Condition::new(0, Comparison::Equal, 1),
                )
                .into(),
                vec![0],
            )
            .into(),
            0,
            Some(1),
        )
        .into()
    }

    #[test]
    fn depth_and_names() {
        let plan = plan();

        assert_eq!(plan.depth(), 4);
        assert_eq!(plan.name(), "Limit");

        let mut names = Vec::new();
        let mut current = Some(&plan);
        while let Some(operator) = current {
            names.push(operator.name());
            current = operator.input();
        }

        assert_eq!(names, vec!["Limit", "Project", "Select", "GroupScan"]);
    }

    #[test]
    fn display_tree() {
        let rendered = plan().to_string();

        assert!(rendered.contains("Limit offset 0 limit 1"));
        assert!(rendered.contains("Project [0]"));
        assert!(rendered.contains("Select #0 = 1"));
        assert!(rendered.contains("GroupScan orders"));
    }

    #[test]
    fn unary_translation_requires_input() {
        let select = Select::new(
            GroupScan::new("orders").into(),
            Condition::new(0, Comparison::Equal, 1),
        );

        assert!(matches!(
            select.translate(None),
            Err(Error::InvalidOperatorShape {
                operator: "Select",
                expected: 1,
                found: 0
            })
        ));
    }
}
