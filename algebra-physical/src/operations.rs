//! This module defines the physical operators
//! and [PhysicalOperatorEnum], the closed set of all of them.

pub mod group_scan;
pub mod limit;
pub mod project;
pub mod select;

use std::fmt::{Debug, Display};

use delegate::delegate;

use crate::{
    condition::Condition,
    datavalues::Row,
    error::Error,
    management::{id::GroupId, storage::GroupStorage},
};

use self::{
    group_scan::PhysicalGroupScan, limit::PhysicalLimit, project::PhysicalProject,
    select::PhysicalSelect,
};

/// Lazy sequence of rows produced by a physical operator
pub type RowCursor<'a> = Box<dyn Iterator<Item = Result<Row, Error>> + 'a>;

/// Common interface of all physical operators
pub trait PhysicalOperator: Debug {
    /// Return the input of this operator, if there is one.
    fn input(&self) -> Option<&PhysicalOperatorEnum>;

    /// Open a new cursor over the rows produced by this operator.
    ///
    /// No rows are read before the cursor is advanced.
    /// Opening another cursor restarts the computation from the beginning.
    fn cursor<'a>(&'a self, storage: &'a dyn GroupStorage) -> Result<RowCursor<'a>, Error>;

    /// Return a short human readable description of this operator,
    /// excluding its input.
    fn label(&self) -> String;
}

/// Physical operator of any kind
#[allow(variant_size_differences)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicalOperatorEnum {
    /// Read all rows of a group
    GroupScan(PhysicalGroupScan),
    /// Keep only the rows satisfying a condition
    Select(PhysicalSelect),
    /// Reorder or remove columns
    Project(PhysicalProject),
    /// Skip and bound the number of rows
    Limit(PhysicalLimit),
}

impl PhysicalOperator for PhysicalOperatorEnum {
    delegate! {
        to match self {
            Self::GroupScan(operator) => operator,
            Self::Select(operator) => operator,
            Self::Project(operator) => operator,
            Self::Limit(operator) => operator,
        } {
            fn input(&self) -> Option<&PhysicalOperatorEnum>;
            fn cursor<'a>(&'a self, storage: &'a dyn GroupStorage) -> Result<RowCursor<'a>, Error>;
            fn label(&self) -> String;
        }
    }
}

// Constructors for every physical operator
impl PhysicalOperatorEnum {
    /// Return a [PhysicalOperatorEnum] reading all rows of the given group.
    pub fn group_scan(group: GroupId) -> Self {
        Self::GroupScan(PhysicalGroupScan::new(group))
    }

    /// Return a [PhysicalOperatorEnum] filtering its input by the given condition.
    pub fn select(input: PhysicalOperatorEnum, condition: Condition) -> Self {
        Self::Select(PhysicalSelect::new(input, condition))
    }

    /// Return a [PhysicalOperatorEnum] projecting its input onto the given columns.
    pub fn project(input: PhysicalOperatorEnum, columns: Vec<usize>) -> Self {
        Self::Project(PhysicalProject::new(input, columns))
    }

    /// Return a [PhysicalOperatorEnum] that skips `offset` rows of its input
    /// and afterwards returns at most `limit` rows.
    pub fn limit(input: PhysicalOperatorEnum, offset: usize, limit: Option<usize>) -> Self {
        Self::Limit(PhysicalLimit::new(input, offset, limit))
    }
}

impl PhysicalOperatorEnum {
    /// Return the number of operators on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        1 + self.input().map_or(0, PhysicalOperatorEnum::depth)
    }

    /// Open a cursor and collect all rows it produces.
    pub fn collect_rows(&self, storage: &dyn GroupStorage) -> Result<Vec<Row>, Error> {
        self.cursor(storage)?.collect()
    }

    /// Return an ascii tree representation of this operator and its inputs.
    pub fn ascii_tree(&self) -> ascii_tree::Tree {
        match self.input() {
            Some(input) => ascii_tree::Tree::Node(self.label(), vec![input.ascii_tree()]),
            None => ascii_tree::Tree::Leaf(vec![self.label()]),
        }
    }
}

impl Display for PhysicalOperatorEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ascii_tree::write_tree(f, &self.ascii_tree())
    }
}

impl From<PhysicalGroupScan> for PhysicalOperatorEnum {
    fn from(value: PhysicalGroupScan) -> Self {
        Self::GroupScan(value)
    }
}

impl From<PhysicalSelect> for PhysicalOperatorEnum {
    fn from(value: PhysicalSelect) -> Self {
        Self::Select(value)
    }
}

impl From<PhysicalProject> for PhysicalOperatorEnum {
    fn from(value: PhysicalProject) -> Self {
        Self::Project(value)
    }
}

impl From<PhysicalLimit> for PhysicalOperatorEnum {
    fn from(value: PhysicalLimit) -> Self {
        Self::Limit(value)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        condition::{Comparison, Condition},
        datavalues::Value,
        management::{id::GroupId, storage::MemoryStorage},
    };

    use super::{PhysicalOperator, PhysicalOperatorEnum};

    fn storage() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        for (id, customer, total) in [(1, "ann", 30), (2, "bob", 5), (3, "cid", 12)] {
            storage.push_row(
                GroupId::new("orders"),
                vec![
                    Value::Integer(id),
                    Value::from(customer),
                    Value::Integer(total),
                ],
            );
        }

        storage
    }

    #[test]
    fn composed_plan() {
        let storage = storage();
        let plan = PhysicalOperatorEnum::limit(
            PhysicalOperatorEnum::project(
                PhysicalOperatorEnum::select(
                    PhysicalOperatorEnum::group_scan(GroupId::new("orders")),
                    Condition::new(2, Comparison::Greater, 10),
                ),
                vec![1],
            ),
            1,
            None,
        );

        assert_eq!(plan.depth(), 4);
        assert_eq!(
            plan.collect_rows(&storage).unwrap(),
            vec![vec![Value::from("cid")]]
        );
    }

    #[test]
    fn structure() {
        let scan = PhysicalOperatorEnum::group_scan(GroupId::new("orders"));
        let select =
            PhysicalOperatorEnum::select(scan.clone(), Condition::new(0, Comparison::Equal, 1));

        assert_eq!(scan.input(), None);
        assert_eq!(select.input(), Some(&scan));
        assert_eq!(scan.depth(), 1);
        assert_eq!(select.depth(), 2);
    }

    #[test]
    fn display_tree() {
        let plan = PhysicalOperatorEnum::select(
            PhysicalOperatorEnum::group_scan(GroupId::new("orders")),
            Condition::new(0, Comparison::Less, 3),
        );
        let rendered = plan.to_string();

        assert!(rendered.contains("Select #0 < 3"));
        assert!(rendered.contains("GroupScan orders"));
        assert!(rendered.find("Select").unwrap() < rendered.find("GroupScan").unwrap());
    }
}
