//! This module defines [PhysicalGroupScan].

use crate::{
    error::Error,
    management::{id::GroupId, storage::GroupStorage},
};

use super::{PhysicalOperator, PhysicalOperatorEnum, RowCursor};

/// Access path reading every row of a group
///
/// This is always a leaf of a physical plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalGroupScan {
    /// Group whose rows are read
    group: GroupId,
}

impl PhysicalGroupScan {
    /// Create a new [PhysicalGroupScan].
    ///
    /// The group is not checked against any storage at this point.
    pub fn new(group: GroupId) -> Self {
        Self { group }
    }

    /// Return the group read by this operator.
    pub fn group(&self) -> &GroupId {
        &self.group
    }
}

impl PhysicalOperator for PhysicalGroupScan {
    fn input(&self) -> Option<&PhysicalOperatorEnum> {
        None
    }

    fn cursor<'a>(&'a self, storage: &'a dyn GroupStorage) -> Result<RowCursor<'a>, Error> {
        log::trace!("opening scan over group {}", self.group);
        let rows = storage.scan(&self.group)?;

        Ok(Box::new(rows.map(Ok)))
    }

    fn label(&self) -> String {
        format!("GroupScan {}", self.group)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        datavalues::Value,
        error::Error,
        management::{id::GroupId, storage::MemoryStorage},
        operations::PhysicalOperator,
    };

    use super::PhysicalGroupScan;

    #[test]
    fn scan_rows() {
        let mut storage = MemoryStorage::new();
        storage.add_group(
            GroupId::new("orders"),
            vec![vec![Value::Integer(1)], vec![Value::Integer(2)]],
        );
        let scan = PhysicalGroupScan::new(GroupId::new("orders"));

        let rows: Result<Vec<_>, _> = scan.cursor(&storage).unwrap().collect();
        assert_eq!(
            rows.unwrap(),
            vec![vec![Value::Integer(1)], vec![Value::Integer(2)]]
        );

        let restarted: Vec<_> = scan.cursor(&storage).unwrap().collect();
        assert_eq!(restarted.len(), 2);
    }

    #[test]
    fn scan_unknown_group_fails_on_open() {
        let storage = MemoryStorage::new();
        let scan = PhysicalGroupScan::new(GroupId::new(""));

        assert_eq!(scan.group().name(), "");
        assert!(matches!(
            scan.cursor(&storage),
            Err(Error::UnknownGroup(group)) if group == GroupId::new("")
        ));
    }
}
