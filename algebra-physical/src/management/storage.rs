//! This module defines [GroupStorage],
//! the interface through which physical operators read stored rows,
//! and [MemoryStorage], which keeps all groups in memory.

use std::{collections::HashMap, fmt::Debug};

use crate::{datavalues::Row, error::Error};

use super::id::GroupId;

/// Iterator over the stored rows of a group
pub type StoredRows<'a> = Box<dyn Iterator<Item = Row> + 'a>;

/// Storage collaborator that knows how to enumerate the rows of a group.
pub trait GroupStorage: Debug {
    /// Return an iterator over all rows of the given group.
    ///
    /// Every call starts a new pass over the group.
    /// Returns [Error::UnknownGroup] if the group does not exist.
    fn scan(&self, group: &GroupId) -> Result<StoredRows<'_>, Error>;
}

/// [GroupStorage] holding every group as a vector of rows
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    /// Rows of each group, in insertion order
    groups: HashMap<GroupId, Vec<Row>>,
}

impl MemoryStorage {
    /// Create a new empty [MemoryStorage].
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group with the given rows.
    ///
    /// Replaces an existing group of the same name.
    pub fn add_group(&mut self, group: GroupId, rows: Vec<Row>) {
        log::debug!("storing group {group} with {} rows", rows.len());
        self.groups.insert(group, rows);
    }

    /// Append a row to a group, creating the group if necessary.
    pub fn push_row(&mut self, group: GroupId, row: Row) {
        self.groups.entry(group).or_default().push(row);
    }

    /// Return whether the given group exists.
    pub fn contains(&self, group: &GroupId) -> bool {
        self.groups.contains_key(group)
    }

    /// Return the number of rows of a group, if it exists.
    pub fn num_rows(&self, group: &GroupId) -> Option<usize> {
        self.groups.get(group).map(Vec::len)
    }

    /// Return the number of groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }
}

impl GroupStorage for MemoryStorage {
    fn scan(&self, group: &GroupId) -> Result<StoredRows<'_>, Error> {
        let rows = self
            .groups
            .get(group)
            .ok_or_else(|| Error::UnknownGroup(group.clone()))?;

        Ok(Box::new(rows.iter().cloned()))
    }
}
