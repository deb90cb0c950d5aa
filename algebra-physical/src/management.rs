//! This module collects data structures and functionality surrounding
//! the storage of groups of rows

pub mod id;
pub mod storage;
