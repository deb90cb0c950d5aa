//! Functionality to read plans and group data is implemented here.
//!
//! This module acts as a mediation layer between files on disk and the logical and physical layer.

pub mod group_import;
pub mod plan_file;

pub use group_import::{import_group, import_group_file};
pub use plan_file::{parse_plan, read_plan, PlanNode, PlanOperator};
