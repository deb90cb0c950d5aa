//! This module defines the JSON description of logical plans.
//!
//! A plan file contains either `null`, the empty plan, or a single node object.
//! Every node names its operator, carries the fields of that operator
//! and optionally an `input` node:
//!
//! ```json
//! {
//!     "operator": "select",
//!     "condition": { "column": 2, "comparison": ">", "value": 10 },
//!     "input": { "operator": "group_scan", "group": "orders" }
//! }
//! ```

use std::{fs::read_to_string, path::Path};

use algebra_physical::{condition::Condition, management::id::GroupId};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    logical::{
        group_scan::GroupScan, limit::Limit, project::Project, select::Select,
        LogicalOperatorEnum,
    },
};

/// Operator of a [PlanNode] together with its parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operator", rename_all = "snake_case")]
pub enum PlanOperator {
    /// See [GroupScan]
    GroupScan {
        /// Group that is scanned
        group: GroupId,
    },
    /// See [Select]
    Select {
        /// Condition rows have to satisfy
        condition: Condition,
    },
    /// See [Project]
    Project {
        /// Input column for each output column
        columns: Vec<usize>,
    },
    /// See [Limit]
    Limit {
        /// Number of skipped rows
        #[serde(default)]
        offset: usize,
        /// Maximum number of rows
        #[serde(default)]
        limit: Option<usize>,
    },
}

/// Serialized form of a logical operator and its input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NodeDescription")]
pub struct PlanNode {
    /// Operator of this node
    #[serde(flatten)]
    pub operator: PlanOperator,
    /// Input of this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Box<PlanNode>>,
}

/// Node as it is read from a plan file.
///
/// Keeps the input next to the operator fields so that unknown keys are rejected.
#[derive(Debug, Deserialize)]
#[serde(tag = "operator", rename_all = "snake_case", deny_unknown_fields)]
enum NodeDescription {
    GroupScan {
        group: GroupId,
        #[serde(default)]
        input: Option<Box<PlanNode>>,
    },
    Select {
        condition: Condition,
        #[serde(default)]
        input: Option<Box<PlanNode>>,
    },
    Project {
        columns: Vec<usize>,
        #[serde(default)]
        input: Option<Box<PlanNode>>,
    },
    Limit {
        #[serde(default)]
        offset: usize,
        #[serde(default)]
        limit: Option<usize>,
        #[serde(default)]
        input: Option<Box<PlanNode>>,
    },
}

impl From<NodeDescription> for PlanNode {
    fn from(description: NodeDescription) -> Self {
        let (operator, input) = match description {
            NodeDescription::GroupScan { group, input } => {
                (PlanOperator::GroupScan { group }, input)
            }
            NodeDescription::Select { condition, input } => {
                (PlanOperator::Select { condition }, input)
            }
            NodeDescription::Project { columns, input } => {
                (PlanOperator::Project { columns }, input)
            }
            NodeDescription::Limit {
                offset,
                limit,
                input,
            } => (PlanOperator::Limit { offset, limit }, input),
        };

        Self { operator, input }
    }
}

impl PlanNode {
    /// Build the logical operator tree described by this node.
    ///
    /// Inputs are built first; every operator is created through its validating constructor.
    /// Returns [Error::InvalidOperatorShape] if a node has an input it does not support
    /// or lacks one it requires.
    pub fn build(self) -> Result<LogicalOperatorEnum, Error> {
        let input = match self.input {
            Some(input) => Some(input.build()?),
            None => None,
        };

        Ok(match self.operator {
            PlanOperator::GroupScan { group } => GroupScan::try_new(group, input)?.into(),
            PlanOperator::Select { condition } => Select::try_new(input, condition)?.into(),
            PlanOperator::Project { columns } => Project::try_new(input, columns)?.into(),
            PlanOperator::Limit { offset, limit } => Limit::try_new(input, offset, limit)?.into(),
        })
    }
}

/// Parse a plan from its JSON description.
///
/// Returns `None` for the empty plan.
pub fn parse_plan(description: &str) -> Result<Option<LogicalOperatorEnum>, Error> {
    let node: Option<PlanNode> = serde_json::from_str(description).map_err(Error::PlanFormat)?;

    node.map(PlanNode::build).transpose()
}

/// Read and parse the plan file at the given path, see [parse_plan].
pub fn read_plan(path: &Path) -> Result<Option<LogicalOperatorEnum>, Error> {
    let description = read_to_string(path).map_err(|error| Error::IOReading {
        error,
        filename: path.display().to_string(),
    })?;

    parse_plan(&description)
}
