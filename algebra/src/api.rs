//! High-level API to load, translate and execute plans
//!
//! # Examples
//! ```
//! use algebra::{
//!     api::{execute, load_string, translate},
//!     datavalues::Value,
//!     algebra_physical::management::storage::MemoryStorage,
//!     GroupId,
//! };
//!
//! let plan = load_string(
//!     r#"{
//!         "operator": "select",
//!         "condition": { "column": 0, "comparison": ">", "value": 1 },
//!         "input": { "operator": "group_scan", "group": "numbers" }
//!     }"#,
//! )
//! .unwrap();
//! let physical = translate(plan.as_ref()).unwrap();
//!
//! let mut storage = MemoryStorage::new();
//! storage.add_group(
//!     GroupId::new("numbers"),
//!     vec![vec![Value::Integer(1)], vec![Value::Integer(2)]],
//! );
//!
//! assert_eq!(execute(&physical, &storage).unwrap(), vec![vec![Value::Integer(2)]]);
//! ```

use std::path::Path;

use algebra_physical::{
    datavalues::Row, management::storage::GroupStorage, operations::PhysicalOperatorEnum,
};

use crate::{
    error::Error,
    execution::{translation::PlanTranslator, translation_parameters::TranslationParameters},
    io::plan_file::{parse_plan, read_plan},
    logical::LogicalOperatorEnum,
};

/// Load the plan stored in the given `file`.
///
/// For details see [load_string]
pub fn load(file: &Path) -> Result<Option<LogicalOperatorEnum>, Error> {
    read_plan(file)
}

/// Parse the plan described by the given `input`-String.
///
/// Returns `None` if the description denotes the empty plan.
///
/// # Error
/// Returns an appropriate [Error] variant if the description is malformed
/// or describes an operator with an unsupported number of inputs.
pub fn load_string(input: &str) -> Result<Option<LogicalOperatorEnum>, Error> {
    parse_plan(input)
}

/// Translate a logical plan into a physical plan using default parameters.
pub fn translate(plan: Option<&LogicalOperatorEnum>) -> Result<PhysicalOperatorEnum, Error> {
    translate_with(plan, TranslationParameters::default())
}

/// Translate a logical plan into a physical plan using the given parameters.
pub fn translate_with(
    plan: Option<&LogicalOperatorEnum>,
    parameters: TranslationParameters,
) -> Result<PhysicalOperatorEnum, Error> {
    PlanTranslator::new(parameters).translate(plan)
}

/// Run a physical plan against the given storage and collect all resulting rows.
pub fn execute(plan: &PhysicalOperatorEnum, storage: &dyn GroupStorage) -> Result<Vec<Row>, Error> {
    Ok(plan.collect_rows(storage)?)
}
