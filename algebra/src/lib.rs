//! Logical operator algebra and its translation into physical operators

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

/// The crate for underlying physical operations.
pub extern crate algebra_physical;

pub mod api;
pub mod error;
pub mod execution;
pub mod io;
pub mod logical;

// values, conditions and group ids appear in logical operators, so re-export them here.
pub use algebra_physical::condition;
pub use algebra_physical::datavalues;
pub use algebra_physical::management::id::GroupId;
