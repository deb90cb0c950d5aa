//! This crate defines the physical layer of the operator algebra,
//! i.e., operators that describe *how* a relational operation is executed
//! against concrete storage.
//! It knows nothing about how a plan was built at the logical level;
//! it only receives finished operator trees and opens row cursors over them.

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

pub mod condition;
pub mod datavalues;
pub mod error;
pub mod management;
pub mod operations;
