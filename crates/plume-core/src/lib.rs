//! Core types for the Plume fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! configuration error taxonomy and the [`FieldKind`] selector shared by the
//! grid storage and the solver stages.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;

pub use error::ConfigError;
pub use field::FieldKind;
