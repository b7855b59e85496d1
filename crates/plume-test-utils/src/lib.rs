//! Test fixtures and seeded field generators for Plume development.
//!
//! Grid fixtures ([`open_box`], [`walled_box`], [`tank`]) build small
//! [`FluidGrid`]s with a standard mask, and the seeded generators fill
//! fields from a ChaCha8 stream so failures replay exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{open_box, seeded_smoke, seeded_velocity, tank, walled_box};

/// Assert `|actual - expected| <= tol`, reporting both values on failure.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
