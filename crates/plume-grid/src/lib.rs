//! Staggered (MAC) grid storage for the Plume fluid solver.
//!
//! [`FluidGrid`] owns every per-cell array the solver touches: the two
//! face-centred velocity components, cell-centred pressure, the solid mask,
//! the smoke density, and the scratch buffers used by advection. Arrays are
//! [`Field2`] containers sharing one [`GridLayout`] whose index mapping is
//! `i * num_y + j`.
//!
//! The grid has no behaviour beyond storage and index mapping. Stages in
//! `plume-solver` borrow it through [`FluidGrid::parts_mut`], which hands out
//! the solid mask read-only so the solver cannot alter it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod field;
pub mod grid;
pub mod layout;

pub use config::GridConfig;
pub use field::Field2;
pub use grid::{FluidGrid, GridParts, FLUID, SOLID};
pub use layout::GridLayout;
