//! Padded tensor implementation and operations
//!
//! This module provides the [`PaddedND`] tensor type, organized into
//! functional sub-modules: construction, indexed access under the implicit
//! zero padding, shifting/trimming/rounding, and the elementwise combination
//! policies with their operator sugar.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod arithmetic;
mod creation;
mod indexing;
mod manipulation;

// Supporting modules
pub mod padded_traits;
pub(crate) mod functions;

// Re-export the main type and the combination seam
pub use arithmetic::{map_scalar, zip_overlap, zip_padded, PaddedTensor};
pub use types::PaddedND;
