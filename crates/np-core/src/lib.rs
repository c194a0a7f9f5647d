//! `np-core` - Shared descriptor vocabulary for neural-primitives.
//!
//! This crate provides:
//! - `ShapeDescriptor`, a layout-independent tensor shape (rank plus
//!   per-dimension sizes)
//! - `PropagationKind` and `OperationKind`, the tags every operation
//!   descriptor in the library carries
//! - `DescriptorError`, the single rejection kind for descriptor
//!   construction
//!
//! Primitive crates (e.g. `np-relu`) assemble these into validated,
//! immutable operation descriptors.

pub mod error;
pub mod kind;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use error::{DescriptorError, Result};
pub use kind::{OperationKind, PropagationKind};
pub use shape::{ShapeDescriptor, MAX_DIMS};
