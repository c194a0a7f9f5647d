//! `np-relu` - ReLU operation descriptor for neural-primitives.
//!
//! This crate provides:
//! - `ReluDescriptor`, the validated, immutable record specifying one
//!   rectified-linear-unit operation (shape, propagation direction,
//!   negative slope)
//! - Forward and backward constructors that either produce a
//!   structurally sound descriptor or reject with `InvalidArguments`
//!
//! A descriptor that escapes construction needs no further shape or
//! parameter checks; kernel selection and execution consume it as-is.

pub mod desc;

// Re-export primary types at the crate root for convenience.
pub use desc::ReluDescriptor;
pub use np_core::{DescriptorError, OperationKind, PropagationKind, Result, ShapeDescriptor};
