use crate::error::{DescriptorError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum number of axes a shape descriptor can carry.
pub const MAX_DIMS: usize = 12;

/// A layout-independent tensor shape: a rank plus per-dimension sizes.
///
/// Stored inline as a fixed-size array so descriptors are plain `Copy`
/// values; a shape held by a descriptor never aliases the caller's.
/// Only the first `ndims` entries are meaningful. Memory format and
/// strides are out of scope here; kernels consume those from their own
/// layout descriptors.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor {
    ndims: usize,
    dims: [usize; MAX_DIMS],
}

impl ShapeDescriptor {
    /// Create a shape descriptor from a slice of dimension sizes.
    ///
    /// Fails with `InvalidArguments` if more than `MAX_DIMS` axes are
    /// supplied.
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        if dims.len() > MAX_DIMS {
            return Err(DescriptorError::InvalidArguments);
        }
        let mut stored = [0usize; MAX_DIMS];
        stored[..dims.len()].copy_from_slice(dims);
        Ok(ShapeDescriptor {
            ndims: dims.len(),
            dims: stored,
        })
    }

    /// Number of dimensions (rank).
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// The populated dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.dims[..self.ndims]
    }

    /// Returns the size of dimension `i`.
    ///
    /// # Panics
    /// Panics if `i >= ndims()`.
    pub fn dim(&self, i: usize) -> usize {
        self.dims()[i]
    }

    /// Total number of elements (product of all dimension sizes).
    pub fn numel(&self) -> usize {
        self.dims().iter().product()
    }
}

// Equality and hashing look only at the populated prefix; the unused
// tail of the fixed array never participates.
impl PartialEq for ShapeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims()
    }
}

impl Eq for ShapeDescriptor {}

impl Hash for ShapeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims().hash(state);
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}
