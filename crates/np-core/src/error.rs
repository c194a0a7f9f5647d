use thiserror::Error;

/// Rejection kind for descriptor construction.
///
/// Every malformation a caller can supply (missing conditionally
/// required shape, propagation kind outside the allowed set, wrong
/// rank, mismatched shapes) is equally fatal and equally recoverable,
/// so the taxonomy is deliberately flat: one kind, no sub-variants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("invalid arguments")]
    InvalidArguments,
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
