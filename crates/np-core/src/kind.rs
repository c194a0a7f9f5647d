use std::fmt;

/// Tag identifying which primitive an operation descriptor specifies.
///
/// Registered centrally so the kind map stays consistent across the
/// library; each primitive crate stamps its own kind into the
/// descriptors it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Convolution,
    InnerProduct,
    Lrn,
    Pooling,
    Relu,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Convolution => write!(f, "convolution"),
            OperationKind::InnerProduct => write!(f, "inner_product"),
            OperationKind::Lrn => write!(f, "lrn"),
            OperationKind::Pooling => write!(f, "pooling"),
            OperationKind::Relu => write!(f, "relu"),
        }
    }
}

/// Propagation direction of an operation descriptor.
///
/// Determines which fields of a descriptor are meaningful; backward
/// kinds carry gradient shapes that forward kinds do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropagationKind {
    /// Forward pass, keeping whatever the backward pass will need.
    ForwardTraining,
    /// Forward pass only; training-only state may be elided.
    ForwardInference,
    /// Gradient with respect to the operation's input data.
    BackwardData,
    /// Gradient with respect to the operation's weights.
    BackwardWeights,
    /// Gradient with respect to the operation's bias.
    BackwardBias,
}

impl PropagationKind {
    /// True for the two forward kinds.
    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            PropagationKind::ForwardTraining | PropagationKind::ForwardInference
        )
    }
}

impl fmt::Display for PropagationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagationKind::ForwardTraining => write!(f, "forward_training"),
            PropagationKind::ForwardInference => write!(f, "forward_inference"),
            PropagationKind::BackwardData => write!(f, "backward_data"),
            PropagationKind::BackwardWeights => write!(f, "backward_weights"),
            PropagationKind::BackwardBias => write!(f, "backward_bias"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_forward() {
        assert!(PropagationKind::ForwardTraining.is_forward());
        assert!(PropagationKind::ForwardInference.is_forward());
        assert!(!PropagationKind::BackwardData.is_forward());
        assert!(!PropagationKind::BackwardWeights.is_forward());
        assert!(!PropagationKind::BackwardBias.is_forward());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PropagationKind::BackwardData), "backward_data");
        assert_eq!(format!("{}", OperationKind::Relu), "relu");
    }
}
