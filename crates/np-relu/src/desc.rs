use np_core::{DescriptorError, OperationKind, PropagationKind, Result, ShapeDescriptor};

/// ReLU data tensors are rank-4 (batch, channels, height, width).
const RELU_RANK: usize = 4;

/// Logical implication: `p` requires `q`, vacuously true when `p` is
/// false. Keeps conditionally-required arguments as one predicate
/// instead of per-kind branching.
fn implies(p: bool, q: bool) -> bool {
    !p || q
}

/// A validated descriptor for one rectified-linear-unit operation.
///
/// Construction goes through [`ReluDescriptor::forward`] or
/// [`ReluDescriptor::backward`]; any descriptor those return satisfies:
/// - `data_desc` has exactly 4 dimensions
/// - `diff_data_desc` is `Some` exactly when the propagation kind is
///   `BackwardData`, and then matches `data_desc` dimension-wise
///
/// Never mutated after construction. Plain `Copy` data, so calls may
/// run from any thread without coordination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReluDescriptor {
    op_kind: OperationKind,
    prop_kind: PropagationKind,
    data_desc: ShapeDescriptor,
    diff_data_desc: Option<ShapeDescriptor>,
    negative_slope: f64,
}

impl ReluDescriptor {
    /// Create a forward ReLU descriptor.
    ///
    /// `prop_kind` must be `ForwardTraining` or `ForwardInference`;
    /// `data_desc` must be rank 4. `negative_slope` of zero gives
    /// standard ReLU, nonzero gives leaky ReLU; the value is not
    /// range-checked.
    pub fn forward(
        prop_kind: PropagationKind,
        data_desc: ShapeDescriptor,
        negative_slope: f64,
    ) -> Result<Self> {
        if !prop_kind.is_forward() {
            return Err(DescriptorError::InvalidArguments);
        }
        Self::init(prop_kind, data_desc, None, negative_slope)
    }

    /// Create a backward-data ReLU descriptor.
    ///
    /// `diff_data_desc` is the gradient shape; it must be rank 4 and
    /// dimension-wise equal to `data_desc`. The propagation kind is
    /// always `BackwardData`.
    pub fn backward(
        diff_data_desc: ShapeDescriptor,
        data_desc: ShapeDescriptor,
        negative_slope: f64,
    ) -> Result<Self> {
        Self::init(
            PropagationKind::BackwardData,
            data_desc,
            Some(diff_data_desc),
            negative_slope,
        )
    }

    /// Shared validation routine behind both entry points.
    ///
    /// Two checks in sequence, each a single fully-evaluated predicate:
    /// arguments first (supported kind, secondary shape present when the
    /// kind demands one), then consistency of the provisionally
    /// assembled descriptor (ranks and dimension-wise shape equality).
    /// The provisional descriptor is local and escapes only on success.
    fn init(
        prop_kind: PropagationKind,
        data_desc: ShapeDescriptor,
        diff_data_desc: Option<ShapeDescriptor>,
        negative_slope: f64,
    ) -> Result<Self> {
        let args_ok = matches!(
            prop_kind,
            PropagationKind::ForwardTraining
                | PropagationKind::ForwardInference
                | PropagationKind::BackwardData
        ) && implies(
            prop_kind == PropagationKind::BackwardData,
            diff_data_desc.is_some(),
        );
        if !args_ok {
            return Err(DescriptorError::InvalidArguments);
        }

        let desc = ReluDescriptor {
            op_kind: OperationKind::Relu,
            prop_kind,
            data_desc,
            // The secondary shape is only meaningful backward; a stray
            // one supplied with a forward kind is dropped, not stored.
            diff_data_desc: if prop_kind == PropagationKind::BackwardData {
                diff_data_desc
            } else {
                None
            },
            negative_slope,
        };

        let consistency = desc.data_desc.ndims() == RELU_RANK
            && implies(
                desc.prop_kind == PropagationKind::BackwardData,
                desc.diff_data_desc
                    .as_ref()
                    .map_or(false, |diff| {
                        diff.ndims() == RELU_RANK && diff.dims() == desc.data_desc.dims()
                    }),
            );
        if !consistency {
            return Err(DescriptorError::InvalidArguments);
        }

        Ok(desc)
    }

    /// The operation-kind tag; always `OperationKind::Relu`.
    pub fn op_kind(&self) -> OperationKind {
        self.op_kind
    }

    /// The propagation direction this descriptor was built for.
    pub fn prop_kind(&self) -> PropagationKind {
        self.prop_kind
    }

    /// The data tensor shape.
    pub fn data_desc(&self) -> &ShapeDescriptor {
        &self.data_desc
    }

    /// The gradient tensor shape; `Some` exactly for `BackwardData`.
    pub fn diff_data_desc(&self) -> Option<&ShapeDescriptor> {
        self.diff_data_desc.as_ref()
    }

    /// Slope applied to negative inputs; zero for standard ReLU.
    pub fn negative_slope(&self) -> f64 {
        self.negative_slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn shape(dims: &[usize]) -> ShapeDescriptor {
        ShapeDescriptor::from_dims(dims).unwrap()
    }

    #[test]
    fn test_forward_round_trip() {
        let data = shape(&[2, 3, 4, 4]);
        let d = ReluDescriptor::forward(PropagationKind::ForwardInference, data, 0.1).unwrap();
        assert_eq!(d.op_kind(), OperationKind::Relu);
        assert_eq!(d.prop_kind(), PropagationKind::ForwardInference);
        assert_eq!(d.data_desc().dims(), &[2, 3, 4, 4]);
        assert_eq!(d.diff_data_desc(), None);
        assert_abs_diff_eq!(d.negative_slope(), 0.1);
    }

    #[test]
    fn test_forward_training_kind() {
        let d =
            ReluDescriptor::forward(PropagationKind::ForwardTraining, shape(&[1, 1, 8, 8]), 0.0)
                .unwrap();
        assert_eq!(d.prop_kind(), PropagationKind::ForwardTraining);
        assert_eq!(d.diff_data_desc(), None);
    }

    #[test]
    fn test_forward_rejects_backward_kinds() {
        let data = shape(&[2, 3, 4, 4]);
        for kind in [
            PropagationKind::BackwardData,
            PropagationKind::BackwardWeights,
            PropagationKind::BackwardBias,
        ] {
            assert_eq!(
                ReluDescriptor::forward(kind, data, 0.0),
                Err(DescriptorError::InvalidArguments)
            );
        }
    }

    #[test]
    fn test_forward_rejects_wrong_rank() {
        for dims in [&[2, 3, 4][..], &[2, 3, 4, 4, 1][..], &[][..]] {
            assert_eq!(
                ReluDescriptor::forward(PropagationKind::ForwardTraining, shape(dims), 0.0),
                Err(DescriptorError::InvalidArguments)
            );
        }
    }

    #[test]
    fn test_backward_matching_shapes() {
        let data = shape(&[2, 3, 4, 4]);
        let diff = shape(&[2, 3, 4, 4]);
        let d = ReluDescriptor::backward(diff, data, 0.0).unwrap();
        assert_eq!(d.prop_kind(), PropagationKind::BackwardData);
        assert_eq!(d.data_desc(), &data);
        assert_eq!(d.diff_data_desc(), Some(&diff));
    }

    #[test]
    fn test_backward_dimension_mismatch() {
        // Mismatch on the last axis only.
        let diff = shape(&[2, 3, 4, 4]);
        let data = shape(&[2, 3, 4, 5]);
        assert_eq!(
            ReluDescriptor::backward(diff, data, 0.0),
            Err(DescriptorError::InvalidArguments)
        );
    }

    #[test]
    fn test_backward_wrong_rank_secondary() {
        let diff = shape(&[2, 3, 4]);
        let data = shape(&[2, 3, 4, 4]);
        assert_eq!(
            ReluDescriptor::backward(diff, data, 0.0),
            Err(DescriptorError::InvalidArguments)
        );
    }

    #[test]
    fn test_backward_wrong_rank_primary() {
        let diff = shape(&[2, 3, 4, 4]);
        let data = shape(&[2, 3, 4]);
        assert_eq!(
            ReluDescriptor::backward(diff, data, 0.0),
            Err(DescriptorError::InvalidArguments)
        );
    }

    #[test]
    fn test_idempotent_construction() {
        let data = shape(&[4, 8, 16, 16]);
        let a = ReluDescriptor::forward(PropagationKind::ForwardTraining, data, 0.01).unwrap();
        let b = ReluDescriptor::forward(PropagationKind::ForwardTraining, data, 0.01).unwrap();
        assert_eq!(a, b);

        let ga = ReluDescriptor::backward(data, data, 0.01).unwrap();
        let gb = ReluDescriptor::backward(data, data, 0.01).unwrap();
        assert_eq!(ga, gb);
    }

    #[test]
    fn test_slope_is_not_range_checked() {
        let data = shape(&[1, 1, 2, 2]);
        for slope in [-1.0, 0.0, 0.01, f64::INFINITY, f64::NAN] {
            let d = ReluDescriptor::forward(PropagationKind::ForwardInference, data, slope)
                .unwrap();
            assert_eq!(d.negative_slope().to_bits(), slope.to_bits());
        }
    }

    #[test]
    fn test_descriptor_is_plain_data() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReluDescriptor>();
    }
}
