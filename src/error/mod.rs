use thiserror::Error;

/// Errors raised while building or evaluating a model tree.
///
/// Every variant is a deterministic function of the input; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The model's analyticity does not support the requested operation
    #[error("{model} does not support {operation}")]
    CapabilityMissing {
        model: String,
        operation: &'static str,
    },

    /// Paired arrays or grids disagree in shape
    #[error("Shape mismatch in {context}: {left:?} vs {right:?}")]
    ShapeMismatch {
        context: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("Invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// Failure reported by the Fourier engine
    #[error("Fourier engine error: {0}")]
    Engine(String),
}

impl ModelError {
    pub(crate) fn missing<M: ?Sized>(operation: &'static str) -> Self {
        ModelError::CapabilityMissing {
            model: std::any::type_name::<M>().to_string(),
            operation,
        }
    }

    pub(crate) fn shape(context: &'static str, left: &[usize], right: &[usize]) -> Self {
        ModelError::ShapeMismatch {
            context,
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}
