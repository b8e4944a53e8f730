//! Error handling for the forward and inverse solvers.

/// Failures the solver reports to the caller. Inverse failures are expected
/// outcomes on the control-loop hot path; check them, do not treat them as
/// fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The joint angle slice does not have one entry per joint.
    InputShape { expected: usize, found: usize },

    /// The inverse search exhausted its iteration budget without bringing
    /// both errors below the configured tolerances. Carries the residual
    /// errors of the best candidate for diagnostics.
    UnreachablePose {
        position_error: f64,
        orientation_error: f64,
    },

    /// The target pose contains non-finite values.
    MalformedPose(String),
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::InputShape { expected, found } =>
                write!(f, "Joint vector length mismatch: expected {}, found {}", expected, found),
            KinematicsError::UnreachablePose { position_error, orientation_error } =>
                write!(f, "Pose not reached: residual position error {:.6} m, orientation error {:.6} rad",
                       position_error, orientation_error),
            KinematicsError::MalformedPose(ref msg) =>
                write!(f, "Malformed pose: {}", msg),
        }
    }
}

impl std::error::Error for KinematicsError {}
