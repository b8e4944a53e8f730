//! Defines the arm-wide type aliases and the `Kinematics` trait that the
//! solver implements.

use crate::kinematics_error::KinematicsError;
use crate::pose::Pose;

/// Degrees of freedom of the supported manipulators. The whole crate is
/// built around 5-axis arms (base yaw, three parallel pitch joints, tool
/// roll), like the KUKA youBot arm.
pub const DOF: usize = 5;

/// Joint angles in radians, ordered from the base to the tool center point.
pub type Joints = [f64; DOF];

/// The rest configuration, all joints at their zero angle.
pub const JOINTS_AT_ZERO: Joints = [0.0; DOF];

/// Singular configurations the solver can diagnose. The pose conversion
/// still resolves them deterministically; this value only flags that the
/// roll/pitch/yaw representation is degenerate there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Singularity {
    /// The tool pitch is at ±90°, where roll and yaw rotate about the same
    /// axis (gimbal lock of the RPY representation).
    Gimbal,
}

pub trait Kinematics: Send + Sync {
    /// Forward kinematics: compute the tool center point pose for the given
    /// joint angles. Fails only if the slice length does not match [DOF];
    /// it is total for any well-shaped finite input.
    fn forward(&self, angles: &[f64]) -> Result<Pose, KinematicsError>;

    /// Inverse kinematics: find joint angles reaching the target pose.
    /// Either a complete, limit-compliant solution is returned, or a typed
    /// error; there is no partial output. An unreachable target is an
    /// ordinary, recoverable outcome, not a crash.
    fn inverse(&self, target: &Pose) -> Result<Joints, KinematicsError>;

    /// Reports whether the given configuration puts the tool orientation
    /// into a representation singularity (see [Singularity]).
    fn kinematic_singularity(&self, qs: &Joints) -> Option<Singularity>;
}
