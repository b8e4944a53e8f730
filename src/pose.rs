//! Compact tool center point pose and its conversions to and from the
//! matrix representation, plus the error metrics the inverse solver
//! minimizes.
//!
//! One rotation convention is used across the whole crate: the orientation
//! angles are roll/pitch/yaw with `R = Rz(yaw) * Ry(pitch) * Rx(roll)`,
//! the same convention as `nalgebra::Rotation3::from_euler_angles`. Both
//! directions of the conversion use it; mixing conventions between forward
//! and inverse kinematics would silently break the solver.

use nalgebra::{Isometry3, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Pitch values closer than this to ±90° are treated as gimbal locked.
const GIMBAL_LOCK_EPSILON: f64 = 1e-9;

/// Cartesian pose of the tool center point: position in meters in the base
/// frame and orientation as roll/pitch/yaw in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Pose { x, y, z, roll, pitch, yaw }
    }

    /// Position part as a vector.
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Orientation part as a rotation matrix. The result is orthonormal by
    /// construction (nalgebra builds it from the three elementary
    /// rotations), so no renormalization happens here.
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.roll, self.pitch, self.yaw)
    }

    /// Full matrix representation of this pose.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(self.x, self.y, self.z),
            UnitQuaternion::from_rotation_matrix(&self.rotation()),
        )
    }

    /// Builds the compact pose from a matrix representation, extracting
    /// roll/pitch/yaw with [rpy_from_rotation].
    pub fn from_isometry(isometry: &Isometry3<f64>) -> Self {
        let translation = isometry.translation.vector;
        let (roll, pitch, yaw) = rpy_from_rotation(&isometry.rotation.to_rotation_matrix());
        Pose {
            x: translation.x,
            y: translation.y,
            z: translation.z,
            roll,
            pitch,
            yaw,
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.z, self.roll, self.pitch, self.yaw]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Euclidean distance between the position parts. Symmetric, zero only
    /// for identical positions.
    pub fn distance_to(&self, other: &Pose) -> f64 {
        (self.position() - other.position()).norm()
    }

    /// Sum of the circular differences of the three orientation angles,
    /// each taken as the shorter arc so that angles on opposite sides of
    /// the ±π branch cut compare as close.
    ///
    /// This is an angle-wise approximation, not a proper rotational
    /// distance: near gimbal lock roll and yaw trade off against each
    /// other and the sum overstates the true rotation angle. It is good
    /// enough as a convergence signal for the iterative solver, where both
    /// poses come from the same extraction convention, but it must not be
    /// used to compare arbitrary rotations.
    pub fn angular_error_to(&self, other: &Pose) -> f64 {
        angle_gap(self.roll, other.roll)
            + angle_gap(self.pitch, other.pitch)
            + angle_gap(self.yaw, other.yaw)
    }
}

/// Shorter arc between two angles, in [0, π].
fn angle_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(std::f64::consts::TAU);
    d.min(std::f64::consts::TAU - d)
}

/// Extracts roll/pitch/yaw from a rotation matrix under the crate-wide
/// convention `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
///
/// At gimbal lock (pitch = ±90°) infinitely many angle triples describe the
/// same rotation; this extraction deterministically picks the one with
/// `roll = 0` and folds the whole z/x rotation into yaw. The same matrix
/// always yields the same triple.
pub fn rpy_from_rotation(rotation: &Rotation3<f64>) -> (f64, f64, f64) {
    let m = rotation.matrix();
    // -sin(pitch) lives in m[(2, 0)]; clamp against rounding outside [-1, 1].
    let sin_pitch = (-m[(2, 0)]).clamp(-1.0, 1.0);

    if gimbal_locked(rotation) {
        let pitch = if sin_pitch > 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        };
        // Only roll - yaw (or roll + yaw) is determined here; resolve with
        // roll = 0. This works for both pitch signs.
        let yaw = f64::atan2(-m[(0, 1)], m[(1, 1)]);
        return (0.0, pitch, yaw);
    }

    let roll = f64::atan2(m[(2, 1)], m[(2, 2)]);
    let pitch = sin_pitch.asin();
    let yaw = f64::atan2(m[(1, 0)], m[(0, 0)]);
    (roll, pitch, yaw)
}

/// True when the rotation is within [GIMBAL_LOCK_EPSILON] of the RPY
/// representation singularity (pitch = ±90°).
pub fn gimbal_locked(rotation: &Rotation3<f64>) -> bool {
    1.0 - rotation.matrix()[(2, 0)].abs() < GIMBAL_LOCK_EPSILON
}
