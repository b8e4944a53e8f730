//! Denavit-Hartenberg link description and the transform between two
//! consecutive link frames.

use nalgebra::Matrix4;

/// Classic DH parameter tuple of one joint, describing the geometric
/// relationship between consecutive link frames. Read-only configuration
/// for a given arm; the joint variable is supplied separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkParameters {
    /// Constant offset added to the joint angle (radians).
    pub theta: f64,

    /// Translation along the joint axis (meters).
    pub d: f64,

    /// Twist about the new x-axis (radians).
    pub alpha: f64,

    /// Link length along the new x-axis (meters).
    pub r: f64,
}

impl LinkParameters {
    pub fn new(theta: f64, d: f64, alpha: f64, r: f64) -> Self {
        LinkParameters { theta, d, alpha, r }
    }

    /// Homogeneous transform from this link's frame to the next one for the
    /// given joint angle.
    ///
    /// The composition order is a contract the chain composition depends
    /// on and must never change:
    /// `Rz(theta + q) * Tz(d) * Rx(alpha) * Tx(r)`.
    pub fn transform(&self, joint_angle: f64) -> Matrix4<f64> {
        let (st, ct) = (self.theta + joint_angle).sin_cos();
        let (sa, ca) = self.alpha.sin_cos();
        let r = self.r;
        let d = self.d;

        Matrix4::new(
            ct, -st * ca, st * sa, r * ct,
            st, ct * ca, -ct * sa, r * st,
            0.0, sa, ca, d,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}
