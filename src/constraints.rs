use crate::kinematic_traits::{DOF, Joints};
use std::f64::consts::TAU;

/// Joint limits, one range per joint. Angles are compared on the unit
/// circle, so a range may wrap around through 0 (useful for joints that
/// are free except for a small dead sector). A joint whose bounds
/// coincide accepts any angle.
#[derive(Debug, Clone)]
pub struct Constraints {
    /// Lower limit, normalized to [0, 2π). If above the upper limit, the
    /// range wraps around through 0.
    pub from: Joints,

    /// Upper limit, normalized to [0, 2π).
    pub to: Joints,
}

/// Folds an angle onto [0, 2π).
fn to_circle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

impl Constraints {
    pub fn new(from: Joints, to: Joints) -> Self {
        Constraints {
            from: from.map(to_circle),
            to: to.map(to_circle),
        }
    }

    /// Limits that accept any angle on every joint.
    pub fn unconstrained() -> Self {
        Constraints {
            from: [0.0; DOF],
            to: [0.0; DOF],
        }
    }

    /// True when every joint angle falls into its configured range.
    pub fn compliant(&self, angles: &Joints) -> bool {
        (0..DOF).all(|joint| self.joint_compliant(joint, angles[joint]))
    }

    fn joint_compliant(&self, joint: usize, angle: f64) -> bool {
        let (from, to) = (self.from[joint], self.to[joint]);
        if from == to {
            return true; // Joint without constraints
        }
        let angle = to_circle(angle);
        if from <= to {
            angle >= from && angle <= to
        } else {
            // The range wraps around through 0.
            angle >= from || angle <= to
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::as_radians;
    use std::f64::consts::PI;

    #[test]
    fn test_symmetric_limits_in_degrees() {
        let limits = Constraints::new(
            as_radians([-169, -65, -151, -102, -167]),
            as_radians([169, 90, 146, 102, 167]),
        );
        assert!(limits.compliant(&as_radians([120, 45, -100, -90, 160])));
        assert!(limits.compliant(&as_radians([-169, 90, 146, 102, -167])));
        assert!(!limits.compliant(&as_radians([175, 0, 0, 0, 0])));
        assert!(!limits.compliant(&as_radians([0, 0, 0, 0, -168])));
    }

    #[test]
    fn test_dead_sector_wraps_through_zero() {
        // Joint 1 free except for a sector behind the arm; the allowed
        // range runs from 225° up through 0 to 135°.
        let mut from = [0.0; DOF];
        let mut to = [0.0; DOF];
        from[0] = 1.25 * PI;
        to[0] = 0.75 * PI;
        let limits = Constraints::new(from, to);

        assert!(limits.compliant(&[0.0; DOF]));
        assert!(limits.compliant(&[-0.5 * PI, 0.0, 0.0, 0.0, 0.0]));
        assert!(!limits.compliant(&[PI, 0.0, 0.0, 0.0, 0.0]));
        assert!(!limits.compliant(&[0.8 * PI, 0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_angles_beyond_full_turn_are_folded() {
        let limits = Constraints::new([-1.0; DOF], [1.0; DOF]);
        assert!(limits.compliant(&[TAU + 0.5, -TAU - 0.5, 0.0, 0.5, -0.5]));
        assert!(!limits.compliant(&[TAU + 1.5, 0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_coincident_bounds_mean_unconstrained_joint() {
        let mut from = [-2.0; DOF];
        let mut to = [2.0; DOF];
        from[2] = 1.0;
        to[2] = 1.0;
        let limits = Constraints::new(from, to);
        assert!(limits.compliant(&[0.0, 0.0, 42.0, 0.0, 0.0]));
        assert!(!limits.compliant(&[0.0, 2.5, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_unconstrained_accepts_everything() {
        let limits = Constraints::unconstrained();
        assert!(limits.compliant(&[-7.0, 3.5, 100.0, -0.0001, TAU]));
    }

    #[test]
    fn test_negative_limits_wrap() {
        // Symmetric limits given as negative/positive radians.
        let limits = Constraints::new([-1.0; DOF], [1.0; DOF]);
        assert!(limits.compliant(&[0.0, 0.5, -0.5, 0.99, -0.99]));
        assert!(!limits.compliant(&[0.0, 0.0, 1.5, 0.0, 0.0]));
    }
}
