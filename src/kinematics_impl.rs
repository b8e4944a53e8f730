//! Implements the `Kinematics` trait for arms described by a DH table:
//! forward kinematics as the chain product of the per-link transforms, and
//! inverse kinematics as a geometric attempt polished (or replaced) by a
//! deterministic local search.

use crate::constraints::Constraints;
use crate::dh::LinkParameters;
use crate::kinematic_traits::{DOF, Joints, Kinematics, Singularity};
use crate::kinematics_error::KinematicsError;
use crate::parameters::dh_kinematics::{Parameters, SolverConfig};
use crate::pose::{Pose, gimbal_locked};
use crate::utils::is_valid;
use nalgebra::{Isometry3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

/// How much the tool axis may leave the base-joint plane before the
/// geometric solution declares itself not applicable.
const IN_PLANE_EPSILON: f64 = 1e-6;

/// Rounding slack on the elbow cosine before a target counts as outside
/// the planar reach.
const COSINE_DOMAIN_EPSILON: f64 = 1e-9;

/// Slack when checking the twist angles of the DH table against the
/// decoupled layout the geometric solution requires.
const LAYOUT_EPSILON: f64 = 1e-12;

pub struct DHKinematics {
    parameters: Parameters,
    constraints: Constraints,
    config: SolverConfig,
}

impl DHKinematics {
    /// Creates a new `DHKinematics` instance with the given parameters,
    /// no joint limits and default solver tuning.
    pub fn new(parameters: Parameters) -> Self {
        Self::new_with_constraints(parameters, Constraints::unconstrained())
    }

    /// Creates a new `DHKinematics` instance with the given parameters and
    /// joint limits. Only limit-compliant solutions are returned.
    pub fn new_with_constraints(parameters: Parameters, constraints: Constraints) -> Self {
        Self::new_with_config(parameters, constraints, SolverConfig::default())
    }

    /// Full constructor, also taking the solver tuning.
    pub fn new_with_config(
        parameters: Parameters,
        constraints: Constraints,
        config: SolverConfig,
    ) -> Self {
        DHKinematics {
            parameters,
            constraints,
            config,
        }
    }

    /// Base-to-TCP transform: the product of all per-link transforms in
    /// chain order.
    fn chain(&self, qs: &Joints) -> Isometry3<f64> {
        let mut m = Matrix4::identity();
        for (link, &q) in self.parameters.links.iter().zip(qs.iter()) {
            m *= link.transform(q);
        }
        isometry_from_matrix(&m)
    }

    /// Position and orientation error of the configuration against the
    /// target, as the pair the convergence check needs.
    fn errors(&self, target: &Pose, qs: &Joints) -> (f64, f64) {
        let reached = Pose::from_isometry(&self.chain(qs));
        (target.distance_to(&reached), target.angular_error_to(&reached))
    }

    fn cost(&self, position_error: f64, orientation_error: f64) -> f64 {
        position_error + self.config.orientation_weight * orientation_error
    }

    /// Closed-form candidate for the decoupled layout (base yaw, planar
    /// 2R arm, pitch closing joint, tool roll): back the tool offset off
    /// along the tool axis to find the wrist center, take the base angle
    /// from it, solve the planar triangle for the two arm joints, close
    /// the pitch sum with joint 4 and read the remaining roll off joint 5.
    ///
    /// The base can face the wrist center directly or reach it folded back
    /// across the base axis (base rotated by π, negative planar reach), so
    /// both base branches and both elbow branches are tried in a fixed
    /// order; the first limit-compliant candidate wins.
    ///
    /// Returns `None` when the DH table does not have this layout, when
    /// the tool axis leaves the base-joint plane, when the wrist center is
    /// outside the planar reach, or when no branch passes the joint
    /// limits. The numeric search then starts from the configured initial
    /// guess instead.
    fn geometric(&self, target: &Pose) -> Option<Joints> {
        let links = &self.parameters.links;
        if !layout_is_decoupled(links) {
            return None;
        }
        let d1 = links[0].d;
        let a1 = links[0].r;
        let l2 = links[1].r;
        let l3 = links[2].r;
        let d5 = links[4].d;

        let rotation = target.rotation();
        let tool_axis = rotation * Vector3::z();
        let wrist = target.position() - d5 * tool_axis;

        // Base angle facing the wrist center; atan2(0, 0) = 0 keeps the
        // degenerate "wrist on the base axis" case deterministic.
        let theta1_facing = f64::atan2(wrist.y, wrist.x);

        for theta1 in [theta1_facing, normalize_angle(theta1_facing + PI)] {
            let (s1, c1) = theta1.sin_cos();

            let lateral = -s1 * tool_axis.x + c1 * tool_axis.y;
            if lateral.abs() > IN_PLANE_EPSILON {
                continue;
            }
            // Total pitch of joints 2..4, measured from the straight-down
            // tool.
            let pitch_sum = f64::atan2(c1 * tool_axis.x + s1 * tool_axis.y, -tool_axis.z);

            // Planar coordinates of the wrist center relative to joint 2;
            // u is negative on the folded-back base branch.
            let u = c1 * wrist.x + s1 * wrist.y - a1;
            let v = wrist.z - d1;

            let mut elbow_cosine = (u * u + v * v - l2 * l2 - l3 * l3) / (2.0 * l2 * l3);
            if elbow_cosine.abs() > 1.0 + COSINE_DOMAIN_EPSILON {
                continue;
            }
            elbow_cosine = elbow_cosine.clamp(-1.0, 1.0);
            let elbow = elbow_cosine.acos();

            let q1 = normalize_angle(theta1 - links[0].theta);
            for theta3 in [-elbow, elbow] {
                let theta2 =
                    f64::atan2(v, u) - f64::atan2(l3 * theta3.sin(), l2 + l3 * theta3.cos());
                let theta4 = pitch_sum - theta2 - theta3;

                let mut qs = [
                    q1,
                    normalize_angle(theta2 - links[1].theta),
                    normalize_angle(theta3 - links[2].theta),
                    normalize_angle(theta4 - links[3].theta),
                    0.0,
                ];

                // Whatever rotation the first four joints leave over is a
                // pure roll about the tool axis; joint 5 absorbs it.
                let mut m = Matrix4::identity();
                for i in 0..4 {
                    m *= links[i].transform(qs[i]);
                }
                let r04 =
                    Rotation3::from_matrix_unchecked(m.fixed_view::<3, 3>(0, 0).into_owned());
                let residual = r04.inverse() * rotation;
                let theta5 = f64::atan2(residual.matrix()[(1, 0)], residual.matrix()[(0, 0)]);
                qs[4] = normalize_angle(theta5 - links[4].theta);

                if self.constraints.compliant(&qs) {
                    return Some(qs);
                }
            }
        }
        None
    }

    /// Deterministic cyclic coordinate descent around the seed. Each pass
    /// lets every joint try a step in both directions, keeping
    /// limit-compliant moves that reduce the combined cost; when no joint
    /// improves, the step halves. Terminates on convergence, on the
    /// iteration budget, or once the step shrinks below the configured
    /// minimum. On failure the residual errors of the best configuration
    /// are handed back for diagnostics.
    fn refine(&self, target: &Pose, seed: &Joints) -> Result<Joints, (f64, f64)> {
        let mut qs = *seed;
        let mut step = self.config.initial_step;
        let (mut position_error, mut orientation_error) = self.errors(target, &qs);
        let mut cost = self.cost(position_error, orientation_error);

        for _ in 0..self.config.max_iterations {
            if self.converged(position_error, orientation_error) {
                return Ok(qs);
            }
            let mut improved = false;
            for joint in 0..DOF {
                for direction in [step, -step] {
                    let mut candidate = qs;
                    candidate[joint] = normalize_angle(candidate[joint] + direction);
                    if !self.constraints.compliant(&candidate) {
                        continue;
                    }
                    let (p, o) = self.errors(target, &candidate);
                    let c = self.cost(p, o);
                    if c < cost {
                        qs = candidate;
                        position_error = p;
                        orientation_error = o;
                        cost = c;
                        improved = true;
                        break;
                    }
                }
            }
            if !improved {
                step *= 0.5;
                if step < self.config.minimal_step {
                    break;
                }
            }
        }
        if self.converged(position_error, orientation_error) {
            Ok(qs)
        } else {
            Err((position_error, orientation_error))
        }
    }

    fn converged(&self, position_error: f64, orientation_error: f64) -> bool {
        position_error <= self.config.position_tolerance
            && orientation_error <= self.config.orientation_tolerance
    }
}

impl Kinematics for DHKinematics {
    fn forward(&self, angles: &[f64]) -> Result<Pose, KinematicsError> {
        if angles.len() != DOF {
            return Err(KinematicsError::InputShape {
                expected: DOF,
                found: angles.len(),
            });
        }
        let qs: Joints = std::array::from_fn(|i| angles[i]);
        Ok(Pose::from_isometry(&self.chain(&qs)))
    }

    fn inverse(&self, target: &Pose) -> Result<Joints, KinematicsError> {
        if !target.is_finite() {
            return Err(KinematicsError::MalformedPose(format!(
                "non-finite component in {:?}",
                target
            )));
        }

        let mut seeds: Vec<Joints> = Vec::with_capacity(2);
        if let Some(candidate) = self.geometric(target) {
            seeds.push(candidate);
        }
        seeds.push(self.config.initial_guess);
        // A degenerate arm description can leak NaN into the closed-form
        // candidate; such a seed can never improve and is dropped.
        seeds.retain(|seed| is_valid(seed));

        let mut best = (f64::INFINITY, f64::INFINITY);
        for seed in &seeds {
            match self.refine(target, seed) {
                Ok(qs) => return Ok(qs),
                Err((p, o)) => {
                    if self.cost(p, o) < self.cost(best.0, best.1) {
                        best = (p, o);
                    }
                }
            }
        }
        Err(KinematicsError::UnreachablePose {
            position_error: best.0,
            orientation_error: best.1,
        })
    }

    fn kinematic_singularity(&self, qs: &Joints) -> Option<Singularity> {
        let rotation = self.chain(qs).rotation.to_rotation_matrix();
        if gimbal_locked(&rotation) {
            Some(Singularity::Gimbal)
        } else {
            None
        }
    }
}

/// The geometric solution only holds for the youBot-like table: vertical
/// base joint (90° twist), two in-plane links, a 90° twist before the tool
/// roll joint, and all intermediate offsets zero.
fn layout_is_decoupled(links: &[LinkParameters; DOF]) -> bool {
    (links[0].alpha - FRAC_PI_2).abs() < LAYOUT_EPSILON
        && links[1].alpha == 0.0
        && links[2].alpha == 0.0
        && (links[3].alpha - FRAC_PI_2).abs() < LAYOUT_EPSILON
        && links[1].d == 0.0
        && links[2].d == 0.0
        && links[3].d == 0.0
        && links[3].r == 0.0
        && links[4].r == 0.0
        && links[1].r > 0.0
        && links[2].r > 0.0
}

/// Maps an angle to (-π, π].
fn normalize_angle(a: f64) -> f64 {
    let x = a.rem_euclid(2.0 * PI);
    if x > PI { x - 2.0 * PI } else { x }
}

fn isometry_from_matrix(m: &Matrix4<f64>) -> Isometry3<f64> {
    let rotation = Rotation3::from_matrix_unchecked(m.fixed_view::<3, 3>(0, 0).into_owned());
    let translation = Translation3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
    Isometry3::from_parts(translation, UnitQuaternion::from_rotation_matrix(&rotation))
}
