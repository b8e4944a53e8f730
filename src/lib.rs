//! Rust implementation of forward and inverse kinematic solutions for
//! 5-axis serial manipulators described by classic Denavit-Hartenberg
//! parameters, such as the arm of the KUKA youBot.
//!
//! Forward kinematics is the chain product of the per-link DH transforms.
//! Inverse kinematics has no closed form for an arbitrary pose; the solver
//! first attempts a geometric solution (valid for the decoupled base yaw /
//! planar arm / tool roll layout) and polishes or replaces it with a
//! deterministic iterative refinement driven by the forward chain and the
//! pose error metrics.
//!
//! # Features
//!
//! - Returned solutions are complete and cross-checked with forward
//!   kinematics; on failure a typed error is returned instead of a partial
//!   result.
//! - Joint angles are checked against limits, ensuring only compliant
//!   solutions are returned.
//! - The iteration budget, tolerances, and initial guess of the numeric
//!   solver are configuration, not constants, so an arm can be retuned
//!   without touching the algorithm.
//! - The whole solver is a pure function of its inputs and the immutable
//!   arm description: no shared state, no randomness, safe to call from
//!   multiple threads.
//! - Gimbal-locked tool orientations are resolved deterministically in the
//!   roll/pitch/yaw conversion and can be diagnosed separately.
//! - Arm descriptions (DH table, joint limits, solver tuning) can be read
//!   from YAML files (feature `allow_filesystem`, on by default).
//!
//! # Parameters
//!
//! Each joint carries the classic DH tuple (theta offset, d, alpha, r).
//! Fill out a `parameters::dh_kinematics::Parameters` structure, or start
//! from the bundled `Parameters::youbot()` preset.

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod dh;
pub mod pose;

pub mod constraints;

#[cfg(test)]
mod tests;
