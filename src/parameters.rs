//! Defines the arm parameter and solver configuration data structures

pub mod dh_kinematics {
    use crate::dh::LinkParameters;
    use crate::kinematic_traits::{Joints, DOF, JOINTS_AT_ZERO};
    use crate::utils::deg;

    /// Geometric description of the arm: one DH tuple per joint, ordered
    /// from the base to the tool center point. Immutable configuration;
    /// see [parameters_robots.rs](parameters_robots.rs) for concrete arms.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        pub links: [LinkParameters; DOF],
    }

    impl Parameters {
        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            let mut out = String::from("dh_parameters:\n");
            for link in &self.links {
                out.push_str(&format!(
                    "  - {{ theta: {}, d: {}, alpha: {}, r: {} }}\n",
                    deg(&link.theta),
                    link.d,
                    deg(&link.alpha),
                    link.r
                ));
            }
            out
        }
    }

    /// Tuning of the numeric inverse solver. All the values the search
    /// depends on live here so an arm can be retuned without touching the
    /// algorithm.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SolverConfig {
        /// Hard ceiling on refinement iterations; guarantees termination.
        pub max_iterations: usize,

        /// Convergence threshold on the position error, meters.
        pub position_tolerance: f64,

        /// Convergence threshold on the angle-wise orientation error,
        /// radians.
        pub orientation_tolerance: f64,

        /// First perturbation size of the local search, radians.
        pub initial_step: f64,

        /// The search gives up once the shrinking step falls below this.
        pub minimal_step: f64,

        /// Weight of the orientation error in the combined cost. Position
        /// is in meters and orientation in radians, so this also bridges
        /// the unit gap.
        pub orientation_weight: f64,

        /// Where the search starts when no geometric candidate applies.
        pub initial_guess: Joints,
    }

    impl Default for SolverConfig {
        fn default() -> Self {
            SolverConfig {
                max_iterations: 500,
                position_tolerance: 1e-4,
                orientation_tolerance: 1e-3,
                initial_step: 0.1,
                minimal_step: 1e-7,
                orientation_weight: 0.5,
                initial_guess: JOINTS_AT_ZERO,
            }
        }
    }
}
