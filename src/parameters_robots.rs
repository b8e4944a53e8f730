//! Hardcoded DH parameters and joint limits for a few arms

pub mod dh_kinematics {
    use crate::constraints::Constraints;
    use crate::dh::LinkParameters;
    use crate::parameters::dh_kinematics::Parameters;
    use std::f64::consts::FRAC_PI_2;

    #[allow(dead_code)]
    impl Parameters {
        // Provides default values
        pub fn new() -> Self {
            Parameters {
                links: [LinkParameters::new(0.0, 0.0, 0.0, 0.0); 5],
            }
        }

        /// KUKA youBot arm, meters and radians. Axis layout: base yaw,
        /// three parallel pitch joints, tool roll.
        ///
        /// With all joints at zero the arm is stretched horizontally along
        /// the base x-axis with the tool pointing straight down; the home
        /// pose is `(0.323, 0, -0.071)` with roll = π, pitch = yaw = 0.
        pub fn youbot() -> Self {
            Parameters {
                links: [
                    LinkParameters::new(0.0, 0.147, FRAC_PI_2, 0.033),
                    LinkParameters::new(0.0, 0.0, 0.0, 0.155),
                    LinkParameters::new(0.0, 0.0, 0.0, 0.135),
                    LinkParameters::new(0.0, 0.0, FRAC_PI_2, 0.0),
                    LinkParameters::new(0.0, 0.218, 0.0, 0.0),
                ],
            }
        }
    }

    #[allow(dead_code)]
    impl Constraints {
        /// Joint limits of the KUKA youBot arm (radians, from the
        /// datasheet, slightly rounded inward).
        pub fn youbot() -> Self {
            Constraints::new(
                [-2.9496, -1.1345, -2.6354, -1.7890, -2.9234],
                [2.9496, 1.5708, 2.5482, 1.7890, 2.9234],
            )
        }
    }
}
