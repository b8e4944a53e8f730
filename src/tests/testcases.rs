#[cfg(test)]
mod tests {
    use crate::constraints::Constraints;
    use crate::kinematic_traits::{DOF, JOINTS_AT_ZERO, Joints, Kinematics};
    use crate::kinematics_error::KinematicsError;
    use crate::kinematics_impl::DHKinematics;
    use crate::parameters::dh_kinematics::Parameters;
    use crate::pose::Pose;
    use crate::tests::test_utils;
    use std::f64::consts::PI;

    fn youbot() -> DHKinematics {
        DHKinematics::new_with_constraints(Parameters::youbot(), Constraints::youbot())
    }

    #[test]
    fn test_home_pose() {
        let robot = youbot();
        let home = robot.forward(&JOINTS_AT_ZERO).expect("forward failed");

        // Documented home pose of the youBot preset: arm stretched along
        // the base x-axis, tool pointing straight down.
        assert!((home.x - 0.323).abs() < 1e-9);
        assert!(home.y.abs() < 1e-9);
        assert!((home.z - (-0.071)).abs() < 1e-9);
        assert!((home.roll - PI).abs() < 1e-9);
        assert!(home.pitch.abs() < 1e-9);
        assert!(home.yaw.abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_limits() {
        let robot = youbot();
        let cases: [Joints; 5] = [
            [0.0, 0.2, -0.3, 0.1, 0.0],
            [0.5, 0.3, -0.6, 0.4, 0.8],
            [-1.2, 0.8, -1.0, 0.5, -0.4],
            [2.0, -0.5, 1.2, -1.0, 1.5],
            [0.1, 1.0, -2.0, 1.0, 2.5],
        ];

        for joints in &cases {
            let pose = robot.forward(joints).expect("forward failed");
            let solution = robot
                .inverse(&pose)
                .unwrap_or_else(|e| panic!("inverse failed for {:?}: {}", joints, e));

            // The recovered joints need not equal the original (solutions
            // are not unique); their forward pose must match.
            let reached = robot.forward(&solution).expect("forward failed");
            assert!(
                test_utils::are_poses_close(&pose, &reached, 2e-4, 2e-3),
                "round trip diverged for {:?}: got {:?}",
                joints,
                solution
            );
        }
    }

    #[test]
    fn test_round_trip_near_joint_limits() {
        let robot = youbot();
        let limits = Constraints::youbot();
        // Close to the limits the elbow folds the wrist center back across
        // the base axis; these configurations are compliant and their poses
        // must round trip like any other.
        let cases: [Joints; 2] = [
            [2.9, -1.1, -2.6, 1.7, 0.0],
            [-2.9, 1.5, 2.5, -1.7, -2.9],
        ];

        for joints in &cases {
            assert!(limits.compliant(joints));
            let pose = robot.forward(joints).expect("forward failed");
            let solution = robot
                .inverse(&pose)
                .unwrap_or_else(|e| panic!("inverse failed for {:?}: {}", joints, e));
            assert!(limits.compliant(&solution));

            let reached = robot.forward(&solution).expect("forward failed");
            assert!(
                test_utils::are_poses_close(&pose, &reached, 2e-4, 2e-3),
                "round trip diverged for {:?}: got {:?}",
                joints,
                solution
            );
        }
    }

    #[test]
    fn test_inverse_respects_joint_limits() {
        let robot = youbot();
        let limits = Constraints::youbot();
        let pose = robot
            .forward(&[0.4, 0.5, -0.8, 0.3, 0.2])
            .expect("forward failed");
        let solution = robot.inverse(&pose).expect("inverse failed");
        assert!(limits.compliant(&solution));
    }

    #[test]
    fn test_shape_validation() {
        let robot = youbot();
        let too_short = robot.forward(&[0.0; 4]);
        assert_eq!(
            too_short,
            Err(KinematicsError::InputShape {
                expected: DOF,
                found: 4
            })
        );
        let too_long = robot.forward(&[0.0; 6]);
        assert_eq!(
            too_long,
            Err(KinematicsError::InputShape {
                expected: DOF,
                found: 6
            })
        );
    }

    #[test]
    fn test_unreachable_target_fails_within_budget() {
        let robot = youbot();
        // Far beyond the summed link lengths; must fail, never report a
        // bogus success.
        let target = Pose::new(2.0, 0.0, 0.0, PI, 0.0, 0.0);
        match robot.inverse(&target) {
            Err(KinematicsError::UnreachablePose { position_error, .. }) => {
                assert!(position_error > 1.0);
            }
            other => panic!("expected UnreachablePose, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_target_is_rejected() {
        let robot = youbot();
        let target = Pose::new(f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            robot.inverse(&target),
            Err(KinematicsError::MalformedPose(_))
        ));
    }

    #[test]
    fn test_inverse_is_deterministic() {
        let robot = youbot();
        let pose = robot
            .forward(&[0.5, 0.3, -0.6, 0.4, 0.8])
            .expect("forward failed");
        let first = robot.inverse(&pose).expect("inverse failed");
        let second = robot.inverse(&pose).expect("inverse failed");
        assert_eq!(first, second);

        let unreachable = Pose::new(2.0, 0.0, 0.0, PI, 0.0, 0.0);
        assert_eq!(robot.inverse(&unreachable), robot.inverse(&unreachable));
    }

    #[test]
    fn test_forward_is_total_for_extreme_angles() {
        let robot = DHKinematics::new(Parameters::youbot());
        let pose = robot
            .forward(&[100.0, -50.0, 25.0, -12.5, 6.25])
            .expect("forward must succeed for any finite angles");
        assert!(pose.is_finite());
    }
}
