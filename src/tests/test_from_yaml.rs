#[cfg(test)]
mod tests {
    use crate::constraints::Constraints;
    use crate::parameter_error::ParameterError;
    use crate::parameters::dh_kinematics::Parameters;
    use crate::parameters_from_file::RobotDescription;

    #[test]
    fn test_load_youbot_description() {
        let filename = "src/tests/data/youbot.yaml";
        let description = RobotDescription::from_yaml_file(filename)
            .unwrap_or_else(|e| panic!("failed to load {}: {}", filename, e));

        assert_eq!(description.parameters, Parameters::youbot());
        assert_eq!(description.solver.max_iterations, 500);
        assert_eq!(description.solver.position_tolerance, 1e-4);
        assert_eq!(description.solver.orientation_tolerance, 1e-3);

        // Limits must behave like the bundled preset.
        let preset = Constraints::youbot();
        for qs in [
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.6, 0.0, 0.0, 0.0],
            [2.9, -1.0, 2.5, 1.7, -2.9],
            [3.0, 0.0, 0.0, 0.0, 0.0],
        ] {
            assert_eq!(description.constraints.compliant(&qs), preset.compliant(&qs));
        }
        assert!(description.constraints.compliant(&[0.0; 5]));
        assert!(!description.constraints.compliant(&[0.0, 1.6, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_missing_dh_parameters() {
        let result = RobotDescription::from_yaml("joint_limits:\n  from: [0,0,0,0,0]\n  to: [1,1,1,1,1]\n");
        assert!(matches!(result, Err(ParameterError::MissingField(_))));
    }

    #[test]
    fn test_wrong_joint_count() {
        let yaml = "dh_parameters:\n  - { theta: 0.0, d: 0.0, alpha: 0.0, r: 0.1 }\n";
        match RobotDescription::from_yaml(yaml) {
            Err(ParameterError::InvalidLength { expected, found }) => {
                assert_eq!(expected, 5);
                assert_eq!(found, 1);
            }
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let yaml = "\
dh_parameters:
  - { theta: 0.0, d: 0.147, alpha: 1.5707963267948966, r: 0.033 }
  - { theta: 0.0, d: 0.0, alpha: 0.0, r: 0.155 }
  - { theta: 0.0, d: 0.0, alpha: 0.0, r: 0.135 }
  - { theta: 0.0, d: 0.0, alpha: 1.5707963267948966, r: 0.0 }
  - { theta: 0.0, d: 0.218, alpha: 0.0, r: 0.0 }
";
        let description = RobotDescription::from_yaml(yaml).expect("should parse");
        assert_eq!(description.parameters, Parameters::youbot());
        // Missing sections fall back to the defaults.
        assert!(description.constraints.compliant(&[3.0, 3.0, 3.0, 3.0, 3.0]));
        assert_eq!(
            description.solver,
            crate::parameters::dh_kinematics::SolverConfig::default()
        );
    }
}
