#[cfg(test)]
mod tests {
    use crate::cross_check::cross_check;
    use crate::parameter_error::ParameterError;
    use crate::parameters::poe_kinematics::{ChainParameters, DEFAULT_TOLERANCE};
    use crate::tests::test_utils::max_abs_diff;

    const READ_ERROR: &'static str = "Failed to load parameters from file";

    fn assert_same_chain(loaded: &ChainParameters, expected: &ChainParameters, joint_tolerance: f64) {
        assert_eq!(loaded.home, expected.home);
        assert_eq!(loaded.space_screws, expected.space_screws);
        assert_eq!(loaded.joints.len(), expected.joints.len());
        for (a, b) in loaded.joints.iter().zip(&expected.joints) {
            assert!((a - b).abs() <= joint_tolerance, "Joint {} but expected {}", a, b);
        }
    }

    #[test]
    fn test_parameters_from_yaml() {
        let filename = "src/tests/data/chains/textbook.yaml";
        let loaded = ChainParameters::from_yaml_file(filename).expect(READ_ERROR);
        let expected = ChainParameters::textbook_rpr();

        assert_same_chain(&loaded, &expected, 1e-12);
        assert_eq!(loaded.body_screws, expected.body_screws);
        assert_eq!(loaded.tolerance, 1e-6);
        assert!(cross_check(&loaded).unwrap().comparison.matches);
    }

    #[test]
    fn test_parameters_from_yaml_derived_body_screws() {
        let filename = "src/tests/data/chains/textbook_derived.yaml";
        let loaded = ChainParameters::from_yaml_file(filename).expect(READ_ERROR);
        let expected = ChainParameters::textbook_rpr();

        assert_same_chain(&loaded, &expected, 1e-12);
        for (derived, given) in loaded.body_screws.iter().zip(&expected.body_screws) {
            assert!((derived - given).norm() < 1e-12);
        }
        assert_eq!(loaded.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_parameters_from_yaml_script_chain() {
        let filename = "src/tests/data/chains/script.yaml";
        let loaded = ChainParameters::from_yaml_file(filename).expect(READ_ERROR);
        let expected = ChainParameters::six_axis_script();

        assert_same_chain(&loaded, &expected, 1e-12);
        assert_eq!(loaded.body_screws, expected.body_screws);
        assert!(cross_check(&loaded).is_err());
    }

    #[test]
    fn test_to_yaml_can_be_read_back() {
        let original = ChainParameters::ur5();
        let yaml = original.to_yaml();
        let loaded = ChainParameters::from_yaml_str(&yaml).expect(READ_ERROR);

        // Joints are written as deg() with 4 decimals
        assert_same_chain(&loaded, &original, 1e-5);
        assert_eq!(loaded.body_screws, original.body_screws);
        assert_eq!(loaded.tolerance, original.tolerance);

        let a = cross_check(&original).unwrap();
        let b = cross_check(&loaded).unwrap();
        assert!(max_abs_diff(&a.space, &b.space) < 1e-4);
    }

    #[test]
    fn test_parameters_from_yaml_missing_home() {
        let yaml = "space_screws:\n  - [0, 0, 1, 0, 0, 0]\njoints: [0]\n";
        let err = ChainParameters::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ParameterError::MissingField(ref field) if field == "home"), "{err}");
    }

    #[test]
    fn test_parameters_from_yaml_rejects_short_screw() {
        let yaml = "home:\n  - [1, 0, 0, 0]\n  - [0, 1, 0, 0]\n  - [0, 0, 1, 0]\n  - [0, 0, 0, 1]\n\
                    space_screws:\n  - [0, 0, 1, 0, 0, 0]\n  - [0, 0, 1, 0, 0]\n\
                    joints: [0, 0]\n";
        let err = ChainParameters::from_yaml_str(yaml).unwrap_err();
        match err {
            ParameterError::InvalidLength { field, expected, found } => {
                assert_eq!(field, "space_screws[1]");
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("Expected InvalidLength, got {}", other),
        }
    }

    #[test]
    fn test_parameters_from_yaml_rejects_bad_home() {
        let yaml = "home:\n  - [1, 0, 0, 0]\n  - [0, 1, 0, 0]\n  - [0, 0, 0, 1]\n\
                    space_screws:\n  - [0, 0, 1, 0, 0, 0]\n\
                    joints: [0]\n";
        let err = ChainParameters::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ParameterError::InvalidLength { expected: 4, found: 3, .. }), "{err}");
    }

    #[test]
    fn test_parameters_from_yaml_rejects_bad_angle() {
        let yaml = "home:\n  - [1, 0, 0, 0]\n  - [0, 1, 0, 0]\n  - [0, 0, 1, 0]\n  - [0, 0, 0, 1]\n\
                    space_screws:\n  - [0, 0, 1, 0, 0, 0]\n\
                    joints: [deg(ninety)]\n";
        let err = ChainParameters::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ParameterError::WrongAngle(_)), "{err}");
    }

    #[test]
    fn test_parameters_from_yaml_rejects_negative_tolerance() {
        let yaml = "home:\n  - [1, 0, 0, 0]\n  - [0, 1, 0, 0]\n  - [0, 0, 1, 0]\n  - [0, 0, 0, 1]\n\
                    space_screws:\n  - [0, 0, 1, 0, 0, 0]\n\
                    joints: [0.5]\n\
                    tolerance: -0.5\n";
        let err = ChainParameters::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("tolerance must be non-negative"), "{err}");
    }

    #[test]
    fn test_parameters_from_missing_file() {
        let err = ChainParameters::from_yaml_file("src/tests/data/chains/does_not_exist.yaml").unwrap_err();
        assert!(matches!(err, ParameterError::IoError(_)), "{err}");
    }
}
