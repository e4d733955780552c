//! Hardcoded chain parameters for sample robots

pub mod poe_kinematics {
    use crate::parameters::poe_kinematics::ChainParameters;
    use nalgebra::{Matrix4, Vector6};
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Names accepted by [`ChainParameters::builtin`].
    pub const BUILTIN_CHAINS: [&str; 3] = ["textbook", "ur5", "script"];

    #[allow(dead_code)]
    impl ChainParameters {
        /// Built-in chain by name, see [`BUILTIN_CHAINS`].
        pub fn builtin(name: &str) -> Option<Self> {
            match name {
                "textbook" => Some(Self::textbook_rpr()),
                "ur5" => Some(Self::ur5()),
                "script" => Some(Self::six_axis_script()),
                _ => None,
            }
        }

        /// Spatial open chain with revolute, prismatic and screw joints (3 joints). Space and
        /// body axes are consistent, and at the stored joint values the end effector is at
        /// `[[0, 1, 0, -5], [1, 0, 0, 4], [0, 0, -1, 1.68584073], [0, 0, 0, 1]]`.
        pub fn textbook_rpr() -> Self {
            ChainParameters {
                home: Matrix4::new(
                    -1.0, 0.0, 0.0, 0.0,
                    0.0, 1.0, 0.0, 6.0,
                    0.0, 0.0, -1.0, 2.0,
                    0.0, 0.0, 0.0, 1.0,
                ),
                space_screws: vec![
                    Vector6::new(0.0, 0.0, 1.0, 4.0, 0.0, 0.0),
                    Vector6::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0),
                    Vector6::new(0.0, 0.0, -1.0, -6.0, 0.0, -0.1),
                ],
                body_screws: vec![
                    Vector6::new(0.0, 0.0, -1.0, 2.0, 0.0, 0.0),
                    Vector6::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0),
                    Vector6::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.1),
                ],
                joints: vec![FRAC_PI_2, 3.0, PI],
                tolerance: 1e-6,
            }
        }

        /// Universal Robots UR5 (6 revolute joints), meters. Body axes derived from the space axes.
        /// Joints are set to J2 = -90°, J5 = 90°, where the flange is at (0.095, 0.109, 0.988).
        pub fn ur5() -> Self {
            let (w1, w2, l1, l2, h1, h2) = (0.109, 0.082, 0.425, 0.392, 0.089, 0.095);
            ChainParameters::from_space_screws(
                Matrix4::new(
                    -1.0, 0.0, 0.0, l1 + l2,
                    0.0, 0.0, 1.0, w1 + w2,
                    0.0, 1.0, 0.0, h1 - h2,
                    0.0, 0.0, 0.0, 1.0,
                ),
                vec![
                    Vector6::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0),
                    Vector6::new(0.0, 1.0, 0.0, -h1, 0.0, 0.0),
                    Vector6::new(0.0, 1.0, 0.0, -h1, 0.0, l1),
                    Vector6::new(0.0, 1.0, 0.0, -h1, 0.0, l1 + l2),
                    Vector6::new(0.0, 0.0, -1.0, -w1, l1 + l2, 0.0),
                    Vector6::new(0.0, 1.0, 0.0, h2 - h1, 0.0, l1 + l2),
                ],
                vec![0.0, -FRAC_PI_2, 0.0, 0.0, FRAC_PI_2, 0.0],
            )
        }

        /// Six axis arm as hand-written in an earlier forward kinematics script. The numbers are
        /// kept as they were: the first axis is the zero twist and several angular parts are not
        /// unit vectors, so this chain is rejected by forward kinematics. The body axes were not
        /// derived from the space axes either.
        pub fn six_axis_script() -> Self {
            ChainParameters {
                home: Matrix4::new(
                    1.0, 0.0, 0.0, 3.73205,
                    0.0, 1.0, 0.0, 0.0,
                    0.0, 0.0, 1.0, 2.73205,
                    0.0, 0.0, 0.0, 1.0,
                ),
                space_screws: vec![
                    Vector6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                    Vector6::new(0.0, 1.0, 1.0, 1.0, 0.0, 0.0),
                    Vector6::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
                    Vector6::new(0.0, 0.0, 1.0, -0.73, 0.0, 0.0),
                    Vector6::new(-1.0, 0.0, 0.0, 0.0, 0.0, -3.73),
                    Vector6::new(0.0, 1.0, 2.73, 3.73, 1.0, 0.0),
                ],
                body_screws: vec![
                    Vector6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                    Vector6::new(0.0, 1.0, 1.0, 1.0, 0.0, 0.0),
                    Vector6::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
                    Vector6::new(0.0, 2.73, 3.73, 2.0, 0.0, 0.0),
                    Vector6::new(2.73, 0.0, 0.0, 0.0, 0.0, 0.0),
                    Vector6::new(0.0, -2.73, -1.0, 0.0, 1.0, 0.0),
                ],
                joints: vec![-PI / 2.0, PI / 2.0, PI / 3.0, -PI / 4.0, 1.0, PI / 6.0],
                tolerance: 0.01,
            }
        }
    }
}
