//! Defines the chain parameter data structure

pub mod poe_kinematics {
    use crate::frame::body_screws_from_space;
    use crate::kinematic_traits::{Screws, Transform, Twist};
    use crate::kinematics_impl::{BodyChain, SpaceChain};
    use crate::utils::deg;

    /// Tolerance of the space / body cross-check if not specified otherwise.
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Parameters of a serial chain for product of exponentials kinematics, together with
    /// the joint values to evaluate. See [parameters_robots.rs](parameters_robots.rs) for
    /// concrete chains.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChainParameters {
        /// Pose of the end effector when all joints are at zero (M).
        pub home: Transform,

        /// Screw axes of the joints in the space (fixed) frame.
        pub space_screws: Screws,

        /// Screw axes of the joints in the body (end effector) frame. Expected to be
        /// `Ad(M⁻¹)` of the space screws, but this is not checked.
        pub body_screws: Screws,

        /// Joint values, one per screw axis. Radians for revolute joints.
        pub joints: Vec<f64>,

        /// Absolute element-wise tolerance for comparing the space and body results.
        pub tolerance: f64,
    }

    impl ChainParameters {
        /// Creates parameters with body screw axes derived from the space ones.
        pub fn from_space_screws(home: Transform, space_screws: Screws, joints: Vec<f64>) -> Self {
            let body_screws = body_screws_from_space(&home, &space_screws);
            ChainParameters { home, space_screws, body_screws, joints, tolerance: DEFAULT_TOLERANCE }
        }

        /// Number of joints, as given by the space frame screw axes.
        pub fn dof(&self) -> usize {
            self.space_screws.len()
        }

        /// Replaces the body screw axes by the ones derived from the space frame axes.
        /// Useful when the given body axes are not trusted.
        pub fn with_derived_body_screws(mut self) -> Self {
            self.body_screws = body_screws_from_space(&self.home, &self.space_screws);
            self
        }

        pub fn space_chain(&self) -> SpaceChain {
            SpaceChain::new(self.home, self.space_screws.clone())
        }

        pub fn body_chain(&self) -> BodyChain {
            BodyChain::new(self.home, self.body_screws.clone())
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            fn row(values: &[f64]) -> String {
                format!("  - [{}]\n", values.iter().map(|x| x.to_string())
                    .collect::<Vec<_>>().join(", "))
            }
            fn screws(twists: &[Twist]) -> String {
                twists.iter().map(|t| row(t.as_slice())).collect()
            }

            let home: String = (0..4)
                .map(|r| row(&[self.home[(r, 0)], self.home[(r, 1)], self.home[(r, 2)], self.home[(r, 3)]]))
                .collect();

            format!(
                "home:\n{}\
                space_screws:\n{}\
                body_screws:\n{}\
                joints: [{}]\n\
                tolerance: {}\n",
                home,
                screws(&self.space_screws),
                screws(&self.body_screws),
                self.joints.iter().map(|x| deg(x))
                    .collect::<Vec<_>>().join(", "),
                self.tolerance
            )
        }
    }
}
