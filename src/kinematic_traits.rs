extern crate nalgebra as na;

use na::{Matrix4, Vector6};
use crate::kinematics_error::KinematicsError;

/// Screw axis, also called twist. Angular part comes first: `(ω1, ω2, ω3, v1, v2, v3)`.
/// ```
/// extern crate nalgebra as na;
/// use na::Vector6;
///
/// type Twist = Vector6<f64>;
///
/// // Revolute joint rotating about the z axis that passes through (1, 0, 0).
/// // The linear part is v = -ω × q.
/// let twist = Twist::new(0.0, 0.0, 1.0, 0.0, -1.0, 0.0);
/// ```
pub type Twist = Vector6<f64>;

/// Homogeneous transform `[[R, p], [0, 0, 0, 1]]` where R is a rotation and p is the translation.
pub type Transform = Matrix4<f64>;

/// Screw axes of the chain, one per joint, in joint order.
pub type Screws = Vec<Twist>;

/// Common interface of the space and body frame chains.
pub trait Kinematics {
    /// Pose of the end effector for the given joint values (radians for revolute joints,
    /// length units for prismatic ones). There must be one value per joint.
    fn forward(&self, joints: &[f64]) -> Result<Transform, KinematicsError>;

    /// Number of joints (screw axes) in the chain.
    fn dof(&self) -> usize;

    /// Pose of the end effector when all joints are at zero.
    fn home(&self) -> &Transform;
}
