//! Exponential map from se(3) twists to SE(3) homogeneous transforms.
//!
//! The closed form is only valid for a unit angular part, so the screw axis is validated
//! rather than normalized: a twist that is not a proper screw axis is an input error.

use nalgebra::{Matrix3, Vector3};

use crate::frame::homogeneous;
use crate::kinematic_traits::{Transform, Twist};
use crate::kinematics_error::KinematicsError;

/// Below this norm the angular (or linear) part of the twist is treated as zero.
pub const NEAR_ZERO: f64 = 1e-9;

/// How far the norm of a non-zero angular part may deviate from 1.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-9;

/// Skew-symmetric matrix `[ω]` of the vector, so that `[ω] x = ω × x`.
pub fn skew(w: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -w.z, w.y,
        w.z, 0.0, -w.x,
        -w.y, w.x, 0.0,
    )
}

/// Rotation by `theta` about the unit `axis` (Rodrigues formula):
/// `R = I + sin θ [ω] + (1 - cos θ) [ω]²`
pub fn exp_so3(axis: &Vector3<f64>, theta: f64) -> Matrix3<f64> {
    let w = skew(axis);
    let (s, c) = theta.sin_cos();
    Matrix3::identity() + w * s + w * w * (1.0 - c)
}

/// Transform produced by moving along the screw axis `twist` by `theta`.
///
/// If the angular part is zero, the motion is a pure translation by `theta · v`.
/// Otherwise the angular part must be a unit vector, and
/// `p = (I θ + (1 - cos θ) [ω] + (θ - sin θ) [ω]²) v`.
///
/// # Errors
///
/// * [`KinematicsError::UnnormalizedAxis`] if the angular part is neither zero nor unit length.
/// * [`KinematicsError::InvalidTwist`] for the zero twist with non-zero `theta`, or for
///   non-finite input.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use rs_poe_kinematics::exponential::exp_se3;
/// use rs_poe_kinematics::kinematic_traits::Twist;
///
/// let t = exp_se3(&Twist::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0), PI / 2.0).unwrap();
/// assert!((t[(1, 0)] - 1.0).abs() < 1e-12);
/// ```
pub fn exp_se3(twist: &Twist, theta: f64) -> Result<Transform, KinematicsError> {
    if !theta.is_finite() {
        return Err(KinematicsError::InvalidTwist(format!("joint value {} is not finite", theta)));
    }
    if twist.iter().any(|c| !c.is_finite()) {
        return Err(KinematicsError::InvalidTwist(format!(
            "twist {:?} has non-finite components", twist.as_slice()
        )));
    }

    let omega = Vector3::new(twist[0], twist[1], twist[2]);
    let v = Vector3::new(twist[3], twist[4], twist[5]);
    let omega_norm = omega.norm();

    if omega_norm < NEAR_ZERO {
        if v.norm() < NEAR_ZERO && theta != 0.0 {
            return Err(KinematicsError::InvalidTwist(
                "zero twist cannot be moved by a non-zero joint value".to_string(),
            ));
        }
        // Prismatic joint
        return Ok(homogeneous(&Matrix3::identity(), &(v * theta)));
    }

    if (omega_norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
        return Err(KinematicsError::UnnormalizedAxis { norm: omega_norm });
    }

    let w = skew(&omega);
    let w2 = w * w;
    let (s, c) = theta.sin_cos();

    let rotation = Matrix3::identity() + w * s + w2 * (1.0 - c);
    let g = Matrix3::identity() * theta + w * (1.0 - c) + w2 * (theta - s);

    Ok(homogeneous(&rotation, &(g * v)))
}
