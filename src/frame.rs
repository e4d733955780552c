//! Supports conversion between the space (fixed) frame and the body (end effector) frame.
//!
//! A screw axis written in one frame is written in another frame with the adjoint
//! representation of the transform that relates the two frames. The body frame screw
//! axes of the chain are the space frame ones seen from the home configuration:
//! `B = Ad(M⁻¹) S`, and back, `S = Ad(M) B`.

use nalgebra::{Matrix3, Matrix6, Vector3};

use crate::exponential::skew;
use crate::kinematic_traits::{Transform, Twist};

/// Build the homogeneous transform from the rotation and translation parts.
pub fn homogeneous(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Transform {
    let mut t = Transform::identity();
    t.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    t.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    t
}

/// Rotation block R of the transform.
pub fn rotation_part(t: &Transform) -> Matrix3<f64> {
    t.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Translation p of the transform.
pub fn translation_part(t: &Transform) -> Vector3<f64> {
    t.fixed_view::<3, 1>(0, 3).into_owned()
}

/// Inverse of the rigid transform, `[[Rᵀ, -Rᵀp], [0, 1]]`. Unlike general matrix inversion,
/// this cannot fail but assumes R is a rotation.
pub fn trans_inv(t: &Transform) -> Transform {
    let r_t = rotation_part(t).transpose();
    let p = translation_part(t);
    homogeneous(&r_t, &(-(r_t * p)))
}

/// 6 x 6 adjoint representation `[[R, 0], [[p]R, R]]` of the transform, for twists
/// that have the angular part first.
pub fn adjoint(t: &Transform) -> Matrix6<f64> {
    let r = rotation_part(t);
    let p = translation_part(t);

    let mut ad = Matrix6::zeros();
    ad.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
    ad.fixed_view_mut::<3, 3>(3, 3).copy_from(&r);
    ad.fixed_view_mut::<3, 3>(3, 0).copy_from(&(skew(&p) * r));
    ad
}

/// Body frame screw axes for the given space frame axes and home configuration.
pub fn body_screws_from_space(home: &Transform, space_screws: &[Twist]) -> Vec<Twist> {
    let ad = adjoint(&trans_inv(home));
    space_screws.iter().map(|s| ad * s).collect()
}

/// Space frame screw axes for the given body frame axes and home configuration.
pub fn space_screws_from_body(home: &Transform, body_screws: &[Twist]) -> Vec<Twist> {
    let ad = adjoint(home);
    body_screws.iter().map(|b| ad * b).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::poe_kinematics::ChainParameters;

    #[test]
    fn test_trans_inv() {
        let rotation = crate::exponential::exp_so3(&Vector3::new(0.0, 0.6, 0.8), 1.1);
        let t = homogeneous(&rotation, &Vector3::new(1.0, -2.0, 0.5));
        let product = trans_inv(&t) * t;
        assert!((product - Transform::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_adjoint_of_identity() {
        assert_eq!(adjoint(&Transform::identity()), Matrix6::identity());
    }

    #[test]
    fn test_adjoint_of_inverse_is_inverse() {
        let rotation = crate::exponential::exp_so3(&Vector3::new(1.0, 0.0, 0.0), -0.4);
        let t = homogeneous(&rotation, &Vector3::new(0.3, 0.2, -0.1));
        let product = adjoint(&t) * adjoint(&trans_inv(&t));
        assert!((product - Matrix6::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_textbook_body_screws_from_space() {
        let chain = ChainParameters::textbook_rpr();
        let derived = body_screws_from_space(&chain.home, &chain.space_screws);
        for (d, b) in derived.iter().zip(&chain.body_screws) {
            assert!((d - b).norm() < 1e-12, "Derived {} but expected {}", d, b);
        }
        let back = space_screws_from_body(&chain.home, &derived);
        for (s, expected) in back.iter().zip(&chain.space_screws) {
            assert!((s - expected).norm() < 1e-12);
        }
    }
}
