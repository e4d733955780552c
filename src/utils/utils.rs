//! Helper functions

use nalgebra::Matrix4;

use crate::frame::rotation_part;
use crate::kinematic_traits::Transform;

/// Checks that the matrix is a rigid body transform within the tolerance: orthonormal
/// rotation block with determinant +1, bottom row `[0, 0, 0, 1]`, all entries finite.
pub fn is_rigid_transform(t: &Transform, tolerance: f64) -> bool {
    if !t.iter().all(|x| x.is_finite()) {
        return false;
    }
    let r = rotation_part(t);
    let orthonormal = (r.transpose() * r - nalgebra::Matrix3::identity())
        .iter().all(|x| x.abs() <= tolerance);
    let proper = (r.determinant() - 1.0).abs() <= tolerance;
    let bottom = [0.0, 0.0, 0.0, 1.0].iter().enumerate()
        .all(|(col, expected)| (t[(3, col)] - expected).abs() <= tolerance);
    orthonormal && proper && bottom
}

/// Formats the 4 x 4 matrix row by row, one row per line.
pub fn format_matrix(m: &Matrix4<f64>) -> String {
    let mut rows = Vec::with_capacity(4);
    for r in 0..4 {
        let mut row_str = String::new();
        for c in 0..4 {
            row_str.push_str(&format!("{:11.5} ", m[(r, c)]));
        }
        rows.push(format!("[{}]", row_str.trim_end()));
    }
    rows.join("\n")
}

/// Print the transform (or difference matrix), row by row.
pub fn dump_transform(t: &Matrix4<f64>) {
    println!("{}", format_matrix(t));
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: &[f64]) -> Vec<f64> {
    degrees.iter().map(|d| d.to_radians()).collect()
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}
