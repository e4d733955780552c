//! Element-wise comparison of homogeneous transforms.

use nalgebra::{DMatrix, Matrix4};

use crate::kinematic_traits::Transform;
use crate::kinematics_error::KinematicsError;

/// Outcome of comparing two transforms. The complete difference matrix is kept so that
/// the caller can see which entries diverge, not only whether they do.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseComparison {
    /// True if every entry of `diff` is within the tolerance.
    pub matches: bool,

    /// Absolute element-wise differences, `|T1[i][j] - T2[i][j]|`.
    pub diff: Matrix4<f64>,

    /// Absolute tolerance the comparison was made with.
    pub tolerance: f64,
}

impl PoseComparison {
    /// The largest entry of the difference matrix (NaN entries are skipped).
    pub fn max_difference(&self) -> f64 {
        self.diff.iter().copied().fold(0.0, f64::max)
    }

    /// (row, column) of the entries that exceed the tolerance, in row-major order.
    pub fn exceeding(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                // Written this way so that NaN counts as exceeding
                if !(self.diff[(row, col)] <= self.tolerance) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }
}

/// Compares two transforms given as matrices of any size; both must be 4 x 4.
///
/// # Errors
///
/// * [`KinematicsError::ShapeMismatch`] if either input is not 4 x 4.
/// * [`KinematicsError::InvalidTolerance`] if the tolerance is negative or NaN.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use rs_poe_kinematics::comparator::compare_transforms;
///
/// let a = DMatrix::<f64>::identity(4, 4);
/// let result = compare_transforms(&a, &a, 0.0).unwrap();
/// assert!(result.matches);
/// assert_eq!(result.max_difference(), 0.0);
/// ```
pub fn compare_transforms(t1: &DMatrix<f64>, t2: &DMatrix<f64>, tolerance: f64) -> Result<PoseComparison, KinematicsError> {
    for t in [t1, t2] {
        if t.shape() != (4, 4) {
            return Err(KinematicsError::ShapeMismatch { rows: t.nrows(), cols: t.ncols() });
        }
    }
    // Both are column-major, so the element order is preserved.
    let a = Matrix4::from_iterator(t1.iter().copied());
    let b = Matrix4::from_iterator(t2.iter().copied());
    compare_poses(&a, &b, tolerance)
}

/// Compares two 4 x 4 transforms element by element with the absolute tolerance.
pub fn compare_poses(t1: &Transform, t2: &Transform, tolerance: f64) -> Result<PoseComparison, KinematicsError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(KinematicsError::InvalidTolerance(tolerance));
    }
    let diff = (t1 - t2).map(|d| d.abs());
    let matches = diff.iter().all(|&d| d <= tolerance);
    Ok(PoseComparison { matches, diff, tolerance })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential::exp_se3;
    use crate::kinematic_traits::Twist;

    fn sample() -> Transform {
        exp_se3(&Twist::new(0.0, 0.6, 0.8, 0.1, 0.2, 0.3), 0.9).unwrap()
    }

    fn dynamic(t: &Transform) -> DMatrix<f64> {
        DMatrix::from_column_slice(4, 4, t.as_slice())
    }

    #[test]
    fn test_identical_transforms_match_with_zero_tolerance() {
        let a = sample();
        let result = compare_transforms(&dynamic(&a), &dynamic(&a), 0.0).unwrap();
        assert!(result.matches);
        assert_eq!(result.diff, Matrix4::zeros());
        assert!(result.exceeding().is_empty());
    }

    #[test]
    fn test_single_cell_difference() {
        let a = sample();
        let mut b = a;
        b[(1, 3)] += 0.25;
        let result = compare_poses(&a, &b, 0.1).unwrap();
        assert!(!result.matches);
        assert_eq!(result.diff[(1, 3)], (a[(1, 3)] - b[(1, 3)]).abs());
        assert_eq!(result.exceeding(), vec![(1, 3)]);
        assert_eq!(result.max_difference(), result.diff[(1, 3)]);

        // Same difference is accepted with the larger tolerance
        assert!(compare_poses(&a, &b, 0.3).unwrap().matches);
    }

    #[test]
    fn test_element_order_preserved() {
        let a = sample();
        let mut b = a;
        b[(2, 0)] -= 1.0;
        let result = compare_transforms(&dynamic(&a), &dynamic(&b), 0.5).unwrap();
        assert_eq!(result.exceeding(), vec![(2, 0)]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = dynamic(&sample());
        let wrong = DMatrix::<f64>::zeros(3, 4);
        assert_eq!(
            compare_transforms(&a, &wrong, 0.01),
            Err(KinematicsError::ShapeMismatch { rows: 3, cols: 4 })
        );
        assert_eq!(
            compare_transforms(&DMatrix::<f64>::zeros(4, 5), &a, 0.01),
            Err(KinematicsError::ShapeMismatch { rows: 4, cols: 5 })
        );
    }

    #[test]
    fn test_invalid_tolerance() {
        let a = sample();
        assert!(matches!(compare_poses(&a, &a, -0.1), Err(KinematicsError::InvalidTolerance(_))));
        assert!(matches!(compare_poses(&a, &a, f64::NAN), Err(KinematicsError::InvalidTolerance(_))));
    }

    #[test]
    fn test_nan_never_matches() {
        let a = sample();
        let mut b = a;
        b[(0, 0)] = f64::NAN;
        let result = compare_poses(&a, &b, 1e6).unwrap();
        assert!(!result.matches);
        assert_eq!(result.exceeding(), vec![(0, 0)]);
    }
}
