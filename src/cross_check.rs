//! Cross-check of the space and body frame formulations.
//!
//! Both forward kinematics are independent of each other; with the `parallel` feature
//! they are evaluated concurrently and joined before comparing.

use crate::comparator::{compare_poses, PoseComparison};
use crate::kinematic_traits::Transform;
use crate::kinematics_error::KinematicsError;
use crate::kinematics_impl::{fkin_body, fkin_space};
use crate::parameters::poe_kinematics::ChainParameters;

/// Both poses and their comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCheck {
    /// Pose computed from the space frame screw axes (T1).
    pub space: Transform,

    /// Pose computed from the body frame screw axes (T2).
    pub body: Transform,

    pub comparison: PoseComparison,
}

/// Evaluates the forward kinematics of the chain in both frames and compares the results
/// with the chain tolerance. Fails if either evaluation fails; the space frame error is
/// reported if both do.
pub fn cross_check(chain: &ChainParameters) -> Result<CrossCheck, KinematicsError> {
    let (space, body) = evaluate(chain);
    let space = space?;
    let body = body?;
    let comparison = compare_poses(&space, &body, chain.tolerance)?;
    Ok(CrossCheck { space, body, comparison })
}

type Evaluated = (Result<Transform, KinematicsError>, Result<Transform, KinematicsError>);

#[cfg(feature = "parallel")]
fn evaluate(chain: &ChainParameters) -> Evaluated {
    rayon::join(
        || fkin_space(&chain.home, &chain.space_screws, &chain.joints),
        || fkin_body(&chain.home, &chain.body_screws, &chain.joints),
    )
}

#[cfg(not(feature = "parallel"))]
fn evaluate(chain: &ChainParameters) -> Evaluated {
    (
        fkin_space(&chain.home, &chain.space_screws, &chain.joints),
        fkin_body(&chain.home, &chain.body_screws, &chain.joints),
    )
}
