use crate::exponential::exp_se3;
use crate::frame::{body_screws_from_space, space_screws_from_body};
use crate::kinematic_traits::{Kinematics, Screws, Transform, Twist};
use crate::kinematics_error::KinematicsError;

/// Forward kinematics in the space (fixed) frame:
/// `T = e^[S1]θ1 · e^[S2]θ2 · … · e^[Sn]θn · M`
///
/// # Arguments
///
/// * `home` - end effector pose when all joints are at zero (M)
/// * `space_screws` - screw axes of the joints, expressed in the space frame at home configuration
/// * `joints` - joint values, one per screw axis
///
/// # Errors
///
/// [`KinematicsError::DimensionMismatch`] if the number of screw axes and joint values differ,
/// or [`KinematicsError::Joint`] wrapping the exponential map failure for the offending joint.
///
/// # Example
///
/// ```
/// use rs_poe_kinematics::kinematic_traits::{Transform, Twist};
/// use rs_poe_kinematics::kinematics_impl::fkin_space;
///
/// // Single prismatic joint along x
/// let home = Transform::identity();
/// let screws = vec![Twist::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0)];
/// let pose = fkin_space(&home, &screws, &[0.25]).unwrap();
/// assert_eq!(pose[(0, 3)], 0.25);
/// ```
pub fn fkin_space(home: &Transform, space_screws: &[Twist], joints: &[f64]) -> Result<Transform, KinematicsError> {
    check_dimensions(space_screws, joints)?;

    let mut t = Transform::identity();
    for (index, (screw, &theta)) in space_screws.iter().zip(joints).enumerate() {
        t *= joint_exp(index, screw, theta)?;
    }
    Ok(t * home)
}

/// Forward kinematics in the body (end effector) frame:
/// `T = M · e^[B1]θ1 · e^[B2]θ2 · … · e^[Bn]θn`
///
/// Arguments and errors are as for [`fkin_space`], but the screw axes are expressed in the
/// end effector frame at home configuration.
pub fn fkin_body(home: &Transform, body_screws: &[Twist], joints: &[f64]) -> Result<Transform, KinematicsError> {
    check_dimensions(body_screws, joints)?;

    let mut t = *home;
    for (index, (screw, &theta)) in body_screws.iter().zip(joints).enumerate() {
        t *= joint_exp(index, screw, theta)?;
    }
    Ok(t)
}

fn check_dimensions(screws: &[Twist], joints: &[f64]) -> Result<(), KinematicsError> {
    if screws.len() != joints.len() {
        return Err(KinematicsError::DimensionMismatch {
            screws: screws.len(),
            joints: joints.len(),
        });
    }
    Ok(())
}

fn joint_exp(index: usize, screw: &Twist, theta: f64) -> Result<Transform, KinematicsError> {
    exp_se3(screw, theta).map_err(|source| KinematicsError::Joint {
        index,
        source: Box::new(source),
    })
}

/// Serial chain described by screw axes in the space frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceChain {
    pub home: Transform,
    pub screws: Screws,
}

/// Serial chain described by screw axes in the body frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyChain {
    pub home: Transform,
    pub screws: Screws,
}

impl SpaceChain {
    pub fn new(home: Transform, screws: Screws) -> Self {
        SpaceChain { home, screws }
    }
}

impl BodyChain {
    pub fn new(home: Transform, screws: Screws) -> Self {
        BodyChain { home, screws }
    }
}

impl Kinematics for SpaceChain {
    fn forward(&self, joints: &[f64]) -> Result<Transform, KinematicsError> {
        fkin_space(&self.home, &self.screws, joints)
    }

    fn dof(&self) -> usize {
        self.screws.len()
    }

    fn home(&self) -> &Transform {
        &self.home
    }
}

impl Kinematics for BodyChain {
    fn forward(&self, joints: &[f64]) -> Result<Transform, KinematicsError> {
        fkin_body(&self.home, &self.screws, joints)
    }

    fn dof(&self) -> usize {
        self.screws.len()
    }

    fn home(&self) -> &Transform {
        &self.home
    }
}

/// Same chain with the screw axes moved into the body frame, `B = Ad(M⁻¹) S`.
impl From<&SpaceChain> for BodyChain {
    fn from(chain: &SpaceChain) -> Self {
        BodyChain::new(chain.home, body_screws_from_space(&chain.home, &chain.screws))
    }
}

/// Same chain with the screw axes moved into the space frame, `S = Ad(M) B`.
impl From<&BodyChain> for SpaceChain {
    fn from(chain: &BodyChain) -> Self {
        SpaceChain::new(chain.home, space_screws_from_body(&chain.home, &chain.screws))
    }
}
