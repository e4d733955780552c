//! Rust implementation of forward kinematics for serial robotic chains using the
//! Product of Exponentials (PoE) formula.
//!
//! Every joint of the chain is described by a screw axis (a twist, angular part first).
//! The end effector pose is computed two equivalent ways:
//!
//! - in the fixed (space) frame, `T = e^[S1]θ1 · e^[S2]θ2 · … · e^[Sn]θn · M`
//! - in the end effector (body) frame, `T = M · e^[B1]θ1 · e^[B2]θ2 · … · e^[Bn]θn`
//!
//! where `M` is the home configuration, the pose of the end effector when all joints are at zero.
//! For body screw axes that are the adjoint image of the space ones, `B = Ad(M⁻¹) S`, both
//! formulas must give the same pose. The crate can evaluate both and cross-check the results
//! element by element under an explicit tolerance.
//!
//! # Features
//!
//! - Closed-form exponential map from se(3) to SE(3) (Rodrigues formula), with validation of
//!   the screw axes instead of silent normalization.
//! - Space and body frame forward kinematics, as free functions and through the
//!   [`kinematic_traits::Kinematics`] trait.
//! - Conversion of screw axes between space and body frames by the adjoint representation.
//! - Element-wise pose comparison that returns the full difference matrix.
//! - Cross-check of both formulations, evaluated in parallel with the `parallel` feature.
//! - Chain parameters from YAML files (`allow_filesystem` feature) and built-in sample chains.
//!
//! # Example
//!
//! ```
//! use rs_poe_kinematics::cross_check::cross_check;
//! use rs_poe_kinematics::parameters::poe_kinematics::ChainParameters;
//!
//! let chain = ChainParameters::textbook_rpr();
//! let check = cross_check(&chain).expect("valid chain");
//! assert!(check.comparison.matches);
//! ```

pub mod kinematics_error;
pub mod kinematic_traits;
pub mod exponential;
pub mod frame;
pub mod kinematics_impl;
pub mod comparator;
pub mod cross_check;

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
