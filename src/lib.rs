//! Rust implementation of closed-form inverse and forward kinematics for planar two-link (2R)
//! robot arms
//!
//! The arm has its base pinned at the origin. The first link of length _l1_ rotates around the
//! base by _theta1_, measured from the x axis. The second link of length _l2_ rotates around the
//! tip of the first link by _theta2_, measured relative to the first link.
//!
//! # Features
//!
//! - Inverse kinematics by the law of cosines, returning the elbow-up solution (theta2 in [0, pi])
//!   with theta1 normalized into (-pi, pi]. The elbow-down mirror solution is available on request.
//! - Targets outside the reachable annulus `|l1 - l2| <= distance <= l1 + l2` are reported as
//!   errors instead of producing NaN angles.
//! - Forward kinematics for verification: every solved point is mapped back and compared with
//!   the target.
//! - Drawing of point sets (letters "M" and "N", sampled circles), console output of the joint
//!   angles in degrees and SVG plots of targets against recomputed positions.
//!
//! ```
//! use rs_2r_kinematics::kinematic_traits::{Kinematics, Point};
//! use rs_2r_kinematics::kinematics_impl::TwoLinkKinematics;
//! use rs_2r_kinematics::parameters::Parameters;
//!
//! let robot = TwoLinkKinematics::new(Parameters::new(5.0, 5.0).unwrap());
//! let target = Point::new(3.0, 4.0);
//! let joints = robot.inverse(&target).unwrap();
//! assert!(joints[1] >= 0.0); // elbow up
//! assert!((robot.forward(&joints) - target).norm() < 1e-9);
//! assert!(robot.inverse(&Point::new(11.0, 0.0)).is_err());
//! ```

pub mod parameters;
pub mod parameters_robots;
pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;
pub mod kinematics_error;

pub mod config;
pub mod shapes;
pub mod trajectory;

#[cfg(feature = "visualization")]
pub mod plot;

#[cfg(test)]
mod tests;
