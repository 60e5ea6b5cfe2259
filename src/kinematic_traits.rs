//! Core types and the kinematics trait for the planar two-link arm

extern crate nalgebra as na;

use crate::kinematics_error::KinematicsError;
use na::Point2;

/// Point is a position in the plane of the arm, in the base frame (base pinned at the origin).
/// ```
/// use rs_2r_kinematics::kinematic_traits::Point;
/// let target = Point::new(3.0, 4.0);
/// assert_eq!(target.coords.norm(), 5.0);
/// ```
pub type Point = Point2<f64>;

/// Joint angles in radians, [theta1, theta2]. theta1 is the shoulder angle measured from the x axis,
/// theta2 is the elbow angle measured relative to the first link.
pub type Joints = [f64; 2];

/// Inverse kinematics may return up to 2 solutions (elbow-up first).
pub type Solutions = Vec<Joints>;

/// For providing joint values when joints must be all at zero (arm stretched along the x axis).
pub const JOINTS_AT_ZERO: Joints = [0.0, 0.0];

/// Identifies the two mirror solutions that generally exist for a 2R arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElbowConfiguration {
    /// theta2 in [0, pi]. This is the default choice of the solver.
    #[default]
    Up,
    /// theta2 in [-pi, 0].
    Down,
}

pub trait Kinematics: Send + Sync {
    /// Find the joint angles that place the end effector at the given target, choosing the
    /// elbow-up configuration. Fails if the target lies outside the reachable annulus.
    fn inverse(&self, target: &Point) -> Result<Joints, KinematicsError>;

    /// Same as inverse but the elbow configuration is chosen by the caller.
    fn inverse_with(&self, target: &Point, elbow: ElbowConfiguration) -> Result<Joints, KinematicsError>;

    /// All distinct solutions for the target, elbow-up first. Where elbow-up and elbow-down
    /// coincide (arm fully stretched or fully folded), only one solution is returned.
    fn inverse_all(&self, target: &Point) -> Result<Solutions, KinematicsError>;

    /// Find the end effector position for the given joint angles.
    fn forward(&self, qs: &Joints) -> Point;

    /// Positions of the base, the elbow and the end effector, in this order.
    fn forward_with_joint_positions(&self, qs: &Joints) -> [Point; 3];
}
