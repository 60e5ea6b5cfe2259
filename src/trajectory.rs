//! Computes joint angles for a sequence of target points and verifies them with forward kinematics.
//!
//! This stage does no output of its own besides logging, presentation is done by
//! [`crate::utils::dump_trajectory`] and the SVG plot.

use tracing::{debug, info, warn};

use crate::kinematic_traits::{Joints, Kinematics, Point};
use crate::kinematics_error::KinematicsError;

/// Target point together with the joint angles found for it and the position
/// these angles actually reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Position of the target in the input sequence, from 0.
    pub index: usize,
    pub target: Point,
    pub joints: Joints,
    /// End effector position recomputed from `joints`.
    pub reached: Point,
}

impl Solution {
    /// Distance between the target and the recomputed position.
    pub fn error(&self) -> f64 {
        (self.reached - self.target).norm()
    }

    pub fn is_verified(&self, tolerance: f64) -> bool {
        self.error() <= tolerance
    }
}

/// Target point for which inverse kinematics failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailedPoint {
    pub index: usize,
    pub target: Point,
    pub error: KinematicsError,
}

#[derive(Debug, Clone)]
pub struct Trajectory {
    pub title: String,
    /// Solved points, in input order.
    pub solutions: Vec<Solution>,
    /// Points that could not be solved, in input order.
    pub failures: Vec<FailedPoint>,
}

/// Inverse kinematics for the target followed by forward kinematics on the result.
pub fn solve_point(robot: &dyn Kinematics, index: usize, target: &Point) -> Result<Solution, KinematicsError> {
    let joints = robot.inverse(target)?;
    let reached = robot.forward(&joints);
    Ok(Solution { index, target: *target, joints, reached })
}

impl Trajectory {
    /// Solves all points. A point that cannot be solved is recorded as failed and the
    /// remaining points are still processed.
    pub fn compute(robot: &dyn Kinematics, title: &str, points: &[Point]) -> Self {
        let mut solutions = Vec::with_capacity(points.len());
        let mut failures = Vec::new();

        for (index, target) in points.iter().enumerate() {
            match solve_point(robot, index, target) {
                Ok(solution) => {
                    debug!(index, x = target.x, y = target.y,
                        theta1 = solution.joints[0], theta2 = solution.joints[1],
                        error = solution.error(), "solved");
                    solutions.push(solution);
                }
                Err(error) => {
                    warn!("Point {} ({:.3}, {:.3}) skipped: {}", index + 1, target.x, target.y, error);
                    failures.push(FailedPoint { index, target: *target, error });
                }
            }
        }

        let trajectory = Trajectory { title: title.to_string(), solutions, failures };
        info!(title, solved = trajectory.solutions.len(), failed = trajectory.failures.len(),
            max_error = trajectory.max_error(), "trajectory computed");
        trajectory
    }

    /// True if every input point was solved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Largest round-trip error over the solved points, 0 if none were solved.
    pub fn max_error(&self) -> f64 {
        self.solutions.iter().map(Solution::error).fold(0.0, f64::max)
    }

    /// Solutions whose recomputed position is farther from the target than the tolerance.
    pub fn unverified(&self, tolerance: f64) -> Vec<&Solution> {
        self.solutions.iter().filter(|s| !s.is_verified(tolerance)).collect()
    }

    pub fn targets(&self) -> Vec<Point> {
        self.solutions.iter().map(|s| s.target).collect()
    }

    pub fn reached(&self) -> Vec<Point> {
        self.solutions.iter().map(|s| s.reached).collect()
    }
}
