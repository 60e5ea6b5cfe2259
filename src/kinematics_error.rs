//! Errors reported by the inverse kinematics solver

use std::fmt;

/// Reasons why inverse kinematics cannot produce joint angles for a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// The target lies outside the reachable annulus: farther than the fully extended arm,
    /// or closer to the base than the fully folded arm allows.
    Unreachable {
        x: f64,
        y: f64,
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },
    /// The cosine of the elbow angle fell outside [-1, 1] by more than rounding.
    Domain { cos_theta2: f64 },
    /// Target coordinates are NaN or infinite.
    NonFinite { x: f64, y: f64 },
    /// Link lengths must be positive and finite.
    InvalidLinks { l1: f64, l2: f64 },
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicsError::Unreachable { x, y, distance, min_reach, max_reach } => {
                if distance > max_reach {
                    write!(f, "Target ({:.4}, {:.4}) is unreachable: distance {:.6} exceeds maximal reach {:.6}",
                           x, y, distance, max_reach)
                } else {
                    write!(f, "Target ({:.4}, {:.4}) is unreachable: distance {:.6} is below minimal reach {:.6}",
                           x, y, distance, min_reach)
                }
            }
            KinematicsError::Domain { cos_theta2 } =>
                write!(f, "Domain error: cos(theta2) = {} is outside [-1, 1]", cos_theta2),
            KinematicsError::NonFinite { x, y } =>
                write!(f, "Target ({}, {}) is not finite", x, y),
            KinematicsError::InvalidLinks { l1, l2 } =>
                write!(f, "Link lengths l1 = {}, l2 = {} must be positive and finite", l1, l2),
        }
    }
}

impl std::error::Error for KinematicsError {}
