//! Helper functions

use crate::kinematic_traits::{Joints, Solutions};
use crate::trajectory::Trajectory;

/// Checks if both joint angles are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Joint values of one point as printed in the console, converting radians to degrees.
/// `index` is 0-based, points are numbered from 1.
pub fn format_point(index: usize, joints: &Joints) -> String {
    format!("Point {}: q1 = {:.2}°, q2 = {:.2}°", index + 1, joints[0].to_degrees(), joints[1].to_degrees())
}

/// Lines printed for the trajectory: the title, one line per input point and a blank line.
/// Failed points are listed in their place with the reason.
pub fn format_trajectory(trajectory: &Trajectory) -> Vec<String> {
    let mut rows: Vec<(usize, String)> = trajectory.solutions.iter()
        .map(|s| (s.index, format_point(s.index, &s.joints)))
        .chain(trajectory.failures.iter()
            .map(|f| (f.index, format!("Point {}: {}", f.index + 1, f.error))))
        .collect();
    rows.sort_by_key(|(index, _)| *index);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(trajectory.title.clone());
    lines.extend(rows.into_iter().map(|(_, row)| row));
    lines.push(String::new());
    lines
}

/// Print joint values for all points of the trajectory.
pub fn dump_trajectory(trajectory: &Trajectory) {
    for line in format_trajectory(trajectory) {
        println!("{}", line);
    }
}

/// Print joint values for all solutions, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for joints in solutions {
        dump_joints(joints);
    }
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    println!("[{:5.2} {:5.2}]", joints[0].to_degrees(), joints[1].to_degrees());
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 2]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;
    use crate::kinematic_traits::Point;
    use crate::kinematics_error::KinematicsError;
    use crate::trajectory::{FailedPoint, Solution};

    #[test]
    fn test_is_valid() {
        assert!(is_valid(&[0.0, PI]));
        assert!(!is_valid(&[f64::NAN, 0.0]));
        assert!(!is_valid(&[0.0, f64::INFINITY]));
    }

    #[test]
    fn test_format_point_in_degrees() {
        assert_eq!(format_point(0, &[PI / 2.0, PI]), "Point 1: q1 = 90.00°, q2 = 180.00°");
        assert_eq!(format_point(9, &[-PI / 4.0, 0.0]), "Point 10: q1 = -45.00°, q2 = 0.00°");
    }

    #[test]
    fn test_format_trajectory_keeps_input_order() {
        let target = Point::new(10.0, 0.0);
        let trajectory = Trajectory {
            title: "Test".to_string(),
            solutions: vec![
                Solution { index: 0, target, joints: [0.0, 0.0], reached: target },
                Solution { index: 2, target, joints: [0.0, 0.0], reached: target },
            ],
            failures: vec![FailedPoint {
                index: 1,
                target: Point::new(20.0, 0.0),
                error: KinematicsError::Unreachable { x: 20.0, y: 0.0, distance: 20.0, min_reach: 0.0, max_reach: 10.0 },
            }],
        };

        let lines = format_trajectory(&trajectory);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Test");
        assert!(lines[1].starts_with("Point 1: q1"));
        assert!(lines[2].starts_with("Point 2: Target"));
        assert!(lines[3].starts_with("Point 3: q1"));
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_as_radians() {
        let joints = as_radians([90, -180]);
        assert!((joints[0] - PI / 2.0).abs() < 1e-12);
        assert!((joints[1] + PI).abs() < 1e-12);
    }
}
