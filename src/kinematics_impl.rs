//! Closed-form inverse and forward kinematics of the planar two-link arm

use std::f64::consts::PI;

use crate::kinematic_traits::{ElbowConfiguration, Joints, Kinematics, Point, Solutions};
use crate::kinematics_error::KinematicsError;
use crate::parameters::Parameters;

/// How far the law-of-cosines argument may leave [-1, 1] before it is treated as
/// a domain error rather than rounding.
const COS_ROUNDING: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
pub struct TwoLinkKinematics {
    parameters: Parameters,
}

impl TwoLinkKinematics {
    /// Creates a new `TwoLinkKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        TwoLinkKinematics { parameters }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl Kinematics for TwoLinkKinematics {
    fn inverse(&self, target: &Point) -> Result<Joints, KinematicsError> {
        self.inverse_with(target, ElbowConfiguration::Up)
    }

    fn inverse_with(&self, target: &Point, elbow: ElbowConfiguration) -> Result<Joints, KinematicsError> {
        let p = &self.parameters;
        let triangle = solve_triangle(target.x, target.y, p.l1(), p.l2())?;
        Ok(triangle.joints(elbow))
    }

    fn inverse_all(&self, target: &Point) -> Result<Solutions, KinematicsError> {
        let p = &self.parameters;
        let triangle = solve_triangle(target.x, target.y, p.l1(), p.l2())?;
        let up = triangle.joints(ElbowConfiguration::Up);
        if triangle.sin_theta2 == 0.0 {
            // Stretched or folded, both configurations are the same pose.
            return Ok(vec![up]);
        }
        Ok(vec![up, triangle.joints(ElbowConfiguration::Down)])
    }

    fn forward(&self, qs: &Joints) -> Point {
        let p = &self.parameters;
        forward_kinematics(qs[0], qs[1], p.l1(), p.l2())
    }

    fn forward_with_joint_positions(&self, qs: &Joints) -> [Point; 3] {
        let p = &self.parameters;
        let elbow = Point::new(p.l1() * qs[0].cos(), p.l1() * qs[0].sin());
        [Point::origin(), elbow, forward_kinematics(qs[0], qs[1], p.l1(), p.l2())]
    }
}

/// Joint angles (theta1, theta2) that place the end effector of the arm with links `l1` and `l2`
/// at (x, y). The elbow-up configuration is returned, so theta2 is always in [0, pi] and
/// theta1 is normalized into (-pi, pi].
///
/// Targets outside the annulus `|l1 - l2| <= distance <= l1 + l2` are rejected with
/// [`KinematicsError::Unreachable`]. At the origin (only reachable with equal links) the bearing
/// of the target is undefined and taken as 0, so the folded arm points along the x axis.
///
/// Link lengths that are not positive and finite are rejected with [`KinematicsError::InvalidLinks`].
/// ```
/// use std::f64::consts::PI;
/// use rs_2r_kinematics::kinematics_impl::inverse_kinematics;
/// let [theta1, theta2] = inverse_kinematics(0.0, 10.0, 5.0, 5.0).unwrap();
/// assert!((theta1 - PI / 2.0).abs() < 1e-12);
/// assert!(theta2.abs() < 1e-12);
/// ```
pub fn inverse_kinematics(x: f64, y: f64, l1: f64, l2: f64) -> Result<Joints, KinematicsError> {
    Ok(solve_triangle(x, y, l1, l2)?.joints(ElbowConfiguration::Up))
}

/// End effector position for the given joint angles, base pinned at the origin.
/// Defined for all real angles.
pub fn forward_kinematics(theta1: f64, theta2: f64, l1: f64, l2: f64) -> Point {
    let x1 = l1 * theta1.cos();
    let y1 = l1 * theta1.sin();
    let x2 = x1 + l2 * (theta1 + theta2).cos();
    let y2 = y1 + l2 * (theta1 + theta2).sin();
    Point::new(x2, y2)
}

/// Triangle formed by the two links and the line from the base to the target.
struct Triangle {
    /// Direction from the base to the target.
    bearing: f64,
    /// Angle between the base-target line and the first link.
    psi: f64,
    theta2: f64,
    sin_theta2: f64,
}

impl Triangle {
    fn joints(&self, elbow: ElbowConfiguration) -> Joints {
        match elbow {
            ElbowConfiguration::Up => [normalize_angle(self.bearing - self.psi), self.theta2],
            ElbowConfiguration::Down => [normalize_angle(self.bearing + self.psi), -self.theta2],
        }
    }
}

fn solve_triangle(x: f64, y: f64, l1: f64, l2: f64) -> Result<Triangle, KinematicsError> {
    if !(l1.is_finite() && l1 > 0.0 && l2.is_finite() && l2 > 0.0) {
        return Err(KinematicsError::InvalidLinks { l1, l2 });
    }
    if !x.is_finite() || !y.is_finite() {
        return Err(KinematicsError::NonFinite { x, y });
    }

    let distance = x.hypot(y);
    let max_reach = l1 + l2;
    let min_reach = (l1 - l2).abs();
    if distance > max_reach || distance < min_reach {
        return Err(KinematicsError::Unreachable { x, y, distance, min_reach, max_reach });
    }

    let cos_theta2 = elbow_cosine(distance, l1, l2)?;

    // Non-negative root: elbow-up. Factored by the reach bounds, as 1 - cos^2 cancels
    // when the arm is nearly stretched or folded.
    let outer = ((max_reach - distance) * (max_reach + distance)).max(0.0);
    let inner = ((distance - min_reach) * (distance + min_reach)).max(0.0);
    let sin_theta2 = outer.sqrt() * inner.sqrt() / (2.0 * l1 * l2);
    let theta2 = sin_theta2.atan2(cos_theta2);

    // k1 = l1 + l2 * cos_theta2, expanded so that it does not cancel near the folded pose.
    let k1 = (distance * distance + (l1 - l2) * (l1 + l2)) / (2.0 * l1);
    let k2 = l2 * sin_theta2;

    Ok(Triangle {
        bearing: atan2_or_zero(y, x),
        psi: atan2_or_zero(k2, k1),
        theta2,
        sin_theta2,
    })
}

/// Cosine of the elbow angle by the law of cosines, clamped into [-1, 1] to remove rounding.
///
/// Fails with [`KinematicsError::Domain`] if the value is not finite or leaves [-1, 1] by more
/// than rounding. With validated lengths and the distance inside the reach bounds this is latent.
fn elbow_cosine(distance: f64, l1: f64, l2: f64) -> Result<f64, KinematicsError> {
    let cos_theta2 = (distance * distance - l1 * l1 - l2 * l2) / (2.0 * l1 * l2);
    if !cos_theta2.is_finite() || cos_theta2.abs() > 1.0 + COS_ROUNDING {
        return Err(KinematicsError::Domain { cos_theta2 });
    }
    Ok(cos_theta2.clamp(-1.0, 1.0))
}

/// atan2 with the (0, 0) case fixed to 0 regardless of signed zeros.
fn atan2_or_zero(y: f64, x: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    y.atan2(x)
}

/// Normalizes the angle into (-pi, pi].
pub(crate) fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let mut normalized = angle % two_pi;
    if normalized > PI {
        normalized -= two_pi;
    } else if normalized <= -PI {
        normalized += two_pi;
    }
    normalized
}
