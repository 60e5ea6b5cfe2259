//! Defines the link length data structure of the planar two-link arm

use crate::kinematic_traits::Point;
use crate::parameter_error::ParameterError;

/// Parameters for the arm. See [parameters_robots.rs](parameters_robots.rs) for a few presets.
/// Both links rotate in the same plane, the first around the base at the origin, the second
/// around the tip of the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Length of the first link (base to elbow).
    l1: f64,

    /// Length of the second link (elbow to end effector).
    l2: f64,
}

impl Parameters {
    /// Creates parameters from link lengths. Both lengths must be positive and finite.
    pub fn new(l1: f64, l2: f64) -> Result<Self, ParameterError> {
        for (name, value) in [("l1", l1), ("l2", l2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidLength { name, value });
            }
        }
        Ok(Parameters { l1, l2 })
    }

    /// For presets known to be valid.
    pub(crate) const fn from_lengths_unchecked(l1: f64, l2: f64) -> Self {
        Parameters { l1, l2 }
    }

    pub fn l1(&self) -> f64 {
        self.l1
    }

    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Distance from the base to the end effector when the arm is fully stretched.
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Distance from the base to the end effector when the arm is fully folded.
    /// Targets closer to the base than this are in the dead zone.
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }

    /// Checks if the point lies inside the reachable annulus (bounds inclusive).
    pub fn is_reachable(&self, point: &Point) -> bool {
        let distance = point.coords.norm();
        distance >= self.min_reach() && distance <= self.max_reach()
    }

    /// Convert to string yaml representation (quick viewing, etc).
    pub fn to_yaml(&self) -> String {
        format!(
            "two_link_geometric_parameters:\n  \
              l1: {}\n  \
              l2: {}\n",
            self.l1,
            self.l2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_lengths() {
        assert!(matches!(Parameters::new(0.0, 5.0),
            Err(ParameterError::InvalidLength { name: "l1", .. })));
        assert!(matches!(Parameters::new(5.0, -1.0),
            Err(ParameterError::InvalidLength { name: "l2", .. })));
        assert!(Parameters::new(f64::NAN, 5.0).is_err());
        assert!(Parameters::new(5.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_reach_bounds() {
        let parameters = Parameters::new(5.0, 3.0).expect("valid lengths");
        assert_eq!(parameters.max_reach(), 8.0);
        assert_eq!(parameters.min_reach(), 2.0);

        assert!(parameters.is_reachable(&Point::new(8.0, 0.0)));
        assert!(parameters.is_reachable(&Point::new(0.0, -2.0)));
        assert!(!parameters.is_reachable(&Point::new(1.0, 0.0)));
        assert!(!parameters.is_reachable(&Point::new(6.0, 6.0)));
    }

    #[test]
    fn test_to_yaml() {
        let parameters = Parameters::new(5.0, 2.5).expect("valid lengths");
        assert_eq!(parameters.to_yaml(), "two_link_geometric_parameters:\n  l1: 5\n  l2: 2.5\n");
    }
}
