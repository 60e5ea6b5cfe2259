//! Configuration of a drawing run: which arm, which shapes, how finely sampled

use crate::kinematic_traits::Point;
use crate::parameter_error::ParameterError;
use crate::parameters::Parameters;
use crate::shapes::{self, Shape, DEFAULT_SHAPES};

/// Everything the driver needs to know to compute and present trajectories.
/// Defaults reproduce the classic demo: a 5 + 5 arm drawing "M", a circle of radius 5
/// with 100 samples, and "N".
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingConfig {
    /// Link lengths of the arm.
    pub parameters: Parameters,

    /// Shapes to draw, in order.
    pub shapes: Vec<Shape>,

    pub circle_radius: f64,

    /// Number of points sampled on the circle, at least 2.
    pub sample_count: usize,

    /// Allowed distance between a target and the point recomputed by forward kinematics.
    pub tolerance: f64,
}

pub const DEFAULT_CIRCLE_RADIUS: f64 = 5.0;
pub const DEFAULT_SAMPLE_COUNT: usize = 100;
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

impl Default for DrawingConfig {
    fn default() -> Self {
        DrawingConfig {
            parameters: Parameters::reference(),
            shapes: DEFAULT_SHAPES.to_vec(),
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            sample_count: DEFAULT_SAMPLE_COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DrawingConfig {
    /// Checks values that are public fields and may have been set directly.
    pub fn validate(&self) -> Result<(), ParameterError> {
        Parameters::new(self.parameters.l1(), self.parameters.l2())?;
        if !self.circle_radius.is_finite() || self.circle_radius < 0.0 {
            return Err(ParameterError::InvalidLength { name: "circle_radius", value: self.circle_radius });
        }
        if self.sample_count < 2 {
            return Err(ParameterError::InvalidSampleCount(self.sample_count));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ParameterError::InvalidLength { name: "tolerance", value: self.tolerance });
        }
        Ok(())
    }

    /// Target points for the shape under this configuration.
    pub fn points(&self, shape: Shape) -> Vec<Point> {
        match shape {
            Shape::LetterM => shapes::letter_m(),
            Shape::LetterN => shapes::letter_n(),
            Shape::Circle => shapes::circle(self.circle_radius, self.sample_count),
        }
    }
}
