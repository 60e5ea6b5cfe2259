//! Target point sets the arm is asked to draw

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::kinematic_traits::Point;
use crate::parameter_error::ParameterError;

/// Shapes the driver knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Shape {
    /// Letter "M" as a polyline.
    #[cfg_attr(feature = "cli", value(name = "m"))]
    LetterM,
    /// Letter "N" as a polyline.
    #[cfg_attr(feature = "cli", value(name = "n"))]
    LetterN,
    /// Circle around the base, sampled uniformly.
    #[cfg_attr(feature = "cli", value(name = "circle"))]
    Circle,
}

/// Shapes drawn when nothing else is configured, in drawing order.
pub const DEFAULT_SHAPES: [Shape; 3] = [Shape::LetterM, Shape::Circle, Shape::LetterN];

impl Shape {
    pub fn title(&self) -> &'static str {
        match self {
            Shape::LetterM => "Trajectory of the Letter \"M\" by 2R Manipulator",
            Shape::LetterN => "Trajectory of the Letter \"N\" by 2R Manipulator",
            Shape::Circle => "Trajectory of a Circle by 2R Manipulator",
        }
    }

    /// Short name, also used as the plot file name.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::LetterM => "letter_m",
            Shape::LetterN => "letter_n",
            Shape::Circle => "circle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shape {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "letter_m" => Ok(Shape::LetterM),
            "n" | "letter_n" => Ok(Shape::LetterN),
            "circle" => Ok(Shape::Circle),
            _ => Err(ParameterError::UnknownShape(s.to_string())),
        }
    }
}

/// Vertical line up, diagonal down to the middle, diagonal up, vertical line down.
pub fn letter_m() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 8.0),
        Point::new(3.0, 4.0),
        Point::new(6.0, 8.0),
        Point::new(6.0, 0.0),
    ]
}

/// Vertical line up, diagonal down, vertical line up.
pub fn letter_n() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 8.0),
        Point::new(6.0, 0.0),
        Point::new(6.0, 8.0),
    ]
}

/// `samples` points on the circle of the given radius centered at the base. Angles are spaced
/// evenly from 0 to 2 pi with both ends included, so the first and the last point coincide
/// and the polyline closes.
pub fn circle(radius: f64, samples: usize) -> Vec<Point> {
    let step = if samples > 1 { 2.0 * PI / (samples - 1) as f64 } else { 0.0 };
    (0..samples)
        .map(|i| {
            let theta = step * i as f64;
            Point::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}
