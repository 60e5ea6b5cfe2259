//! SVG plot of a trajectory: targets against the positions recomputed by forward kinematics.
//!
//! Targets are drawn in blue as circles joined by a line, recomputed positions in red as crosses
//! joined by a line. The plot also shows the reachable annulus of the arm and the arm itself in
//! the pose of the first solved point. World y points up, so y is negated for SVG.

use std::io;
use std::path::Path as FilePath;

use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};
use svg::Document;

use crate::kinematic_traits::{Kinematics, Point};
use crate::kinematics_impl::TwoLinkKinematics;
use crate::trajectory::Trajectory;

const ORIGINAL_COLOR: &str = "blue";
const RECALCULATED_COLOR: &str = "red";
const ARM_COLOR: &str = "dimgray";
const GRID_COLOR: &str = "lightgray";

/// Scale dependent sizes, derived from the plot half-width.
struct Style {
    limit: f64,
    stroke: f64,
    marker: f64,
    font: f64,
}

impl Style {
    fn new(limit: f64) -> Self {
        Style {
            limit,
            stroke: limit / 200.0,
            marker: limit / 80.0,
            font: limit / 25.0,
        }
    }

    // Roughly ten grid lines per half-width.
    fn grid_step(&self) -> f64 {
        (self.limit / 10.0).ceil().max(1.0)
    }
}

fn polyline(points: &[Point], color: &str, width: f64) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let data = rest.iter()
        .fold(Data::new().move_to((first.x, -first.y)), |data, p| data.line_to((p.x, -p.y)));
    Some(Path::new()
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", width)
        .set("d", data))
}

fn line(from: (f64, f64), to: (f64, f64), color: &str, width: f64) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", color)
        .set("stroke-width", width)
}

fn circle_marker(p: &Point, style: &Style) -> Circle {
    Circle::new()
        .set("cx", p.x)
        .set("cy", -p.y)
        .set("r", style.marker)
        .set("fill", ORIGINAL_COLOR)
}

fn cross_marker(p: &Point, style: &Style) -> Group {
    let m = style.marker;
    let (x, y) = (p.x, -p.y);
    Group::new()
        .add(line((x - m, y - m), (x + m, y + m), RECALCULATED_COLOR, style.stroke))
        .add(line((x - m, y + m), (x + m, y - m), RECALCULATED_COLOR, style.stroke))
}

fn text(x: f64, y: f64, size: f64, anchor: &str, content: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-size", size)
        .set("font-family", "sans-serif")
        .set("text-anchor", anchor)
        .add(svg::node::Text::new(content))
}

fn grid(style: &Style) -> Group {
    let limit = style.limit;
    let step = style.grid_step();
    let mut group = Group::new();
    let count = (limit / step).floor() as i64;
    for i in -count..=count {
        let at = i as f64 * step;
        let (color, width) = if i == 0 { ("black", style.stroke) } else { (GRID_COLOR, style.stroke / 2.0) };
        group = group
            .add(line((at, -limit), (at, limit), color, width))
            .add(line((-limit, at), (limit, at), color, width));
    }
    group
}

fn workspace(robot: &TwoLinkKinematics, style: &Style) -> Group {
    let p = robot.parameters();
    let mut group = Group::new();
    for radius in [p.min_reach(), p.max_reach()] {
        if radius > 0.0 {
            group = group.add(Circle::new()
                .set("cx", 0.0)
                .set("cy", 0.0)
                .set("r", radius)
                .set("fill", "none")
                .set("stroke", ARM_COLOR)
                .set("stroke-width", style.stroke / 2.0)
                .set("stroke-dasharray", format!("{} {}", style.marker, style.marker)));
        }
    }
    group
}

fn legend(style: &Style) -> Group {
    let x = -style.limit + style.font;
    let y = -style.limit + style.font;
    let width = style.font * 7.0;
    Group::new()
        .add(Rectangle::new()
            .set("x", x - style.font / 2.0)
            .set("y", y - style.font)
            .set("width", width)
            .set("height", style.font * 3.0)
            .set("fill", "white")
            .set("stroke", GRID_COLOR)
            .set("stroke-width", style.stroke))
        .add(line((x, y - style.font / 3.0), (x + style.font, y - style.font / 3.0), ORIGINAL_COLOR, style.stroke * 2.0))
        .add(text(x + style.font * 1.5, y, style.font, "start", "Original"))
        .add(line((x, y + style.font * 0.9), (x + style.font, y + style.font * 0.9), RECALCULATED_COLOR, style.stroke * 2.0))
        .add(text(x + style.font * 1.5, y + style.font * 1.2, style.font, "start", "Recalculated"))
}

/// Builds the SVG document for the trajectory computed with the given arm.
pub fn render(trajectory: &Trajectory, robot: &TwoLinkKinematics) -> Document {
    let style = Style::new(robot.parameters().max_reach() + 1.0);
    let limit = style.limit;
    let margin = style.font * 2.0;

    let mut document = Document::new()
        .set("viewBox", format!("{} {} {} {}",
                                -limit - margin, -limit - margin * 1.5,
                                2.0 * limit + margin * 2.0, 2.0 * limit + margin * 2.5))
        .set("width", "20cm")
        .set("height", "20cm")
        .add(Rectangle::new()
            .set("x", -limit)
            .set("y", -limit)
            .set("width", 2.0 * limit)
            .set("height", 2.0 * limit)
            .set("fill", "white")
            .set("stroke", "black")
            .set("stroke-width", style.stroke))
        .add(grid(&style))
        .add(workspace(robot, &style));

    if let Some(first) = trajectory.solutions.first() {
        let joints: Vec<Point> = robot.forward_with_joint_positions(&first.joints).to_vec();
        if let Some(arm) = polyline(&joints, ARM_COLOR, style.stroke * 3.0) {
            document = document.add(arm.set("stroke-linecap", "round"));
        }
    }

    let targets = trajectory.targets();
    let reached = trajectory.reached();
    if let Some(path) = polyline(&targets, ORIGINAL_COLOR, style.stroke * 2.0) {
        document = document.add(path);
    }
    if let Some(path) = polyline(&reached, RECALCULATED_COLOR, style.stroke * 2.0) {
        document = document.add(path);
    }
    for p in &targets {
        document = document.add(circle_marker(p, &style));
    }
    for p in &reached {
        document = document.add(cross_marker(p, &style));
    }

    document
        .add(legend(&style))
        .add(text(0.0, -limit - margin * 0.5, style.font * 1.2, "middle", &trajectory.title))
        .add(text(0.0, limit + margin * 0.8, style.font, "middle", "X"))
        .add(text(-limit - margin * 0.5, 0.0, style.font, "middle", "Y"))
}

/// Renders the trajectory and writes it to the SVG file.
pub fn save<P: AsRef<FilePath>>(trajectory: &Trajectory, robot: &TwoLinkKinematics, path: P) -> io::Result<()> {
    svg::save(path, &render(trajectory, robot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Parameters;
    use crate::shapes::letter_n;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_render_letter_n() {
        let robot = TwoLinkKinematics::new(Parameters::reference());
        let trajectory = Trajectory::compute(&robot, "Letter N", &letter_n());
        let svg = render(&trajectory, &robot).to_string();

        assert!(svg.contains("Letter N"));
        assert!(svg.contains("Original"));
        assert!(svg.contains("Recalculated"));
        // Four target markers plus the outer workspace circle (equal links, no dead zone).
        assert_eq!(count(&svg, "<circle"), 5);
        // Targets, recomputed positions and the arm.
        assert_eq!(count(&svg, "<path"), 3);
    }

    #[test]
    fn test_render_without_solutions() {
        let robot = TwoLinkKinematics::new(Parameters::unequal_5_3());
        let trajectory = Trajectory::compute(&robot, "Nothing", &[Point::new(100.0, 0.0)]);
        let svg = render(&trajectory, &robot).to_string();

        assert_eq!(count(&svg, "<path"), 0);
        // Both bounds of the annulus are drawn.
        assert_eq!(count(&svg, "<circle"), 2);
    }
}
