use std::f64::consts::PI;

use rs_2r_kinematics::kinematic_traits::{ElbowConfiguration, Joints, Kinematics, Point, JOINTS_AT_ZERO};
use rs_2r_kinematics::kinematics_impl::TwoLinkKinematics;
use rs_2r_kinematics::parameters::Parameters;
use rs_2r_kinematics::utils::{dump_joints, dump_solutions};

fn main() {
    let robot = TwoLinkKinematics::new(Parameters::reference());
    println!("\nArm stretched along the x axis:");
    dump_joints(&JOINTS_AT_ZERO);
    let tip = robot.forward(&JOINTS_AT_ZERO);
    println!("reaches x = {:.3}, y = {:.3}", tip.x, tip.y);

    let joints: Joints = [PI / 6.0, PI / 3.0]; // Joints are alias of [f64; 2]
    println!("\nInitial joints:");
    dump_joints(&joints);
    let target: Point = robot.forward(&joints); // Point is alias of nalgebra::Point2<f64>

    println!("\nElbow-up solution (theta2 is never negative):");
    match robot.inverse(&target) {
        Ok(solution) => dump_joints(&solution),
        Err(e) => println!("{}", e),
    }

    println!("\nElbow-down solution:");
    if let Ok(solution) = robot.inverse_with(&target, ElbowConfiguration::Down) {
        dump_joints(&solution);
    }

    println!("\nAll solutions, elbow-up first:");
    if let Ok(solutions) = robot.inverse_all(&target) {
        dump_solutions(&solutions);
    }

    println!("\nPen plotter arm with two 8 cm links, folded to reach its own base:");
    let plotter = TwoLinkKinematics::new(Parameters::brachiograph());
    if let Ok(solution) = plotter.inverse(&Point::origin()) {
        dump_joints(&solution);
    }

    println!("\nTargets outside the reachable annulus are rejected:");
    let robot = TwoLinkKinematics::new(Parameters::unequal_5_3());
    for target in [Point::new(9.0, 0.0), Point::new(1.0, 0.0)] {
        if let Err(e) = robot.inverse(&target) {
            println!("{}", e);
        }
    }
}
