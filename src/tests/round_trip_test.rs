#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::kinematic_traits::{ElbowConfiguration, Kinematics, Point};
    use crate::kinematics_error::KinematicsError;
    use crate::kinematics_impl::TwoLinkKinematics;
    use crate::parameters::Parameters;
    use crate::tests::test_utils;

    const SAMPLES: usize = 20_000;
    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..SAMPLES {
            let parameters = test_utils::random_parameters(&mut rng);
            let robot = TwoLinkKinematics::new(parameters);
            let target = test_utils::random_reachable_point(&mut rng, &parameters);

            let joints = robot.inverse(&target).unwrap_or_else(|e| {
                panic!("{:?} must be reachable for {:?}: {}", target, parameters, e)
            });
            let reached = robot.forward(&joints);
            assert!((reached - target).norm() < TOLERANCE,
                    "Round trip failed for {:?} on {:?}: reached {:?}", target, parameters, reached);
        }
    }

    #[test]
    fn test_round_trip_near_base() {
        // Equal links reach the base, the arm is almost folded there.
        let robot = TwoLinkKinematics::new(Parameters::reference());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..SAMPLES {
            let distance = 10f64.powf(rng.gen_range(-12.0..=-3.0));
            let angle = rng.gen_range(-PI..PI);
            let target = Point::new(distance * angle.cos(), distance * angle.sin());

            let joints = robot.inverse(&target).expect("Target must be reachable");
            assert!(joints[1] >= 0.0 && joints[1] <= PI);
            let reached = robot.forward(&joints);
            assert!((reached - target).norm() < TOLERANCE,
                    "Round trip failed for {:?} at distance {:e}: reached {:?}", target, distance, reached);
        }
    }

    #[test]
    fn test_round_trip_near_dead_zone() {
        let robot = TwoLinkKinematics::new(Parameters::unequal_5_3());
        for offset in [1e-12, 1e-9, 1e-6, 1e-3] {
            for angle in [0.0, 1.0, -2.5] {
                let distance = 2.0 + offset;
                let target = Point::new(distance * f64::cos(angle), distance * f64::sin(angle));
                let joints = robot.inverse(&target).expect("Target must be reachable");
                assert!((robot.forward(&joints) - target).norm() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_elbow_up_and_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..SAMPLES {
            let parameters = test_utils::random_parameters(&mut rng);
            let robot = TwoLinkKinematics::new(parameters);
            let target = test_utils::random_reachable_point(&mut rng, &parameters);

            let [theta1, theta2] = robot.inverse(&target).expect("Target must be reachable");
            assert!((0.0..=PI).contains(&theta2), "theta2 = {} is not elbow-up", theta2);
            assert!(theta1 > -PI && theta1 <= PI, "theta1 = {} is not normalized", theta1);
        }
    }

    #[test]
    fn test_elbow_down_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..SAMPLES {
            let parameters = test_utils::random_parameters(&mut rng);
            let robot = TwoLinkKinematics::new(parameters);
            let target = test_utils::random_reachable_point(&mut rng, &parameters);

            let joints = robot.inverse_with(&target, ElbowConfiguration::Down).expect("Target must be reachable");
            assert!(joints[1] <= 0.0);
            assert!((robot.forward(&joints) - target).norm() < TOLERANCE);

            for solution in robot.inverse_all(&target).expect("Target must be reachable") {
                assert!((robot.forward(&solution) - target).norm() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_unreachable_random() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..SAMPLES {
            let parameters = test_utils::random_parameters(&mut rng);
            let robot = TwoLinkKinematics::new(parameters);
            let angle = rng.gen_range(-PI..PI);

            let beyond = parameters.max_reach() * rng.gen_range(1.000_001..3.0);
            let far = Point::new(beyond * angle.cos(), beyond * angle.sin());
            assert!(matches!(robot.inverse(&far), Err(KinematicsError::Unreachable { .. })),
                    "{:?} must be unreachable for {:?}", far, parameters);

            if parameters.min_reach() > 1e-3 {
                let inside = parameters.min_reach() * rng.gen_range(0.0..0.999);
                let near = Point::new(inside * angle.cos(), inside * angle.sin());
                assert!(matches!(robot.inverse(&near), Err(KinematicsError::Unreachable { .. })),
                        "{:?} must be in the dead zone of {:?}", near, parameters);
            }
        }
    }

    #[test]
    fn test_reachability_boundary() {
        let robot = TwoLinkKinematics::new(Parameters::reference());
        assert_eq!(robot.inverse(&Point::new(10.0, 0.0)), Ok([0.0, 0.0]));
        assert!(matches!(robot.inverse(&Point::new(10.0 + 1e-9, 0.0)),
            Err(KinematicsError::Unreachable { .. })));
        assert!(matches!(robot.inverse(&Point::new(6.0, 8.0 + 1e-9)),
            Err(KinematicsError::Unreachable { .. })));
    }

    #[test]
    fn test_dead_zone_rejected() {
        // The lower bound |l1 - l2| is checked as well.
        let robot = TwoLinkKinematics::new(Parameters::unequal_5_3());
        assert!(matches!(robot.inverse(&Point::new(1.0, 0.0)),
            Err(KinematicsError::Unreachable { .. })));
        assert!(robot.inverse(&Point::new(2.0, 0.0)).is_ok());
    }

    #[test]
    fn test_mirror_symmetry() {
        let robot = TwoLinkKinematics::new(Parameters::reference());
        for (x, y) in [(3.0, 4.0), (6.0, 2.0), (-2.0, 7.0), (1.0, 0.5), (-6.0, 5.0)] {
            let upper = robot.inverse(&Point::new(x, y)).expect("reachable");
            let lower = robot.inverse(&Point::new(x, -y)).expect("reachable");

            // Elbow-up only, so the mirror shares theta2 rather than flipping it.
            assert!((upper[1] - lower[1]).abs() < 1e-12);

            // Reflecting both joints of the upper solution reaches the mirrored target
            // and is the elbow-down solution there.
            let reflected = [-upper[0], -upper[1]];
            assert!((robot.forward(&reflected) - Point::new(x, -y)).norm() < TOLERANCE);
            let down = robot.inverse_with(&Point::new(x, -y), ElbowConfiguration::Down).expect("reachable");
            assert!(test_utils::joints_approx_equal(&down, &reflected, 1e-12));
        }
    }

    #[test]
    fn test_folded_at_origin() {
        let robot = TwoLinkKinematics::new(Parameters::reference());
        let joints = robot.inverse(&Point::origin()).expect("Origin is reachable with equal links");
        assert_eq!(joints[0], 0.0);
        assert!((joints[1] - PI).abs() < 1e-12);
        assert_eq!(robot.inverse_all(&Point::origin()).expect("reachable").len(), 1);
    }
}
