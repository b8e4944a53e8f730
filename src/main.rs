use anyhow::Result;
use rs_dh_kinematics::constraints::Constraints;
use rs_dh_kinematics::kinematic_traits::{JOINTS_AT_ZERO, Joints, Kinematics};
use rs_dh_kinematics::kinematics_impl::DHKinematics;
use rs_dh_kinematics::parameters::dh_kinematics::Parameters;
use rs_dh_kinematics::pose::Pose;
use rs_dh_kinematics::utils::{dump_joints, dump_pose};

/// Usage example.
fn main() -> Result<()> {
    let robot = DHKinematics::new_with_constraints(Parameters::youbot(), Constraints::youbot());

    println!("Home pose, all joints at zero:");
    let home: Pose = robot.forward(&JOINTS_AT_ZERO)?;
    dump_pose(&home);

    let joints: Joints = [0.5, 0.3, -0.6, 0.4, 0.8];
    println!("Forward kinematics of:");
    dump_joints(&joints);
    let pose = robot.forward(&joints)?;
    dump_pose(&pose);

    println!("Inverse kinematics back to that pose:");
    match robot.inverse(&pose) {
        Ok(solution) => {
            dump_joints(&solution);
            let reached = robot.forward(&solution)?;
            println!(
                "Residual: {:.2e} m, {:.2e} rad",
                pose.distance_to(&reached),
                pose.angular_error_to(&reached)
            );
        }
        Err(error) => println!("No solution: {}", error),
    }

    println!("A pose far outside the workspace fails cleanly:");
    let unreachable = Pose::new(2.0, 0.0, 0.0, std::f64::consts::PI, 0.0, 0.0);
    match robot.inverse(&unreachable) {
        Ok(solution) => dump_joints(&solution),
        Err(error) => println!("No solution: {}", error),
    }

    // Quick view of the arm geometry as YAML.
    println!("Geometry:\n{}", Parameters::youbot().to_yaml());
    Ok(())
}
