//! Helper functions

use crate::kinematic_traits::{DOF, Joints};
use crate::pose::Pose;

/// Checks if all elements in the array are finite
pub(crate) fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..DOF {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print a pose, position in meters and orientation in degrees.
#[allow(dead_code)]
pub fn dump_pose(pose: &Pose) {
    println!(
        "[{:6.3} {:6.3} {:6.3}] rpy [{:6.2} {:6.2} {:6.2}]",
        pose.x,
        pose.y,
        pose.z,
        pose.roll.to_degrees(),
        pose.pitch.to_degrees(),
        pose.yaw.to_degrees()
    );
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; DOF]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}
