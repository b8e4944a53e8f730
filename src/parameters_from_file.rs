//! Supports reading the arm description from YAML file (optional)

use std::path::Path;

use yaml_rust2::{Yaml, YamlLoader};

use crate::constraints::Constraints;
use crate::dh::LinkParameters;
use crate::kinematic_traits::{DOF, Joints};
use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::{Parameters, SolverConfig};

/// Complete arm description as read from a file: geometry, joint limits
/// and solver tuning.
#[derive(Debug, Clone)]
pub struct RobotDescription {
    pub parameters: Parameters,
    pub constraints: Constraints,
    pub solver: SolverConfig,
}

impl RobotDescription {
    /// Read the arm description from a YAML file like this (meters and
    /// radians; `joint_limits` and `solver` are optional):
    /// ```yaml
    /// dh_parameters:
    ///   - { theta: 0.0, d: 0.147, alpha: 1.5707963267948966, r: 0.033 }
    ///   - { theta: 0.0, d: 0.0, alpha: 0.0, r: 0.155 }
    ///   - { theta: 0.0, d: 0.0, alpha: 0.0, r: 0.135 }
    ///   - { theta: 0.0, d: 0.0, alpha: 1.5707963267948966, r: 0.0 }
    ///   - { theta: 0.0, d: 0.218, alpha: 0.0, r: 0.0 }
    /// joint_limits:
    ///   from: [-2.9496, -1.1345, -2.6354, -1.7890, -2.9234]
    ///   to: [2.9496, 1.5708, 2.5482, 1.7890, 2.9234]
    /// solver:
    ///   max_iterations: 500
    ///   position_tolerance: 0.0001
    ///   orientation_tolerance: 0.001
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let root = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let parameters = parse_parameters(&root["dh_parameters"])?;
        let constraints = match &root["joint_limits"] {
            Yaml::BadValue => Constraints::unconstrained(),
            limits => parse_constraints(limits)?,
        };
        let solver = match &root["solver"] {
            Yaml::BadValue => SolverConfig::default(),
            solver => parse_solver(solver)?,
        };

        Ok(RobotDescription {
            parameters,
            constraints,
            solver,
        })
    }
}

fn parse_parameters(node: &Yaml) -> Result<Parameters, ParameterError> {
    let rows = node
        .as_vec()
        .ok_or_else(|| ParameterError::MissingField("dh_parameters".to_string()))?;
    if rows.len() != DOF {
        return Err(ParameterError::InvalidLength {
            expected: DOF,
            found: rows.len(),
        });
    }

    let mut links = [LinkParameters::new(0.0, 0.0, 0.0, 0.0); DOF];
    for (i, row) in rows.iter().enumerate() {
        links[i] = LinkParameters::new(
            number(row, "theta", i)?,
            number(row, "d", i)?,
            number(row, "alpha", i)?,
            number(row, "r", i)?,
        );
    }
    Ok(Parameters { links })
}

fn parse_constraints(node: &Yaml) -> Result<Constraints, ParameterError> {
    let from = angle_list(&node["from"], "joint_limits.from")?;
    let to = angle_list(&node["to"], "joint_limits.to")?;
    Ok(Constraints::new(from, to))
}

fn parse_solver(node: &Yaml) -> Result<SolverConfig, ParameterError> {
    let mut config = SolverConfig::default();

    if let Some(iterations) = node["max_iterations"].as_i64() {
        if iterations <= 0 {
            return Err(ParameterError::ParseError(format!(
                "max_iterations must be positive (got {})",
                iterations
            )));
        }
        config.max_iterations = iterations as usize;
    }
    for (field, target) in [
        ("position_tolerance", &mut config.position_tolerance),
        ("orientation_tolerance", &mut config.orientation_tolerance),
        ("initial_step", &mut config.initial_step),
        ("minimal_step", &mut config.minimal_step),
        ("orientation_weight", &mut config.orientation_weight),
    ] {
        if let Some(value) = as_f64(&node[field]) {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::ParseError(format!(
                    "solver.{} must be positive and finite (got {})",
                    field, value
                )));
            }
            *target = value;
        }
    }
    if let Yaml::Array(_) = node["initial_guess"] {
        config.initial_guess = angle_list(&node["initial_guess"], "solver.initial_guess")?;
    }
    Ok(config)
}

fn angle_list(node: &Yaml, label: &str) -> Result<Joints, ParameterError> {
    let values = node
        .as_vec()
        .ok_or_else(|| ParameterError::MissingField(label.to_string()))?;
    if values.len() != DOF {
        return Err(ParameterError::InvalidLength {
            expected: DOF,
            found: values.len(),
        });
    }
    let mut out: Joints = [0.0; DOF];
    for (i, value) in values.iter().enumerate() {
        out[i] = as_f64(value).ok_or_else(|| {
            ParameterError::ParseError(format!("{}[{}] is not a number", label, i))
        })?;
    }
    Ok(out)
}

fn number(row: &Yaml, field: &str, index: usize) -> Result<f64, ParameterError> {
    as_f64(&row[field]).ok_or_else(|| {
        ParameterError::MissingField(format!("dh_parameters[{}].{}", index, field))
    })
}

// yaml-rust2 keeps integers and reals apart; accept both.
fn as_f64(value: &Yaml) -> Option<f64> {
    value.as_f64().or_else(|| value.as_i64().map(|v| v as f64))
}
