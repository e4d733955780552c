//! Supports extracting chain parameters from YAML file (optional)

use std::path::Path;

use regex::Regex;
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

use crate::frame::body_screws_from_space;
use crate::kinematic_traits::{Screws, Transform, Twist};
use crate::parameter_error::ParameterError;
use crate::parameters::poe_kinematics::{ChainParameters, DEFAULT_TOLERANCE};

impl ChainParameters {
    /// Read the chain parameters from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Spatial RPR chain
    /// home:
    ///   - [-1, 0, 0, 0]
    ///   - [0, 1, 0, 6]
    ///   - [0, 0, -1, 2]
    ///   - [0, 0, 0, 1]
    /// space_screws:
    ///   - [0, 0, 1, 4, 0, 0]
    ///   - [0, 0, 0, 0, 1, 0]
    ///   - [0, 0, -1, -6, 0, -0.1]
    /// body_screws:
    ///   - [0, 0, -1, 2, 0, 0]
    ///   - [0, 0, 0, 0, 1, 0]
    ///   - [0, 0, 1, 0, 0, 0.1]
    /// joints: [deg(90), 3, 3.14159265358979]
    /// tolerance: 0.000001
    /// ```
    /// `body_screws` are optional and derived from `space_screws` if missing.
    /// `tolerance` is optional and defaults to 0.01.
    ///
    /// Joint values are radians (or length units for prismatic joints). The deg(angle)
    /// notation is accepted for angles in degrees.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let parameters = Self::from_yaml_str(&contents)?;
        debug!(path = %path.display(), dof = parameters.dof(), "chain parameters loaded");
        Ok(parameters)
    }

    /// Same as [`ChainParameters::from_yaml_file`] but reads from the string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::ParseError("Empty YAML document".to_string()))?;

        let home = read_home(&doc["home"])?;
        let space_screws = read_screws(&doc["space_screws"], "space_screws")?;

        let body_screws = match &doc["body_screws"] {
            Yaml::BadValue => {
                debug!("body_screws not given, deriving from space_screws");
                body_screws_from_space(&home, &space_screws)
            }
            node => read_screws(node, "body_screws")?,
        };

        let joints = read_joints(&doc["joints"])?;

        let tolerance = match &doc["tolerance"] {
            Yaml::BadValue => DEFAULT_TOLERANCE,
            node => read_number(node, "tolerance")?,
        };
        if !(tolerance >= 0.0) {
            return Err(ParameterError::ParseError(format!(
                "tolerance must be non-negative (got {})", tolerance
            )));
        }

        Ok(ChainParameters { home, space_screws, body_screws, joints, tolerance })
    }
}

fn read_number(node: &Yaml, field: &str) -> Result<f64, ParameterError> {
    match node {
        Yaml::Integer(value) => Ok(*value as f64),
        Yaml::Real(_) => node.as_f64()
            .ok_or_else(|| ParameterError::ParseError(format!("{}: not a number", field))),
        Yaml::BadValue => Err(ParameterError::MissingField(field.to_string())),
        other => Err(ParameterError::ParseError(format!("{}: expected number, found {:?}", field, other))),
    }
}

fn read_row(node: &Yaml, field: &str, expected: usize) -> Result<Vec<f64>, ParameterError> {
    let items = match node {
        Yaml::Array(items) => items,
        Yaml::BadValue => return Err(ParameterError::MissingField(field.to_string())),
        other => return Err(ParameterError::ParseError(format!("{}: expected list, found {:?}", field, other))),
    };
    if items.len() != expected {
        return Err(ParameterError::InvalidLength { field: field.to_string(), expected, found: items.len() });
    }
    items.iter()
        .enumerate()
        .map(|(i, item)| read_number(item, &format!("{}[{}]", field, i)))
        .collect()
}

pub(crate) fn read_home(node: &Yaml) -> Result<Transform, ParameterError> {
    let rows = match node {
        Yaml::Array(rows) => rows,
        Yaml::BadValue => return Err(ParameterError::MissingField("home".to_string())),
        other => return Err(ParameterError::ParseError(format!("home: expected list of rows, found {:?}", other))),
    };
    if rows.len() != 4 {
        return Err(ParameterError::InvalidLength { field: "home".to_string(), expected: 4, found: rows.len() });
    }
    let mut home = Transform::zeros();
    for (r, row) in rows.iter().enumerate() {
        let values = read_row(row, &format!("home[{}]", r), 4)?;
        for (c, value) in values.into_iter().enumerate() {
            home[(r, c)] = value;
        }
    }
    Ok(home)
}

fn read_screws(node: &Yaml, field: &str) -> Result<Screws, ParameterError> {
    match node {
        // Chain without joints
        Yaml::Null => Ok(Vec::new()),
        Yaml::Array(rows) => rows.iter()
            .enumerate()
            .map(|(i, row)| {
                read_row(row, &format!("{}[{}]", field, i), 6).map(|v| Twist::from_column_slice(&v))
            })
            .collect(),
        Yaml::BadValue => Err(ParameterError::MissingField(field.to_string())),
        other => Err(ParameterError::ParseError(format!("{}: expected list of rows, found {:?}", field, other))),
    }
}

pub(crate) fn read_joints(node: &Yaml) -> Result<Vec<f64>, ParameterError> {
    let items = match node {
        Yaml::Array(items) => items,
        Yaml::BadValue => return Err(ParameterError::MissingField("joints".to_string())),
        other => return Err(ParameterError::ParseError(format!("joints: expected list, found {:?}", other))),
    };
    let degrees = Regex::new(r"^deg\(\s*(-?\d+(\.\d+)?)\s*\)$")
        .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;

    items.iter()
        .enumerate()
        .map(|(i, item)| match item {
            Yaml::String(text) => parse_angle(&degrees, text),
            _ => read_number(item, &format!("joints[{}]", i)),
        })
        .collect()
}

fn parse_angle(degrees: &Regex, text: &str) -> Result<f64, ParameterError> {
    let caps = degrees.captures(text.trim())
        .ok_or_else(|| ParameterError::WrongAngle(text.to_string()))?;
    let value = caps.get(1)
        .ok_or_else(|| ParameterError::WrongAngle(format!("Bad representation: {}", text)))?
        .as_str();
    let value: f64 = value.parse()
        .map_err(|_| ParameterError::WrongAngle(text.to_string()))?;
    Ok(value.to_radians())
}
