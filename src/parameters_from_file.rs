//! Supports reading arm parameters and drawing configuration from YAML file (optional)

use std::path::Path;

use yaml_rust2::{Yaml, YamlLoader};

use crate::config::DrawingConfig;
use crate::parameter_error::ParameterError;
use crate::parameters::Parameters;
use crate::shapes::Shape;

const GEOMETRIC_PARAMETERS: &str = "two_link_geometric_parameters";

impl Parameters {
    /// Read the arm link lengths from YAML file. YAML file like this is supported:
    /// ```yaml
    /// two_link_geometric_parameters:
    ///   l1: 5.0
    ///   l2: 3.0
    /// ```
    /// This is the same format `to_yaml` produces.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let doc = load_document(contents)?;
        let gp = &doc[GEOMETRIC_PARAMETERS];
        if gp.is_badvalue() {
            return Err(ParameterError::MissingField(GEOMETRIC_PARAMETERS.to_string()));
        }
        parameters_from(gp)
    }
}

impl DrawingConfig {
    /// Read the drawing configuration from YAML file. All keys are optional, missing ones
    /// take the defaults:
    /// ```yaml
    /// two_link_geometric_parameters:
    ///   l1: 5
    ///   l2: 5
    /// shapes: [m, circle, n]
    /// circle_radius: 5
    /// sample_count: 100
    /// tolerance: 1.0e-9
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let mut config = DrawingConfig::default();
        let doc = load_document(contents)?;
        if doc.is_null() {
            return Ok(config);
        }

        let gp = &doc[GEOMETRIC_PARAMETERS];
        if !gp.is_badvalue() {
            config.parameters = parameters_from(gp)?;
        }

        let shapes = &doc["shapes"];
        if !shapes.is_badvalue() {
            let list = shapes.as_vec().ok_or_else(|| {
                ParameterError::ParseError("'shapes' must be a list".to_string())
            })?;
            config.shapes = list
                .iter()
                .map(|item| match item.as_str() {
                    Some(name) => name.parse::<Shape>(),
                    None => Err(ParameterError::ParseError(format!("shape must be a string (got {:?})", item))),
                })
                .collect::<Result<Vec<_>, _>>()?;
        }

        if let Some(radius) = optional_number(&doc, "circle_radius")? {
            config.circle_radius = radius;
        }
        if let Some(tolerance) = optional_number(&doc, "tolerance")? {
            config.tolerance = tolerance;
        }

        let samples = &doc["sample_count"];
        if !samples.is_badvalue() {
            let count = samples.as_i64().ok_or_else(|| {
                ParameterError::ParseError("'sample_count' must be an integer".to_string())
            })?;
            config.sample_count = usize::try_from(count)
                .map_err(|_| ParameterError::ParseError(format!("'sample_count' must not be negative (got {})", count)))?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// First document of the YAML stream, `Yaml::Null` if the stream is empty.
fn load_document(contents: &str) -> Result<Yaml, ParameterError> {
    let docs = YamlLoader::load_from_str(contents)
        .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
    Ok(docs.into_iter().next().unwrap_or(Yaml::Null))
}

fn parameters_from(gp: &Yaml) -> Result<Parameters, ParameterError> {
    let l1 = optional_number(gp, "l1")?.ok_or_else(|| ParameterError::MissingField("l1".to_string()))?;
    let l2 = optional_number(gp, "l2")?.ok_or_else(|| ParameterError::MissingField("l2".to_string()))?;
    Parameters::new(l1, l2)
}

/// Numeric value under the key, accepting both integers and reals.
fn optional_number(node: &Yaml, key: &str) -> Result<Option<f64>, ParameterError> {
    match &node[key] {
        Yaml::BadValue => Ok(None),
        Yaml::Integer(value) => Ok(Some(*value as f64)),
        real @ Yaml::Real(_) => real.as_f64().map(Some).ok_or_else(|| {
            ParameterError::ParseError(format!("'{}' is not a valid number", key))
        }),
        other => Err(ParameterError::ParseError(format!("'{}' must be a number (got {:?})", key, other))),
    }
}
