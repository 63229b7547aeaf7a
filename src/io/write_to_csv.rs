use csv::Writer;
use ndarray::ArrayView1;
use serde::Serialize;

use crate::{disc::gauss_points::QuadRule, error::BemError};

#[derive(Serialize)]
struct CoefficientData {
    dof: usize,
    value: f64,
}

#[derive(Serialize)]
struct QuadPointData {
    node: f64,
    weight: f64,
}

/// Writes one `(dof, value)` row per coefficient, DOFs numbered from 1.
pub fn write_coefficients(coeffs: ArrayView1<f64>, filename: &str) -> Result<(), BemError> {
    let mut writer = Writer::from_path(filename)?;
    for (i, &value) in coeffs.iter().enumerate() {
        writer.serialize(CoefficientData { dof: i + 1, value })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_quad_rule(rule: &QuadRule, filename: &str) -> Result<(), BemError> {
    let mut writer = Writer::from_path(filename)?;
    for (&node, &weight) in rule.points().iter().zip(rule.weights().iter()) {
        writer.serialize(QuadPointData { node, weight })?;
    }
    writer.flush()?;
    Ok(())
}
