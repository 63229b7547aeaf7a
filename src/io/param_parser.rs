use std::fs;

use serde::Deserialize;

use crate::{disc::space::SpaceFamily, error::BemError};

fn default_quadrature_order() -> usize {
    16
}

#[derive(Deserialize, Debug)]
pub struct BemParamParser {
    pub space_family: SpaceFamily,
    pub polynomial_order: usize,
    #[serde(default = "default_quadrature_order")]
    pub quadrature_order: usize,
    pub num_panels: usize,
    pub radius: f64,
    pub inner_radius: Option<f64>,
    pub inner_num_panels: Option<usize>,
    pub output_file: Option<String>,
    pub quad_rule_file: Option<String>,
}
impl BemParamParser {
    pub fn parse(file_path: &str) -> Result<Self, BemError> {
        let file_content = fs::read_to_string(file_path)?;
        Self::from_json(&file_content)
    }
    pub fn from_json(content: &str) -> Result<Self, BemError> {
        let param: BemParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}
