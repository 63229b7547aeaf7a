use log::info;
use nalgebra::Vector2;

use crate::{
    disc::{
        gauss_points::{QuadRule, get_gauss_qr},
        mesh::panel_mesh::PanelMesh,
        space::{BemSpace, build_space},
    },
    error::BemError,
    io::param_parser::BemParamParser,
};

pub fn initialize_params_by_file(file_path: &str) -> Result<BemParamParser, BemError> {
    let params = BemParamParser::parse(file_path)?;
    info!("read parameters from {file_path}: {params:?}");
    Ok(params)
}
pub fn initialize_space(params: &BemParamParser) -> Result<Box<dyn BemSpace>, BemError> {
    build_space(params.space_family, params.polynomial_order)
}
/// Circle of the given radius centered at the origin, or an annulus when an
/// inner radius is set.
pub fn initialize_mesh(params: &BemParamParser) -> Result<PanelMesh, BemError> {
    let center = Vector2::zeros();
    match params.inner_radius {
        Some(inner_radius) => PanelMesh::annulus(
            center,
            params.radius,
            inner_radius,
            params.num_panels,
            params.inner_num_panels.unwrap_or(params.num_panels),
        ),
        None => PanelMesh::circle(center, params.radius, params.num_panels),
    }
}
pub fn initialize_quad_rule(params: &BemParamParser) -> QuadRule {
    get_gauss_qr(params.quadrature_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::mesh::ParametrizedMesh;

    #[test]
    fn test_initialize_from_params() {
        let params = BemParamParser::from_json(
            r#"{"space_family": "continuous", "polynomial_order": 2, "quadrature_order": 5,
                "num_panels": 10, "radius": 1.0, "inner_radius": 0.4}"#,
        )
        .unwrap();
        let space = initialize_space(&params).unwrap();
        assert_eq!(space.q(), 3);
        let mesh = initialize_mesh(&params).unwrap();
        assert_eq!(mesh.num_panels(), 20);
        assert_eq!(mesh.split(), 10);
        assert_eq!(initialize_quad_rule(&params).n(), 5);
    }

    #[test]
    fn test_unsupported_order_in_params() {
        let params = BemParamParser::from_json(
            r#"{"space_family": "discontinuous", "polynomial_order": 3, "num_panels": 4, "radius": 1.0}"#,
        )
        .unwrap();
        assert!(matches!(
            initialize_space(&params),
            Err(BemError::InvalidOrder { order: 3, .. })
        ));
    }
}
