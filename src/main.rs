use log::info;

use parametric_bem2d::{
    BemError, BemSpace, Panel, ParametrizedMesh,
    disc::norms::boundary_l2_error,
    initialization::{
        initialize_mesh, initialize_params_by_file, initialize_quad_rule, initialize_space,
    },
    io::write_to_csv::{write_coefficients, write_quad_rule},
};

fn main() -> Result<(), BemError> {
    env_logger::init();
    let param_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "inputs/bemparam.json".to_string());
    let params = initialize_params_by_file(&param_file)?;
    let space = initialize_space(&params)?;
    let mesh = initialize_mesh(&params)?;
    let rule = initialize_quad_rule(&params);
    info!(
        "{} panels (split {}), space dimension {}",
        mesh.num_panels(),
        mesh.split(),
        space.space_dim(mesh.num_panels())
    );
    let boundary_length: f64 = mesh.panels().iter().map(|panel| panel.length()).sum();
    info!("boundary length {boundary_length:.6}");

    let field = |x: f64, y: f64| (x * y).sin() + x;
    let coeffs = space.interpolate(&field, &mesh)?;
    let error = boundary_l2_error(space.as_ref(), coeffs.view(), &field, &mesh, &rule)?;
    info!("boundary L2 interpolation error: {error:.3e}");

    if let Some(output_file) = &params.output_file {
        write_coefficients(coeffs.view(), output_file)?;
        info!("wrote {} coefficients to {output_file}", coeffs.len());
    }
    if let Some(quad_rule_file) = &params.quad_rule_file {
        write_quad_rule(&rule, quad_rule_file)?;
        info!("wrote {}-point quadrature rule to {quad_rule_file}", rule.n());
    }
    Ok(())
}
