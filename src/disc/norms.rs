use ndarray::ArrayView1;

use crate::{
    disc::{gauss_points::QuadRule, mesh::ParametrizedMesh, space::BemSpace},
    error::BemError,
};

/// L2 norm along the boundary of `func - u_h`, where `u_h` has coefficients
/// `coeffs` in `space`. Each panel integral uses `rule` in the panel parameter.
pub fn boundary_l2_error(
    space: &dyn BemSpace,
    coeffs: ArrayView1<f64>,
    func: &dyn Fn(f64, f64) -> f64,
    mesh: &dyn ParametrizedMesh,
    rule: &QuadRule,
) -> Result<f64, BemError> {
    let mut error_sq = 0.0;
    for n in 1..=mesh.num_panels() {
        let panel = mesh.panel(n - 1);
        for (&t, &w) in rule.points().iter().zip(rule.weights().iter()) {
            let point = panel.evaluate(t);
            let diff = func(point.x, point.y) - space.evaluate_on_panel(coeffs, n, t, mesh)?;
            error_sq += w * diff * diff * panel.derivative(t).norm();
        }
    }
    Ok(error_sq.sqrt())
}
