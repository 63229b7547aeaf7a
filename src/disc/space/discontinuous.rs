use log::debug;
use ndarray::Array1;

use super::{BemSpace, ShapeFunction, check_indices, check_split};
use crate::{disc::mesh::ParametrizedMesh, error::BemError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscontinuousOrder {
    Constant,
    Linear,
}

/// Discontinuous piecewise polynomial space S^-1_p, p = 0 or 1.
///
/// Every panel owns its DOFs. For p = 1 the pair {1/2, t/2} is used; the
/// coefficients produced by [`BemSpace::interpolate`] are the unnormalised sum
/// and difference of the end point values, the factor 1/2 lives in the basis.
#[derive(Clone, Debug)]
pub struct DiscontinuousSpace {
    order: DiscontinuousOrder,
    q: usize,
    reference_shape_functions: Vec<ShapeFunction>,
    reference_shape_function_dots: Vec<ShapeFunction>,
}

fn constant(_t: f64) -> f64 {
    1.0
}
fn half(_t: f64) -> f64 {
    0.5
}
fn half_linear(t: f64) -> f64 {
    0.5 * t
}
fn zero(_t: f64) -> f64 {
    0.0
}

impl DiscontinuousSpace {
    pub fn new(p: usize) -> Result<DiscontinuousSpace, BemError> {
        let order = match p {
            0 => DiscontinuousOrder::Constant,
            1 => DiscontinuousOrder::Linear,
            _ => {
                return Err(BemError::InvalidOrder {
                    family: "discontinuous",
                    order: p,
                });
            }
        };
        let (reference_shape_functions, reference_shape_function_dots) = match order {
            DiscontinuousOrder::Constant => {
                (vec![constant as ShapeFunction], vec![zero as ShapeFunction])
            }
            DiscontinuousOrder::Linear => (
                vec![half as ShapeFunction, half_linear],
                vec![zero as ShapeFunction, half],
            ),
        };
        let q = reference_shape_functions.len();
        debug!("discontinuous space S^-1_{p}: {q} reference shape functions");
        Ok(DiscontinuousSpace {
            order,
            q,
            reference_shape_functions,
            reference_shape_function_dots,
        })
    }
    pub fn order(&self) -> DiscontinuousOrder {
        self.order
    }
}

impl BemSpace for DiscontinuousSpace {
    fn q(&self) -> usize {
        self.q
    }
    fn reference_shape_functions(&self) -> &[ShapeFunction] {
        &self.reference_shape_functions
    }
    fn reference_shape_function_dots(&self) -> &[ShapeFunction] {
        &self.reference_shape_function_dots
    }
    fn space_dim(&self, numpanels: usize) -> usize {
        numpanels * self.q
    }
    fn loc_glob_map(&self, q: usize, n: usize, num_panels: usize) -> Result<usize, BemError> {
        check_indices(q, self.q, n, num_panels)?;
        if q == 1 { Ok(n) } else { Ok(num_panels + n) }
    }
    fn interpolate(
        &self,
        func: &dyn Fn(f64, f64) -> f64,
        mesh: &dyn ParametrizedMesh,
    ) -> Result<Array1<f64>, BemError> {
        check_split(mesh)?;
        let num_panels = mesh.num_panels();
        let mut coeffs = Array1::<f64>::zeros(self.space_dim(num_panels));
        for i in 0..num_panels {
            match self.order {
                DiscontinuousOrder::Constant => {
                    let center = mesh.panel(i).evaluate(0.0);
                    coeffs[self.loc_glob_map2(1, i + 1, mesh)? - 1] = func(center.x, center.y);
                }
                DiscontinuousOrder::Linear => {
                    let left = mesh.vertex(i);
                    let right = mesh.vertex(mesh.next_vertex_index(i));
                    let f_left = func(left.x, left.y);
                    let f_right = func(right.x, right.y);
                    coeffs[self.loc_glob_map2(1, i + 1, mesh)? - 1] = f_left + f_right;
                    coeffs[self.loc_glob_map2(2, i + 1, mesh)? - 1] = f_right - f_left;
                }
            }
        }
        Ok(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::mesh::panel_mesh::PanelMesh;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    #[test]
    fn test_invalid_orders_and_indices() {
        assert!(matches!(
            DiscontinuousSpace::new(2),
            Err(BemError::InvalidOrder {
                family: "discontinuous",
                order: 2
            })
        ));
        let space = DiscontinuousSpace::new(0).unwrap();
        assert!(matches!(
            space.loc_glob_map(2, 1, 3),
            Err(BemError::IndexOutOfRange { .. })
        ));
        assert!(space.loc_glob_map(1, 4, 3).is_err());
        let space = DiscontinuousSpace::new(1).unwrap();
        assert!(space.loc_glob_map(3, 1, 3).is_err());
        assert!(space.loc_glob_map(1, 0, 3).is_err());
    }

    #[test]
    fn test_dimension_and_dof_map() {
        let constant = DiscontinuousSpace::new(0).unwrap();
        let linear = DiscontinuousSpace::new(1).unwrap();
        for n in 1..20 {
            assert_eq!(constant.space_dim(n), n);
            assert_eq!(linear.space_dim(n), 2 * n);
        }
        for n in 1..=5 {
            assert_eq!(constant.loc_glob_map(1, n, 5).unwrap(), n);
            assert_eq!(linear.loc_glob_map(1, n, 5).unwrap(), n);
            assert_eq!(linear.loc_glob_map(2, n, 5).unwrap(), 5 + n);
        }
        assert_eq!(constant.order(), DiscontinuousOrder::Constant);
        assert_eq!(linear.q(), 2);
    }

    #[test]
    fn test_single_loop_map2_matches_map() {
        let mesh = PanelMesh::regular_polygon(Vector2::zeros(), 1.0, 6).unwrap();
        let space = DiscontinuousSpace::new(1).unwrap();
        for n in 1..=6 {
            for q in 1..=2 {
                assert_eq!(
                    space.loc_glob_map2(q, n, &mesh).unwrap(),
                    space.loc_glob_map(q, n, 6).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_annular_offsets() {
        let mesh = PanelMesh::annulus(Vector2::zeros(), 2.0, 1.0, 4, 3).unwrap();
        let constant = DiscontinuousSpace::new(0).unwrap();
        for n in 1..=7 {
            assert_eq!(constant.loc_glob_map2(1, n, &mesh).unwrap(), n);
        }
        let linear = DiscontinuousSpace::new(1).unwrap();
        assert_eq!(linear.loc_glob_map2(2, 4, &mesh).unwrap(), 8);
        assert_eq!(linear.loc_glob_map2(1, 5, &mesh).unwrap(), 9);
        assert_eq!(linear.loc_glob_map2(2, 7, &mesh).unwrap(), 14);
    }

    #[test]
    fn test_shape_functions() {
        let space = DiscontinuousSpace::new(1).unwrap();
        let funcs = space.reference_shape_functions();
        let dots = space.reference_shape_function_dots();
        assert_relative_eq!(funcs[0](0.3), 0.5);
        assert_relative_eq!(funcs[1](0.3), 0.15);
        assert_relative_eq!(dots[0](0.3), 0.0);
        assert_relative_eq!(dots[1](0.3), 0.5);
        let constant = DiscontinuousSpace::new(0).unwrap();
        assert_relative_eq!(constant.reference_shape_functions()[0](-0.8), 1.0);
        assert_relative_eq!(constant.reference_shape_function_dots()[0](-0.8), 0.0);
    }

    #[test]
    fn test_constant_interpolation_samples_panel_centers() {
        let mesh = PanelMesh::from_vertices(&[
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 1.0),
            Vector2::new(0.0, 1.0),
        ])
        .unwrap();
        let space = DiscontinuousSpace::new(0).unwrap();
        let coeffs = space.interpolate(&|x, y| x + 10.0 * y, &mesh).unwrap();
        assert_eq!(coeffs.len(), 4);
        assert_relative_eq!(coeffs[0], 1.0, epsilon = 1e-15);
        assert_relative_eq!(coeffs[1], 7.0, epsilon = 1e-15);
        assert_relative_eq!(coeffs[2], 11.0, epsilon = 1e-15);
        assert_relative_eq!(coeffs[3], 5.0, epsilon = 1e-15);
    }

    #[test]
    fn test_linear_interpolation_sum_difference() {
        let mesh = PanelMesh::regular_polygon(Vector2::new(-1.0, 0.5), 1.0, 5).unwrap();
        let space = DiscontinuousSpace::new(1).unwrap();
        let field = |x: f64, y: f64| 3.0 * x - y;
        let coeffs = space.interpolate(&field, &mesh).unwrap();
        assert_eq!(coeffs.len(), 10);
        for i in 0..5 {
            let l = mesh.vertex(i);
            let r = mesh.vertex((i + 1) % 5);
            assert_relative_eq!(coeffs[i], field(l.x, l.y) + field(r.x, r.y), epsilon = 1e-14);
            assert_relative_eq!(coeffs[5 + i], field(r.x, r.y) - field(l.x, l.y), epsilon = 1e-14);
            // the basis pair recovers the end point values
            let at_left = space.evaluate_on_panel(coeffs.view(), i + 1, -1.0, &mesh).unwrap();
            let at_right = space.evaluate_on_panel(coeffs.view(), i + 1, 1.0, &mesh).unwrap();
            assert_relative_eq!(at_left, field(l.x, l.y), epsilon = 1e-14);
            assert_relative_eq!(at_right, field(r.x, r.y), epsilon = 1e-14);
        }
    }
}
