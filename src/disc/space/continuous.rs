use log::debug;
use ndarray::Array1;

use super::{BemSpace, ShapeFunction, check_indices, check_split};
use crate::{disc::mesh::ParametrizedMesh, error::BemError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContinuousOrder {
    Linear,
    Quadratic,
}

/// Continuous piecewise polynomial space S^0_p, p = 1 or 2.
///
/// Local index 2 is the vertex at the start of a panel, local index 1 the
/// vertex at its end, shared with the next panel of the loop. For p = 2 the
/// bubble `1 - t^2` adds one independent DOF per panel, numbered after all
/// vertex DOFs.
#[derive(Clone, Debug)]
pub struct ContinuousSpace {
    order: ContinuousOrder,
    q: usize,
    reference_shape_functions: Vec<ShapeFunction>,
    reference_shape_function_dots: Vec<ShapeFunction>,
}

fn hat_end(t: f64) -> f64 {
    0.5 * (t + 1.0)
}
fn hat_start(t: f64) -> f64 {
    0.5 * (1.0 - t)
}
fn bubble(t: f64) -> f64 {
    1.0 - t * t
}
fn hat_end_dot(_t: f64) -> f64 {
    0.5
}
fn hat_start_dot(_t: f64) -> f64 {
    -0.5
}
fn bubble_dot(t: f64) -> f64 {
    -2.0 * t
}

impl ContinuousSpace {
    pub fn new(p: usize) -> Result<ContinuousSpace, BemError> {
        let order = match p {
            1 => ContinuousOrder::Linear,
            2 => ContinuousOrder::Quadratic,
            _ => {
                return Err(BemError::InvalidOrder {
                    family: "continuous",
                    order: p,
                });
            }
        };
        let (reference_shape_functions, reference_shape_function_dots) = match order {
            ContinuousOrder::Linear => (
                vec![hat_end as ShapeFunction, hat_start],
                vec![hat_end_dot as ShapeFunction, hat_start_dot],
            ),
            ContinuousOrder::Quadratic => (
                vec![hat_end as ShapeFunction, hat_start, bubble],
                vec![hat_end_dot as ShapeFunction, hat_start_dot, bubble_dot],
            ),
        };
        let q = reference_shape_functions.len();
        debug!("continuous space S^0_{p}: {q} reference shape functions");
        Ok(ContinuousSpace {
            order,
            q,
            reference_shape_functions,
            reference_shape_function_dots,
        })
    }
    pub fn order(&self) -> ContinuousOrder {
        self.order
    }
}

impl BemSpace for ContinuousSpace {
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
        numpanels * (self.q - 1)
    }
    fn loc_glob_map(&self, q: usize, n: usize, num_panels: usize) -> Result<usize, BemError> {
        check_indices(q, self.q, n, num_panels)?;
        Ok(match q {
            2 => n,
            1 => {
                if n % num_panels == 0 {
                    1
                } else {
                    n + 1
                }
            }
            _ => num_panels + n,
        })
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
            let left = mesh.vertex(i);
            let f_left = func(left.x, left.y);
            coeffs[self.loc_glob_map2(2, i + 1, mesh)? - 1] = f_left;
            if self.order == ContinuousOrder::Quadratic {
                let right = mesh.vertex(mesh.next_vertex_index(i));
                let center = mesh.panel(i).evaluate(0.0);
                // deviation of the field from its linear interpolant at the panel center
                coeffs[self.loc_glob_map2(3, i + 1, mesh)? - 1] =
                    func(center.x, center.y) - 0.5 * (f_left + func(right.x, right.y));
            }
        }
        Ok(coeffs)
    }
}
