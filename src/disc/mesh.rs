use nalgebra::Vector2;

use crate::disc::gauss_points::get_gauss_qr;

pub mod panel;
pub mod panel_mesh;

const PANEL_LENGTH_QUAD_ORDER: usize = 16;

/// A parametrized boundary segment `gamma: [-1, 1] -> R^2`.
pub trait Panel: std::fmt::Debug {
    fn evaluate(&self, t: f64) -> Vector2<f64>;
    fn derivative(&self, t: f64) -> Vector2<f64>;
    /// Unit normal at `t`, pointing to the right of the direction of travel.
    fn normal(&self, t: f64) -> Vector2<f64> {
        let tangent = self.derivative(t);
        Vector2::new(tangent.y, -tangent.x).normalize()
    }
    fn length(&self) -> f64 {
        get_gauss_qr(PANEL_LENGTH_QUAD_ORDER).integrate(|t| self.derivative(t).norm())
    }
}

/// Mesh of panels covering one closed boundary loop, or two when `split() != 0`.
///
/// Panel `i` runs from `vertex(i)` to the first vertex of the next panel in
/// its loop. Panels `0..split` form the first loop, `split..num_panels` the
/// second one.
pub trait ParametrizedMesh {
    fn num_panels(&self) -> usize;
    fn vertex(&self, i: usize) -> Vector2<f64>;
    fn split(&self) -> usize;
    fn panel(&self, i: usize) -> &dyn Panel;

    /// Index of the vertex at the end of panel `i` (0-based), wrapping inside
    /// the loop that `i` belongs to.
    fn next_vertex_index(&self, i: usize) -> usize {
        let num_panels = self.num_panels();
        let split = self.split();
        if split != 0 && i < split {
            (i + 1) % split
        } else if i + 1 == num_panels {
            split
        } else {
            i + 1
        }
    }
}
