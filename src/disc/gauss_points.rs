use ndarray::{Array1, ArrayView1};

use crate::error::BemError;

pub mod legendre_points;

pub use legendre_points::{GAULEG_EPS, gauleg, get_gauss_qr};

/// One-dimensional quadrature rule: `n` points and weights.
#[derive(Clone, Debug)]
pub struct QuadRule {
    dim: usize,
    n: usize,
    points: Array1<f64>,
    weights: Array1<f64>,
}

impl QuadRule {
    pub fn new(points_num: usize) -> Self {
        get_gauss_qr(points_num)
    }
    pub(crate) fn from_parts(n: usize, points: Array1<f64>, weights: Array1<f64>) -> Self {
        Self {
            dim: 1,
            n,
            points,
            weights,
        }
    }
    pub fn dim(&self) -> usize {
        self.dim
    }
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn points(&self) -> ArrayView1<f64> {
        self.points.view()
    }
    pub fn weights(&self) -> ArrayView1<f64> {
        self.weights.view()
    }
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.points
            .iter()
            .zip(self.weights.iter())
            .map(|(&x, &w)| w * f(x))
            .sum()
    }
    /// Maps a rule given on [-1, 1] affinely onto [a, b].
    pub fn transform(&self, a: f64, b: f64) -> Result<QuadRule, BemError> {
        if a > b {
            return Err(BemError::DomainNotOrdered { a, b });
        }
        let xmid = 0.5 * (a + b);
        let xlen = 0.5 * (b - a);
        Ok(Self::from_parts(
            self.n,
            self.points.mapv(|x| xmid + xlen * x),
            self.weights.mapv(|w| xlen * w),
        ))
    }
}
