use std::f64::consts::PI;

use log::{debug, trace};
use ndarray::Array1;

use super::QuadRule;
use crate::error::BemError;

pub const GAULEG_EPS: f64 = 1.0e-13;

/// Computes `n` Gauss-Legendre nodes and weights on `[a, b]`.
///
/// The rule integrates polynomials of degree up to `2n - 1` exactly. Nodes are
/// returned in ascending order; weights are symmetric about the midpoint.
pub fn gauleg(
    a: f64,
    b: f64,
    n: usize,
    eps: f64,
) -> Result<(Array1<f64>, Array1<f64>), BemError> {
    if a > b {
        return Err(BemError::DomainNotOrdered { a, b });
    }
    Ok(get_legendre_points_interval(a, b, n, eps))
}

pub fn get_gauss_qr(order: usize) -> QuadRule {
    let (points, weights) = get_legendre_points_interval(-1.0, 1.0, order, f64::EPSILON);
    debug!("built Gauss-Legendre rule with {order} points");
    QuadRule::from_parts(order, points, weights)
}

/// Returns `(P_n(z), P_{n-1}(z))` from the three-term recurrence.
fn legendre_pair(n: usize, z: f64) -> (f64, f64) {
    let mut p1 = 1.0;
    let mut p2 = 0.0;
    for j in 1..=n {
        let jf = j as f64;
        let p3 = p2;
        p2 = p1;
        p1 = ((2.0 * jf - 1.0) * z * p2 - (jf - 1.0) * p3) / jf;
    }
    (p1, p2)
}

fn get_legendre_points_interval(
    a: f64,
    b: f64,
    n: usize,
    eps: f64,
) -> (Array1<f64>, Array1<f64>) {
    let mut xq = Array1::<f64>::zeros(n);
    let mut wq = Array1::<f64>::zeros(n);
    let nf = n as f64;
    let m = n.div_ceil(2);
    let xmid = 0.5 * (a + b);
    let xlen = 0.5 * (b - a);

    // only the roots in (0, 1) are solved for, the rest follow by symmetry
    for i in 0..m {
        let mut z = (PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
        let mut iterations = 0usize;
        let dp1 = loop {
            let (p1, p2) = legendre_pair(n, z);
            let dp1 = nf * (z * p1 - p2) / (z * z - 1.0);
            let z1 = z;
            z = z1 - p1 / dp1;
            iterations += 1;
            if (z - z1).abs() <= eps {
                break dp1;
            }
        };
        trace!("root {i} of P_{n} converged after {iterations} Newton steps");

        xq[i] = xmid - xlen * z;
        xq[n - 1 - i] = xmid + xlen * z;

        let wqi = 2.0 * xlen / ((1.0 - z * z) * dp1 * dp1);
        wq[i] = wqi;
        wq[n - 1 - i] = wqi;
    }
    (xq, wq)
}
