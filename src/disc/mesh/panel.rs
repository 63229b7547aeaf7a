use nalgebra::Vector2;

use super::Panel;

/// Straight segment from `start` (t = -1) to `end` (t = 1).
#[derive(Clone, Debug)]
pub struct LinePanel {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl LinePanel {
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }
}

impl Panel for LinePanel {
    fn evaluate(&self, t: f64) -> Vector2<f64> {
        self.start * (0.5 * (1.0 - t)) + self.end * (0.5 * (1.0 + t))
    }
    fn derivative(&self, _t: f64) -> Vector2<f64> {
        (self.end - self.start) * 0.5
    }
    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Arc of the circle `center + radius * (cos phi, sin phi)` for phi running
/// linearly from `phi_start` to `phi_end`.
#[derive(Clone, Debug)]
pub struct CircularArcPanel {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub phi_start: f64,
    pub phi_end: f64,
}

impl CircularArcPanel {
    pub fn new(center: Vector2<f64>, radius: f64, phi_start: f64, phi_end: f64) -> Self {
        Self {
            center,
            radius,
            phi_start,
            phi_end,
        }
    }
    fn angle(&self, t: f64) -> f64 {
        self.phi_start + 0.5 * (t + 1.0) * (self.phi_end - self.phi_start)
    }
}

impl Panel for CircularArcPanel {
    fn evaluate(&self, t: f64) -> Vector2<f64> {
        let phi = self.angle(t);
        self.center + Vector2::new(phi.cos(), phi.sin()) * self.radius
    }
    fn derivative(&self, t: f64) -> Vector2<f64> {
        let phi = self.angle(t);
        let dphi_dt = 0.5 * (self.phi_end - self.phi_start);
        Vector2::new(-phi.sin(), phi.cos()) * (self.radius * dphi_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_line_panel_endpoints() {
        let panel = LinePanel::new(Vector2::new(1.0, 2.0), Vector2::new(4.0, -2.0));
        assert_eq!(panel.evaluate(-1.0), panel.start);
        assert_eq!(panel.evaluate(1.0), panel.end);
        assert_relative_eq!(panel.evaluate(0.0).x, 2.5, epsilon = 1e-15);
        assert_relative_eq!(panel.length(), 5.0, epsilon = 1e-15);
    }

    #[test]
    fn test_line_panel_normal() {
        // counterclockwise bottom edge of the unit square, outward normal points down
        let panel = LinePanel::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let normal = panel.normal(0.3);
        assert_relative_eq!(normal.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(normal.y, -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_arc_length_and_derivative() {
        let panel = CircularArcPanel::new(Vector2::new(0.5, -1.0), 2.0, 0.0, 0.5 * PI);
        assert_relative_eq!(panel.length(), PI, epsilon = 1e-12);
        let start = panel.evaluate(-1.0);
        assert_relative_eq!(start.x, 2.5, epsilon = 1e-15);
        assert_relative_eq!(start.y, -1.0, epsilon = 1e-15);

        let h = 1e-6;
        let t = 0.2;
        let fd = (panel.evaluate(t + h) - panel.evaluate(t - h)) / (2.0 * h);
        let exact = panel.derivative(t);
        assert_relative_eq!(fd.x, exact.x, epsilon = 1e-6);
        assert_relative_eq!(fd.y, exact.y, epsilon = 1e-6);
    }
}
