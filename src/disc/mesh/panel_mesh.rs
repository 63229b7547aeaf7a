use std::f64::consts::PI;

use log::debug;
use nalgebra::Vector2;

use super::{
    Panel, ParametrizedMesh,
    panel::{CircularArcPanel, LinePanel},
};
use crate::error::BemError;

#[derive(Debug)]
pub struct PanelMesh {
    panels: Vec<Box<dyn Panel>>,
    split: usize,
}

impl PanelMesh {
    pub fn new(panels: Vec<Box<dyn Panel>>, split: usize) -> Result<Self, BemError> {
        if panels.is_empty() {
            return Err(BemError::InvalidMesh("mesh has no panels".to_string()));
        }
        if split >= panels.len() {
            return Err(BemError::InvalidMesh(format!(
                "split {split} leaves no panels for the second loop of a {}-panel mesh",
                panels.len()
            )));
        }
        Ok(Self { panels, split })
    }
    /// Closed polygon through `vertices`, one straight panel per edge.
    pub fn from_vertices(vertices: &[Vector2<f64>]) -> Result<Self, BemError> {
        let num_vertices = vertices.len();
        let panels = (0..num_vertices)
            .map(|i| {
                Box::new(LinePanel::new(vertices[i], vertices[(i + 1) % num_vertices]))
                    as Box<dyn Panel>
            })
            .collect();
        Self::new(panels, 0)
    }
    /// Counterclockwise regular polygon inscribed in the given circle, first
    /// vertex at angle 0.
    pub fn regular_polygon(
        center: Vector2<f64>,
        radius: f64,
        num_panels: usize,
    ) -> Result<Self, BemError> {
        if num_panels < 3 {
            return Err(BemError::InvalidMesh(format!(
                "a polygon needs at least 3 panels, got {num_panels}"
            )));
        }
        let vertices: Vec<Vector2<f64>> = (0..num_panels)
            .map(|k| {
                let phi = 2.0 * PI * k as f64 / num_panels as f64;
                center + Vector2::new(phi.cos(), phi.sin()) * radius
            })
            .collect();
        Self::from_vertices(&vertices)
    }
    pub fn circle(center: Vector2<f64>, radius: f64, num_panels: usize) -> Result<Self, BemError> {
        Self::oriented_circle(center, radius, num_panels, true)
    }
    /// Annulus: counterclockwise outer circle followed by a clockwise inner
    /// circle, `split` set to the outer panel count.
    pub fn annulus(
        center: Vector2<f64>,
        outer_radius: f64,
        inner_radius: f64,
        outer_panels: usize,
        inner_panels: usize,
    ) -> Result<Self, BemError> {
        if inner_radius >= outer_radius {
            return Err(BemError::InvalidMesh(format!(
                "inner radius {inner_radius} must be smaller than outer radius {outer_radius}"
            )));
        }
        let outer = Self::oriented_circle(center, outer_radius, outer_panels, true)?;
        let inner = Self::oriented_circle(center, inner_radius, inner_panels, false)?;
        Self::join(outer, inner)
    }
    pub fn join(first: PanelMesh, second: PanelMesh) -> Result<Self, BemError> {
        if first.split != 0 || second.split != 0 {
            return Err(BemError::InvalidMesh(
                "only single-loop meshes can be joined".to_string(),
            ));
        }
        let split = first.panels.len();
        let mut panels = first.panels;
        panels.extend(second.panels);
        debug!("joined mesh: {} panels, split at {split}", panels.len());
        Self::new(panels, split)
    }
    pub fn panels(&self) -> &[Box<dyn Panel>] {
        &self.panels
    }
    fn oriented_circle(
        center: Vector2<f64>,
        radius: f64,
        num_panels: usize,
        counterclockwise: bool,
    ) -> Result<Self, BemError> {
        let sign = if counterclockwise { 1.0 } else { -1.0 };
        let dphi = sign * 2.0 * PI / num_panels as f64;
        let panels = (0..num_panels)
            .map(|k| {
                let phi_start = k as f64 * dphi;
                Box::new(CircularArcPanel::new(center, radius, phi_start, phi_start + dphi))
                    as Box<dyn Panel>
            })
            .collect();
        Self::new(panels, 0)
    }
}

impl ParametrizedMesh for PanelMesh {
    fn num_panels(&self) -> usize {
        self.panels.len()
    }
    fn vertex(&self, i: usize) -> Vector2<f64> {
        self.panels[i].evaluate(-1.0)
    }
    fn split(&self) -> usize {
        self.split
    }
    fn panel(&self, i: usize) -> &dyn Panel {
        self.panels[i].as_ref()
    }
}
