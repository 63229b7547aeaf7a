use std::fmt;

use hashbrown::HashMap;
use log::warn;
use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

use crate::{disc::mesh::ParametrizedMesh, error::BemError};

pub mod continuous;
pub mod discontinuous;

pub use continuous::{ContinuousOrder, ContinuousSpace};
pub use discontinuous::{DiscontinuousOrder, DiscontinuousSpace};

/// Reference shape function (or derivative) on [-1, 1].
pub type ShapeFunction = fn(f64) -> f64;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpaceFamily {
    Continuous,
    Discontinuous,
}

impl fmt::Display for SpaceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceFamily::Continuous => write!(f, "continuous"),
            SpaceFamily::Discontinuous => write!(f, "discontinuous"),
        }
    }
}

pub fn build_space(family: SpaceFamily, order: usize) -> Result<Box<dyn BemSpace>, BemError> {
    let space: Box<dyn BemSpace> = match family {
        SpaceFamily::Continuous => Box::new(ContinuousSpace::new(order)?),
        SpaceFamily::Discontinuous => Box::new(DiscontinuousSpace::new(order)?),
    };
    Ok(space)
}

pub(crate) fn check_indices(
    local: usize,
    q: usize,
    panel: usize,
    num_panels: usize,
) -> Result<(), BemError> {
    if local == 0 || local > q || panel == 0 || panel > num_panels {
        return Err(BemError::IndexOutOfRange {
            local,
            q,
            panel,
            num_panels,
        });
    }
    Ok(())
}

/// Rejects meshes whose split leaves the second loop without panels.
pub(crate) fn check_split(mesh: &dyn ParametrizedMesh) -> Result<(), BemError> {
    let split = mesh.split();
    let num_panels = mesh.num_panels();
    if split != 0 && split >= num_panels {
        return Err(BemError::InvalidMesh(format!(
            "split {split} leaves no panels for the second loop of a {num_panels}-panel mesh"
        )));
    }
    Ok(())
}

/// Piecewise polynomial BEM space over a panel mesh.
///
/// Local shape function indices and panel indices are 1-based, as are the
/// global DOF indices returned by the local-to-global maps.
pub trait BemSpace: fmt::Debug {
    fn q(&self) -> usize;
    fn reference_shape_functions(&self) -> &[ShapeFunction];
    fn reference_shape_function_dots(&self) -> &[ShapeFunction];
    fn space_dim(&self, numpanels: usize) -> usize;
    /// Global DOF of local shape function `q` on panel `n` of a single closed
    /// loop made of `num_panels` panels.
    fn loc_glob_map(&self, q: usize, n: usize, num_panels: usize) -> Result<usize, BemError>;
    fn interpolate(
        &self,
        func: &dyn Fn(f64, f64) -> f64,
        mesh: &dyn ParametrizedMesh,
    ) -> Result<Array1<f64>, BemError>;

    /// Topology-aware local-to-global map.
    ///
    /// On a split mesh each loop is numbered on its own; the second loop's
    /// DOFs are shifted past the `space_dim(split)` DOFs of the first one.
    fn loc_glob_map2(
        &self,
        q: usize,
        n: usize,
        mesh: &dyn ParametrizedMesh,
    ) -> Result<usize, BemError> {
        check_split(mesh)?;
        let split = mesh.split();
        let num_panels = mesh.num_panels();
        check_indices(q, self.q(), n, num_panels)?;
        if split == 0 {
            self.loc_glob_map(q, n, num_panels)
        } else if n <= split {
            self.loc_glob_map(q, n, split)
        } else {
            Ok(self.loc_glob_map(q, n - split, num_panels - split)? + self.space_dim(split))
        }
    }
    fn evaluate_shape_function(&self, q: usize, t: f64) -> Result<f64, BemError> {
        check_indices(q, self.q(), 1, 1)?;
        Ok(self.reference_shape_functions()[q - 1](t))
    }
    fn evaluate_shape_function_dot(&self, q: usize, t: f64) -> Result<f64, BemError> {
        check_indices(q, self.q(), 1, 1)?;
        Ok(self.reference_shape_function_dots()[q - 1](t))
    }
    /// One row per panel, one column per local index.
    fn local_to_global_table(&self, mesh: &dyn ParametrizedMesh) -> Result<Array2<usize>, BemError> {
        let num_panels = mesh.num_panels();
        let q = self.q();
        let mut table = Array2::<usize>::zeros((num_panels, q));
        for n in 1..=num_panels {
            for k in 1..=q {
                table[[n - 1, k - 1]] = self.loc_glob_map2(k, n, mesh)?;
            }
        }
        Ok(table)
    }
    fn dof_multiplicity(
        &self,
        mesh: &dyn ParametrizedMesh,
    ) -> Result<HashMap<usize, usize>, BemError> {
        let mut multiplicity = HashMap::new();
        for &dof in self.local_to_global_table(mesh)?.iter() {
            *multiplicity.entry(dof).or_insert(0) += 1;
        }
        Ok(multiplicity)
    }
    fn evaluate_on_panel(
        &self,
        coeffs: ArrayView1<f64>,
        n: usize,
        t: f64,
        mesh: &dyn ParametrizedMesh,
    ) -> Result<f64, BemError> {
        let expected = self.space_dim(mesh.num_panels());
        if coeffs.len() != expected {
            warn!(
                "coefficient vector of length {} does not match space dimension {expected}",
                coeffs.len()
            );
            return Err(BemError::CoefficientLength {
                expected,
                found: coeffs.len(),
            });
        }
        let mut value = 0.0;
        for (k, shape_function) in self.reference_shape_functions().iter().enumerate() {
            let dof = self.loc_glob_map2(k + 1, n, mesh)?;
            value += coeffs[dof - 1] * shape_function(t);
        }
        Ok(value)
    }
}
