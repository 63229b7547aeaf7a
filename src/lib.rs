pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;

pub use disc::gauss_points::{QuadRule, gauleg, get_gauss_qr};
pub use disc::mesh::{Panel, ParametrizedMesh, panel_mesh::PanelMesh};
pub use disc::space::{BemSpace, ContinuousSpace, DiscontinuousSpace, SpaceFamily, build_space};
pub use error::BemError;
