pub mod gauss_points;
pub mod mesh;
pub mod norms;
pub mod space;
