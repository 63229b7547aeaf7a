use thiserror::Error;

#[derive(Debug, Error)]
pub enum BemError {
    #[error("no {family} space defined for order p = {order}")]
    InvalidOrder { family: &'static str, order: usize },

    #[error(
        "panel/RSF index out of range: local index {local} (1..={q}), panel {panel} (1..={num_panels})"
    )]
    IndexOutOfRange {
        local: usize,
        q: usize,
        panel: usize,
        num_panels: usize,
    },

    #[error("domain end points not ordered: a = {a}, b = {b}")]
    DomainNotOrdered { a: f64, b: f64 },

    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    #[error("coefficient vector has length {found}, expected {expected}")]
    CoefficientLength { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
