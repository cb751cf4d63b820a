//! Error types for sold-region ingestion.

use thiserror::Error;

use crate::GridRect;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("Malformed region data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Region {rect:?} lies outside the {grid_size}x{grid_size} grid")]
    OutOfBounds { rect: GridRect, grid_size: u32 },

    #[error("Region {0:?} has zero area")]
    EmptyRect(GridRect),

    #[error("Duplicate region id: {0}")]
    DuplicateId(String),

    #[error("Region overlaps already sold region {0}")]
    Overlaps(String),
}
