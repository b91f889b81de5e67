//! Board model: which cell holds which token, which slots hold barriers.

pub mod grid;

pub use grid::{all_cells, GridState};
