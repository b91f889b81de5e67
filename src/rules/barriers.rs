//! Structural legality of a barrier placement.
//!
//! This only checks that the slot exists, the player can pay for it and the
//! slot is free. Whether the placement leaves every route open is decided by
//! `path` after the barrier is provisionally written.

use crate::board::GridState;
use crate::core::coord::{Coord, Orientation};
use crate::error::Rejection;

/// Check a placement without touching the grid.
///
/// Checks run in a fixed order: slot range, budget, occupancy.
pub fn check_placement(
    grid: &GridState,
    barriers_remaining: u8,
    orientation: Orientation,
    slot: Coord,
) -> Result<(), Rejection> {
    match grid.barrier(orientation, slot) {
        None => Err(Rejection::IllegalTarget),
        Some(_) if barriers_remaining == 0 => Err(Rejection::NoBudget),
        Some(true) => Err(Rejection::SlotOccupied),
        Some(false) => Ok(()),
    }
}
