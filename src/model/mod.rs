// File: ./src/model/mod.rs
pub mod board;
pub mod shift;

pub use board::{CellKey, DAYS_PER_WEEK, ShiftBoard};
pub use shift::{ShiftAssignment, ShiftDefinition, ShiftType};
