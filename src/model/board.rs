// File: ./src/model/board.rs
use crate::model::shift::{ShiftAssignment, ShiftType, hm};
use anyhow::{Result, bail};
use std::collections::HashMap;

pub const DAYS_PER_WEEK: usize = 7;

/// One grid cell: a staff member on a weekday column (0 = first day of the week).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub staff: String,
    pub weekday: usize,
}

impl CellKey {
    pub fn new(staff: impl Into<String>, weekday: usize) -> Self {
        Self {
            staff: staff.into(),
            weekday,
        }
    }
}

/// Weekly shift assignments, keyed by staff member and weekday.
/// A missing entry means nobody planned that cell.
#[derive(Debug, Clone, Default)]
pub struct ShiftBoard {
    staff: Vec<String>,
    cells: HashMap<CellKey, ShiftAssignment>,
}

impl ShiftBoard {
    pub fn new(staff: Vec<String>) -> Self {
        Self {
            staff,
            cells: HashMap::new(),
        }
    }

    /// Sample rows shown when the admin view mounts.
    pub fn fixture() -> Self {
        let mut board = Self::new(
            ["Alex", "Sam", "Robin", "Kim"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        let rows = [
            ("Alex", 1, ShiftAssignment::of_type(ShiftType::EarlyShift)),
            ("Alex", 3, ShiftAssignment::of_type(ShiftType::LateShift)),
            ("Sam", 0, ShiftAssignment::of_type(ShiftType::MiddleShift)),
            ("Robin", 4, ShiftAssignment::of_type(ShiftType::Vacation)),
            ("Kim", 2, ShiftAssignment::custom(hm(9, 0), hm(13, 0), 0)),
        ];
        for (staff, day, assignment) in rows {
            board.cells.insert(CellKey::new(staff, day), assignment);
        }
        board
    }

    pub fn staff(&self) -> &[String] {
        &self.staff
    }

    pub fn get(&self, staff: &str, weekday: usize) -> Option<&ShiftAssignment> {
        self.cells.get(&CellKey::new(staff, weekday))
    }

    /// Stores an assignment, replacing whatever the cell held. Unknown staff
    /// members get appended as a new row.
    pub fn assign(&mut self, key: CellKey, assignment: ShiftAssignment) -> Result<()> {
        if key.weekday >= DAYS_PER_WEEK {
            bail!(
                "weekday index {} out of range (0..{})",
                key.weekday,
                DAYS_PER_WEEK
            );
        }
        if !self.staff.iter().any(|s| *s == key.staff) {
            self.staff.push(key.staff.clone());
        }
        log::debug!(
            "assign {}#{} -> {:?}",
            key.staff,
            key.weekday,
            assignment.shift_type
        );
        self.cells.insert(key, assignment);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The seven cells of one staff row, in column order.
    pub fn row(&self, staff: &str) -> [Option<&ShiftAssignment>; DAYS_PER_WEEK] {
        std::array::from_fn(|day| self.get(staff, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_seeds_alex_early_shift() {
        let board = ShiftBoard::fixture();
        let cell = board.get("Alex", 1).copied();
        assert_eq!(
            cell,
            Some(ShiftAssignment {
                shift_type: ShiftType::EarlyShift,
                start_time: Some(hm(7, 30)),
                end_time: Some(hm(18, 0)),
                break_minutes: 30,
            })
        );
        assert!(board.get("Alex", 2).is_none());
    }

    #[test]
    fn assign_replaces_and_rejects_bad_weekday() {
        let mut board = ShiftBoard::fixture();
        let before = board.len();
        board
            .assign(
                CellKey::new("Alex", 1),
                ShiftAssignment::of_type(ShiftType::Vacation),
            )
            .unwrap();
        assert_eq!(board.len(), before);
        assert_eq!(board.get("Alex", 1).unwrap().shift_type, ShiftType::Vacation);

        let err = board.assign(CellKey::new("Alex", 7), ShiftAssignment::blank());
        assert!(err.is_err());
        assert_eq!(board.len(), before);
    }

    #[test]
    fn new_staff_member_gets_a_row() {
        let mut board = ShiftBoard::new(vec![]);
        board
            .assign(CellKey::new("Jo", 6), ShiftAssignment::blank())
            .unwrap();
        assert_eq!(board.staff(), ["Jo".to_string()]);
        let row = board.row("Jo");
        assert!(row[..6].iter().all(Option::is_none));
        assert!(row[6].is_some());
    }
}
