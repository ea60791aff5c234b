use crate::calendar::WeekNav;
use crate::route::Route;
use crossterm::event::Event;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Route),

    // Dashboard keypad
    PressDigit(char),
    ClearPin,

    // Admin grid
    Week(WeekNav),
    MoveCursor { rows: isize, cols: isize },
    PressCell,

    // Shift modal
    CycleShiftType(isize),
    NextField,
    /// +1 / -1 steps of the focused field.
    Adjust(i64),
    Accept,
    Cancel,

    // Lifecycle
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    Tick,
    Terminal(Event),
}
