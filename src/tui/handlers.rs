use crate::calendar::{WeekNav, shift_week, time_steps};
use crate::editor::FormField;
use crate::pincode::DigitPress;
use crate::route::Route;
use crate::store::UiStore;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Break minutes change in 5 minute steps regardless of the time step.
const BREAK_STEP_MINUTES: i64 = 5;

fn default_picker_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
}

/// Moves one slot along the day's time picker, wrapping at midnight. A time
/// between slots snaps to the neighbouring slot in the given direction; an
/// unset time starts at 08:00.
fn step_on_picker(current: Option<NaiveTime>, direction: i64, step_minutes: u32) -> NaiveTime {
    let Some(current) = current else {
        return default_picker_time();
    };
    let picker = time_steps(NaiveTime::default(), last_second_of_day(), step_minutes);
    let floor = picker.iter().rposition(|t| *t <= current).unwrap_or(0);
    let next = if direction < 0 && picker[floor] != current {
        floor as i64
    } else {
        floor as i64 + direction.signum()
    };
    picker[next.rem_euclid(picker.len() as i64) as usize]
}

fn last_second_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}

pub fn key_to_action(state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.route {
        Route::Dashboard => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::PressDigit(c)),
            KeyCode::Backspace | KeyCode::Delete => Some(Action::ClearPin),
            KeyCode::Char('a') => Some(Action::Navigate(Route::Admin)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Route::Admin if state.editor.is_open() => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CycleShiftType(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CycleShiftType(1)),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::Char('+') | KeyCode::Right | KeyCode::Char('l') => Some(Action::Adjust(1)),
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Char('h') => Some(Action::Adjust(-1)),
            KeyCode::Enter => Some(Action::Accept),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
        Route::Admin => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor { rows: -1, cols: 0 }),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor { rows: 1, cols: 0 }),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor { rows: 0, cols: -1 }),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor { rows: 0, cols: 1 }),
            KeyCode::Char('p') | KeyCode::Char('[') => Some(Action::Week(WeekNav::Previous)),
            KeyCode::Char('n') | KeyCode::Char(']') => Some(Action::Week(WeekNav::Next)),
            KeyCode::Char('c') => Some(Action::Week(WeekNav::Current)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressCell),
            KeyCode::Esc | KeyCode::Char('b') => Some(Action::Navigate(Route::Dashboard)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

pub fn apply(state: &mut AppState, store: &mut UiStore, action: Action) {
    match action {
        Action::Navigate(route) => state.enter(route, store),
        Action::Quit => state.should_quit = true,

        Action::PressDigit(d) => match state.pincode.press_digit(d) {
            DigitPress::Completed(digits) => {
                let payload = serde_json::to_string(&digits).unwrap_or_default();
                state.message = format!("Pincode entered: {}", payload);
            }
            DigitPress::Pending(_) => state.message.clear(),
            DigitPress::Ignored => {}
        },
        Action::ClearPin => state.pincode.press_clear(),

        Action::Week(nav) => {
            state.week_offset = shift_week(state.week_offset, nav);
            log::debug!("week offset now {}", state.week_offset);
        }
        Action::MoveCursor { rows, cols } => state.move_cursor(rows, cols),
        Action::PressCell => {
            if let Some(cell) = state.selected_cell() {
                state.editor.open(cell, store);
            }
        }

        Action::CycleShiftType(delta) => state.editor.cycle_shift_type(delta),
        Action::NextField => state.editor.focus_next(),
        Action::Adjust(direction) => {
            let step = state.config.time_step_minutes;
            let changed = match state.editor.form().map(|f| (f.focus, f.value)) {
                Some((FormField::StartTime, v)) => state
                    .editor
                    .set_start_time(Some(step_on_picker(v.start_time, direction, step))),
                Some((FormField::EndTime, v)) => state
                    .editor
                    .set_end_time(Some(step_on_picker(v.end_time, direction, step))),
                Some((FormField::BreakMinutes, _)) => state
                    .editor
                    .adjust_focused(direction * BREAK_STEP_MINUTES, default_picker_time()),
                Some((FormField::ShiftType, _)) => {
                    state.editor.cycle_shift_type(direction.signum() as isize);
                    true
                }
                None => true,
            };
            if !changed {
                state.message = "Times are fixed for this shift type".to_string();
            }
        }
        Action::Accept => {
            let week = state.calendar_week();
            let board = &mut state.board;
            let message = &mut state.message;
            state.editor.accept(store, |cell, assignment| {
                let day = week
                    .days
                    .get(cell.weekday)
                    .map(|d| d.header())
                    .unwrap_or_default();
                let Some(board) = board.as_mut() else {
                    return;
                };
                *message = match board.assign(cell.clone(), assignment) {
                    Ok(()) => format!(
                        "{} for {} on {}",
                        assignment.shift_type, cell.staff, day
                    ),
                    Err(e) => format!("Error: {}", e),
                };
            });
        }
        Action::Cancel => state.editor.cancel(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Config;
    use crate::model::ShiftType;
    use chrono::{Local, TimeZone};

    fn state() -> AppState {
        let now = Local.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        AppState::with_clock(Config::default(), Box::new(FixedClock(now))).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn pincode_flow_reports_json_digits() {
        let mut store = UiStore::new();
        let mut s = state();
        s.enter(Route::Dashboard, &mut store);
        for c in ['1', '2', '3', '4'] {
            let action = key_to_action(&s, key(KeyCode::Char(c))).unwrap();
            apply(&mut s, &mut store, action);
        }
        assert_eq!(s.message, r#"Pincode entered: ["1","2","3","4"]"#);
        assert!(s.pincode.is_empty());
        assert!(s.ticker.is_running());
    }

    #[tokio::test]
    async fn admin_accept_writes_back_into_board() {
        let mut store = UiStore::new();
        let mut s = state();
        s.enter(Route::Dashboard, &mut store);
        apply(&mut s, &mut store, Action::Navigate(Route::Admin));
        assert!(!s.ticker.is_running());
        assert_eq!(store.title(), "Shift board");

        // Alex, Wednesday column
        apply(&mut s, &mut store, Action::MoveCursor { rows: 0, cols: 2 });
        apply(&mut s, &mut store, Action::PressCell);
        assert!(store.is_modal_open());
        apply(&mut s, &mut store, Action::CycleShiftType(3));
        apply(&mut s, &mut store, Action::Accept);

        assert!(!store.is_modal_open());
        let board = s.board.as_ref().unwrap();
        assert_eq!(board.get("Alex", 2).unwrap().shift_type, ShiftType::LateShift);
        assert_eq!(s.message, "Late shift for Alex on Wed 14");
    }

    #[tokio::test]
    async fn modal_keys_take_precedence_and_cancel_keeps_board() {
        let mut store = UiStore::new();
        let mut s = state();
        s.enter(Route::Admin, &mut store);
        let before = s.board.as_ref().unwrap().get("Alex", 1).copied();

        apply(&mut s, &mut store, Action::MoveCursor { rows: 0, cols: 1 });
        apply(&mut s, &mut store, Action::PressCell);
        assert_eq!(
            key_to_action(&s, key(KeyCode::Esc)),
            Some(Action::Cancel)
        );
        apply(&mut s, &mut store, Action::CycleShiftType(5));
        apply(&mut s, &mut store, Action::Cancel);

        assert!(!store.is_modal_open());
        assert_eq!(s.board.as_ref().unwrap().get("Alex", 1).copied(), before);
        assert_eq!(
            key_to_action(&s, key(KeyCode::Esc)),
            Some(Action::Navigate(Route::Dashboard))
        );
    }

    #[tokio::test]
    async fn fixed_types_reject_adjustments() {
        let mut store = UiStore::new();
        let mut s = state();
        s.enter(Route::Admin, &mut store);
        apply(&mut s, &mut store, Action::PressCell);
        apply(&mut s, &mut store, Action::CycleShiftType(1));
        apply(&mut s, &mut store, Action::NextField);
        apply(&mut s, &mut store, Action::Adjust(1));
        assert_eq!(s.message, "Times are fixed for this shift type");

        apply(&mut s, &mut store, Action::CycleShiftType(3));
        apply(&mut s, &mut store, Action::Adjust(1));
        let form = s.editor.form().unwrap();
        assert_eq!(form.value.shift_type, ShiftType::CustomShift);
        assert_eq!(
            form.value.start_time,
            NaiveTime::from_hms_opt(7, 40, 0)
        );
    }

    #[test]
    fn picker_steps_snap_and_wrap() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(step_on_picker(Some(t(7, 30)), 1, 10), t(7, 40));
        assert_eq!(step_on_picker(Some(t(7, 35)), -1, 10), t(7, 30));
        assert_eq!(step_on_picker(Some(t(7, 35)), 1, 10), t(7, 40));
        assert_eq!(step_on_picker(Some(t(23, 50)), 1, 10), t(0, 0));
        assert_eq!(step_on_picker(Some(t(0, 0)), -1, 15), t(23, 45));
        assert_eq!(step_on_picker(None, 1, 10), t(8, 0));
    }

    #[tokio::test]
    async fn week_navigation_and_reset() {
        let mut store = UiStore::new();
        let mut s = state();
        s.enter(Route::Admin, &mut store);
        for _ in 0..3 {
            apply(&mut s, &mut store, Action::Week(WeekNav::Previous));
        }
        assert_eq!(s.week_offset, -3);
        assert_eq!(s.calendar_week().headers()[0], "Mon 21");
        apply(&mut s, &mut store, Action::Week(WeekNav::Current));
        assert_eq!(s.week_offset, 0);
    }

    #[tokio::test]
    async fn cursor_stays_inside_grid() {
        let mut store = UiStore::new();
        let mut s = state();
        s.enter(Route::Admin, &mut store);
        apply(&mut s, &mut store, Action::MoveCursor { rows: -4, cols: 20 });
        assert_eq!((s.cursor.row, s.cursor.col), (0, 6));
        apply(&mut s, &mut store, Action::MoveCursor { rows: 9, cols: 0 });
        assert_eq!(s.cursor.row, 3);
    }
}
