use crate::calendar::{CalendarWeek, compute_calendar_week};
use crate::clock::{Clock, DateTimeFormat, SystemClock, Ticker};
use crate::config::Config;
use crate::editor::ShiftEditor;
use crate::model::{CellKey, DAYS_PER_WEEK, ShiftBoard};
use crate::pincode::PincodeInput;
use crate::route::Route;
use crate::store::UiStore;
use anyhow::Result;
use chrono::{DateTime, Local};

pub const ADMIN_TITLE: &str = "Shift board";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub row: usize,
    pub col: usize,
}

pub struct AppState {
    pub route: Route,
    pub config: Config,
    pub format: DateTimeFormat,
    clock: Box<dyn Clock>,

    // Dashboard
    pub now: DateTime<Local>,
    pub pincode: PincodeInput,
    pub ticker: Ticker,

    // Admin
    pub week_offset: i64,
    /// Present only while the admin view is mounted.
    pub board: Option<ShiftBoard>,
    pub cursor: GridCursor,
    pub editor: ShiftEditor,

    // System
    pub message: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let format = config.date_time_format()?;
        Ok(Self {
            route: Route::Dashboard,
            format,
            now: clock.now(),
            clock,
            pincode: PincodeInput::new(config.pincode_length),
            ticker: Ticker::new(config.tick_interval()),
            week_offset: 0,
            board: None,
            cursor: GridCursor::default(),
            editor: ShiftEditor::new(),
            message: String::new(),
            should_quit: false,
            config,
        })
    }

    pub fn refresh_clock(&mut self) {
        self.now = self.clock.now();
    }

    pub fn calendar_week(&self) -> CalendarWeek {
        compute_calendar_week(
            self.week_offset,
            self.now.date_naive(),
            self.config.week_starts_on.weekday(),
        )
    }

    /// Tears down the current view and mounts `route`.
    pub fn enter(&mut self, route: Route, store: &mut UiStore) {
        match self.route {
            Route::Dashboard => {
                self.ticker.stop();
                self.pincode.press_clear();
            }
            Route::Admin => {
                self.editor.cancel(store);
                self.board = None;
            }
        }

        self.route = route;
        log::info!("navigated to {}", route);

        match route {
            Route::Dashboard => {
                self.refresh_clock();
                self.ticker.start();
            }
            Route::Admin => {
                self.board = Some(ShiftBoard::fixture());
                self.cursor = GridCursor::default();
                self.week_offset = 0;
                store.set_title(ADMIN_TITLE);
            }
        }
    }

    pub fn selected_cell(&self) -> Option<CellKey> {
        let board = self.board.as_ref()?;
        let staff = board.staff().get(self.cursor.row)?;
        Some(CellKey::new(staff.clone(), self.cursor.col))
    }

    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let row_count = self.board.as_ref().map_or(0, |b| b.staff().len());
        if row_count == 0 {
            return;
        }
        self.cursor.row = step_clamped(self.cursor.row, rows, row_count);
        self.cursor.col = step_clamped(self.cursor.col, cols, DAYS_PER_WEEK);
    }
}

fn step_clamped(value: usize, delta: isize, len: usize) -> usize {
    (value as isize + delta).clamp(0, len as isize - 1) as usize
}
