// File: ./src/editor.rs
// Shift edit modal: Closed -> Open(form) -> Closed.
use crate::model::{CellKey, ShiftAssignment, ShiftType};
use crate::store::UiStore;
use chrono::{Duration, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    ShiftType,
    StartTime,
    EndTime,
    BreakMinutes,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::ShiftType => FormField::StartTime,
            FormField::StartTime => FormField::EndTime,
            FormField::EndTime => FormField::BreakMinutes,
            FormField::BreakMinutes => FormField::ShiftType,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftForm {
    pub cell: CellKey,
    pub value: ShiftAssignment,
    pub focus: FormField,
}

impl ShiftForm {
    /// Start, end and break accept input only for custom shifts.
    pub fn fields_editable(&self) -> bool {
        self.value.shift_type.has_editable_fields()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Open(ShiftForm),
}

#[derive(Debug, Default)]
pub struct ShiftEditor {
    state: EditorState,
}

impl ShiftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
    }

    pub fn form(&self) -> Option<&ShiftForm> {
        match &self.state {
            EditorState::Open(form) => Some(form),
            EditorState::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut ShiftForm> {
        match &mut self.state {
            EditorState::Open(form) => Some(form),
            EditorState::Closed => None,
        }
    }

    /// A grid cell was pressed. The form always starts blank, even if the
    /// cell already holds an assignment.
    pub fn open(&mut self, cell: CellKey, store: &mut UiStore) {
        log::debug!("editor open for {}#{}", cell.staff, cell.weekday);
        self.state = EditorState::Open(ShiftForm {
            cell,
            value: ShiftAssignment::blank(),
            focus: FormField::ShiftType,
        });
        store.set_modal_open(true);
    }

    /// Switches the type and copies its default times into the form.
    /// Custom shifts keep the fields as last edited. Ignored while closed.
    pub fn select_shift_type(&mut self, shift_type: ShiftType) {
        let Some(form) = self.form_mut() else {
            return;
        };
        form.value.shift_type = shift_type;
        if let Some(def) = shift_type.definition() {
            form.value.apply_definition(def);
        }
    }

    /// Moves the type selection by `delta` positions through [`ShiftType::ALL`], wrapping.
    pub fn cycle_shift_type(&mut self, delta: isize) {
        let Some(form) = self.form() else {
            return;
        };
        let len = ShiftType::ALL.len() as isize;
        let idx = ShiftType::ALL
            .iter()
            .position(|t| *t == form.value.shift_type)
            .unwrap_or(0) as isize;
        let next = ShiftType::ALL[(idx + delta).rem_euclid(len) as usize];
        self.select_shift_type(next);
    }

    pub fn focus_next(&mut self) {
        if let Some(form) = self.form_mut() {
            form.focus = form.focus.next();
        }
    }

    fn editable_form(&mut self) -> Option<&mut ShiftForm> {
        self.form_mut().filter(|f| f.fields_editable())
    }

    /// Returns false when the field is read-only (or the editor is closed).
    pub fn set_start_time(&mut self, time: Option<NaiveTime>) -> bool {
        self.editable_form()
            .map(|f| f.value.start_time = time)
            .is_some()
    }

    pub fn set_end_time(&mut self, time: Option<NaiveTime>) -> bool {
        self.editable_form()
            .map(|f| f.value.end_time = time)
            .is_some()
    }

    pub fn set_break_minutes(&mut self, minutes: u32) -> bool {
        self.editable_form()
            .map(|f| f.value.break_minutes = minutes)
            .is_some()
    }

    /// Nudges the focused field: times by `minutes` (wrapping around midnight,
    /// an unset time starts from `fallback`), the break by `minutes`
    /// saturating at zero. On the type field it cycles the type instead.
    pub fn adjust_focused(&mut self, minutes: i64, fallback: NaiveTime) -> bool {
        let Some(focus) = self.form().map(|f| f.focus) else {
            return false;
        };
        if focus == FormField::ShiftType {
            self.cycle_shift_type(minutes.signum() as isize);
            return true;
        }
        let Some(form) = self.editable_form() else {
            return false;
        };
        let shift = |t: Option<NaiveTime>| {
            let (next, _) = t
                .unwrap_or(fallback)
                .overflowing_add_signed(Duration::minutes(minutes));
            Some(next)
        };
        match focus {
            FormField::StartTime => form.value.start_time = shift(form.value.start_time),
            FormField::EndTime => form.value.end_time = shift(form.value.end_time),
            FormField::BreakMinutes => {
                let next = form.value.break_minutes as i64 + minutes;
                form.value.break_minutes = next.max(0) as u32;
            }
            FormField::ShiftType => unreachable!(),
        }
        true
    }

    /// Closes the modal and throws the form away.
    pub fn cancel(&mut self, store: &mut UiStore) {
        if self.is_open() {
            log::debug!("editor cancelled");
        }
        self.state = EditorState::Closed;
        store.set_modal_open(false);
    }

    /// Closes the modal and hands the finished assignment to `on_accept`.
    /// Does nothing but close when the editor was not open.
    pub fn accept<F>(&mut self, store: &mut UiStore, on_accept: F)
    where
        F: FnOnce(CellKey, ShiftAssignment),
    {
        let previous = std::mem::take(&mut self.state);
        store.set_modal_open(false);
        if let EditorState::Open(form) = previous {
            log::info!(
                "accepted {:?} for {}#{}",
                form.value.shift_type,
                form.cell.staff,
                form.cell.weekday
            );
            on_accept(form.cell, form.value);
        }
    }

    /// Keeps the editor in step with the shared modal flag when something
    /// else (an overlay dismissal) closed it.
    pub fn sync_with(&mut self, store: &UiStore) {
        if !store.is_modal_open() && self.is_open() {
            self.state = EditorState::Closed;
        }
    }
}
