// File: ./src/model/shift.rs
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Break length used whenever a shift carries no times at all.
pub const NO_BREAK: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ShiftType {
    #[default]
    NoShift,
    EarlyShift,
    MiddleShift,
    LateShift,
    CustomShift,
    Vacation,
}

impl ShiftType {
    /// Order in which the editor lists the choices.
    pub const ALL: [ShiftType; 6] = [
        ShiftType::NoShift,
        ShiftType::EarlyShift,
        ShiftType::MiddleShift,
        ShiftType::LateShift,
        ShiftType::CustomShift,
        ShiftType::Vacation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShiftType::NoShift => "No shift",
            ShiftType::EarlyShift => "Early shift",
            ShiftType::MiddleShift => "Middle shift",
            ShiftType::LateShift => "Late shift",
            ShiftType::CustomShift => "Custom shift",
            ShiftType::Vacation => "Vacation",
        }
    }

    /// Short code used inside the (narrow) grid cells.
    pub fn short_code(self) -> &'static str {
        match self {
            ShiftType::NoShift => "--",
            ShiftType::EarlyShift => "E",
            ShiftType::MiddleShift => "M",
            ShiftType::LateShift => "L",
            ShiftType::CustomShift => "C",
            ShiftType::Vacation => "V",
        }
    }

    /// Default times for this type. `CustomShift` has none: its fields are
    /// whatever the user typed last.
    pub fn definition(self) -> Option<ShiftDefinition> {
        match self {
            ShiftType::NoShift | ShiftType::Vacation => Some(ShiftDefinition {
                start_time: None,
                end_time: None,
                break_minutes: NO_BREAK,
            }),
            ShiftType::EarlyShift => Some(ShiftDefinition::timed(hm(7, 30), hm(18, 0), 30)),
            ShiftType::MiddleShift => Some(ShiftDefinition::timed(hm(10, 0), hm(19, 0), 45)),
            ShiftType::LateShift => Some(ShiftDefinition::timed(hm(14, 0), hm(23, 0), 30)),
            ShiftType::CustomShift => None,
        }
    }

    /// Start, end and break are only free-form for custom shifts.
    pub fn has_editable_fields(self) -> bool {
        self == ShiftType::CustomShift
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftDefinition {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: u32,
}

impl ShiftDefinition {
    fn timed(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        Self {
            start_time: Some(start),
            end_time: Some(end),
            break_minutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftAssignment {
    pub shift_type: ShiftType,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: u32,
}

impl ShiftAssignment {
    /// The empty form: no shift, no times, no break.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Assignment pre-filled from the type's definition. Custom shifts get
    /// empty fields.
    pub fn of_type(shift_type: ShiftType) -> Self {
        let mut assignment = Self {
            shift_type,
            ..Self::blank()
        };
        if let Some(def) = shift_type.definition() {
            assignment.apply_definition(def);
        }
        assignment
    }

    pub fn custom(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        Self {
            shift_type: ShiftType::CustomShift,
            start_time: Some(start),
            end_time: Some(end),
            break_minutes,
        }
    }

    pub fn apply_definition(&mut self, def: ShiftDefinition) {
        self.start_time = def.start_time;
        self.end_time = def.end_time;
        self.break_minutes = def.break_minutes;
    }

    /// Minutes actually worked: span between start and end (wrapping past
    /// midnight) minus the break. `None` if either time is missing.
    pub fn worked_minutes(&self) -> Option<u32> {
        let start = self.start_time?;
        let end = self.end_time?;
        let start_min = start.num_seconds_from_midnight() / 60;
        let end_min = end.num_seconds_from_midnight() / 60;
        let span = if end_min >= start_min {
            end_min - start_min
        } else {
            24 * 60 - start_min + end_min
        };
        Some(span.saturating_sub(self.break_minutes))
    }

    /// Compact "07:30-18:00" rendering; the type label when there are no times.
    pub fn time_range_label(&self) -> String {
        match (self.start_time, self.end_time) {
            (Some(s), Some(e)) => format!("{}-{}", s.format("%H:%M"), e.format("%H:%M")),
            _ => self.shift_type.label().to_string(),
        }
    }
}

pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    // Only ever called with literal, in-range values.
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_are_absent_exactly_for_no_shift_and_vacation() {
        for t in ShiftType::ALL {
            let Some(def) = t.definition() else {
                assert_eq!(t, ShiftType::CustomShift);
                continue;
            };
            let timeless = matches!(t, ShiftType::NoShift | ShiftType::Vacation);
            assert_eq!(def.start_time.is_none(), timeless, "{t:?}");
            assert_eq!(def.end_time.is_none(), timeless, "{t:?}");
            if timeless {
                assert_eq!(def.break_minutes, 0);
            }
        }
    }

    #[test]
    fn early_shift_defaults() {
        let a = ShiftAssignment::of_type(ShiftType::EarlyShift);
        assert_eq!(a.start_time, Some(hm(7, 30)));
        assert_eq!(a.end_time, Some(hm(18, 0)));
        assert_eq!(a.break_minutes, 30);
        assert_eq!(a.worked_minutes(), Some(600));
        assert_eq!(a.time_range_label(), "07:30-18:00");
    }

    #[test]
    fn worked_minutes_wraps_midnight() {
        let a = ShiftAssignment::custom(hm(22, 0), hm(2, 0), 15);
        assert_eq!(a.worked_minutes(), Some(225));
        assert_eq!(ShiftAssignment::blank().worked_minutes(), None);
    }

    #[test]
    fn serde_names_match_variants() {
        let json = serde_json::to_string(&ShiftType::ALL).unwrap();
        assert_eq!(
            json,
            r#"["NoShift","EarlyShift","MiddleShift","LateShift","CustomShift","Vacation"]"#
        );
        let back: ShiftType = serde_json::from_str("\"LateShift\"").unwrap();
        assert_eq!(back, ShiftType::LateShift);
    }

    #[test]
    fn only_custom_is_editable() {
        let editable: Vec<_> = ShiftType::ALL
            .into_iter()
            .filter(|t| t.has_editable_fields())
            .collect();
        assert_eq!(editable, vec![ShiftType::CustomShift]);
    }
}
