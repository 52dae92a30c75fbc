//! Normalized schedule slot types.
//!
//! A slot is one weekly teaching unit, e.g. `5T2` = Thursday, afternoon
//! shift, second class. Slots are produced by the schedule parser and
//! addressed by the occupancy grid through their `(shift, class, weekday)`
//! cell key.

use serde::{Deserialize, Serialize};

/// Number of teaching weekdays (Monday through Saturday).
pub const WEEKDAY_COUNT: usize = 6;

/// Short weekday labels indexed by `day_number - 2` (Seg..Sab).
pub const WEEKDAY_LABELS: [&str; WEEKDAY_COUNT] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sab"];

/// Long weekday labels, used by the report and export collaborators.
pub const WEEKDAY_LABELS_LONG: [&str; WEEKDAY_COUNT] =
    ["Segunda", "Terca", "Quarta", "Quinta", "Sexta", "Sabado"];

/// Short label for a portal weekday number (2=Monday .. 7=Saturday).
pub fn weekday_label(day_number: u8) -> Option<&'static str> {
    let index = day_number.checked_sub(2)? as usize;
    WEEKDAY_LABELS.get(index).copied()
}

/// Long label for a portal weekday number (2=Monday .. 7=Saturday).
pub fn weekday_label_long(day_number: u8) -> Option<&'static str> {
    let index = day_number.checked_sub(2)? as usize;
    WEEKDAY_LABELS_LONG.get(index).copied()
}

/// Shift of the day, in the portal's M/T/N letter encoding.
///
/// Declaration order is the canonical grid order (morning rows first,
/// evening rows last) and drives conflict sorting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Period {
    #[serde(rename = "M")]
    Morning,
    #[serde(rename = "T")]
    Afternoon,
    #[serde(rename = "N")]
    Evening,
}

impl Period {
    /// All shifts in canonical order.
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    /// Decode a shift letter, case-insensitively.
    pub fn from_letter(letter: char) -> Option<Period> {
        match letter.to_ascii_uppercase() {
            'M' => Some(Period::Morning),
            'T' => Some(Period::Afternoon),
            'N' => Some(Period::Evening),
            _ => None,
        }
    }

    /// Canonical upper-case shift letter.
    pub fn letter(&self) -> char {
        match self {
            Period::Morning => 'M',
            Period::Afternoon => 'T',
            Period::Evening => 'N',
        }
    }

    /// Highest valid class number within this shift.
    pub fn max_class_number(&self) -> u8 {
        match self {
            Period::Morning | Period::Afternoon => 6,
            Period::Evening => 5,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One normalized weekly class slot.
///
/// Immutable once created by the parser; `class_number` is always within
/// the valid range for `period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Canonical cell code, e.g. `5T2`: weekday number, shift letter,
    /// class number.
    pub code: String,
    /// Portal weekday number, 2=Monday .. 7=Saturday.
    pub day_number: u8,
    /// Zero-based weekday column, `day_number - 2`.
    pub day_index: u8,
    /// Short weekday label matching `day_number`.
    pub day_label: String,
    pub period: Period,
    /// Class index within the shift (1-based).
    pub class_number: u8,
    /// Normalized room designator, if the portal published one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Original schedule fragment this slot was parsed from.
    #[serde(default)]
    pub source: String,
}

impl TimeSlot {
    /// Grid cell address of this slot.
    pub fn cell_key(&self) -> (Period, u8, u8) {
        (self.period, self.class_number, self.day_index)
    }
}
