//! Weekly grid assembly and conflict detection.
//!
//! Places already-parsed sections into the fixed weekly lattice
//! (shift x class x weekday) and enumerates every cell occupied by more
//! than one distinct section. Building is pure and best-effort: a slot
//! addressing a cell outside the lattice shape is logged and skipped,
//! never fatal, so one bad row cannot hide the rest of the schedule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Period, Section, WEEKDAY_COUNT, WEEKDAY_LABELS};

/// One (shift, class) row of the weekly grid with its six weekday cells.
///
/// Cell occupant lists keep insertion order (the order sections were
/// passed to [`build_schedule`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub period: Period,
    pub class_number: u8,
    pub days: [Vec<Section>; WEEKDAY_COUNT],
}

/// The full weekly occupancy lattice.
///
/// Every valid (shift, class) pair exists from construction - morning
/// and afternoon rows 1..6, evening rows 1..5 - each with six empty
/// weekday cells. Lookups by valid coordinates therefore never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    rows: Vec<GridRow>,
}

impl OccupancyGrid {
    /// Build the empty lattice with every valid cell pre-populated.
    pub fn new() -> Self {
        let mut rows = Vec::new();
        for period in Period::ALL {
            for class_number in 1..=period.max_class_number() {
                rows.push(GridRow {
                    period,
                    class_number,
                    days: std::array::from_fn(|_| Vec::new()),
                });
            }
        }
        OccupancyGrid { rows }
    }

    fn row_index(period: Period, class_number: u8) -> Option<usize> {
        if class_number < 1 || class_number > period.max_class_number() {
            return None;
        }
        let base: usize = Period::ALL
            .iter()
            .take_while(|p| **p != period)
            .map(|p| p.max_class_number() as usize)
            .sum();
        Some(base + class_number as usize - 1)
    }

    /// Occupants of one cell; `None` only for coordinates outside the
    /// lattice shape.
    pub fn cell(&self, period: Period, class_number: u8, day_index: u8) -> Option<&[Section]> {
        if day_index as usize >= WEEKDAY_COUNT {
            return None;
        }
        let row = &self.rows[Self::row_index(period, class_number)?];
        Some(&row.days[day_index as usize])
    }

    fn cell_mut(
        &mut self,
        period: Period,
        class_number: u8,
        day_index: u8,
    ) -> Option<&mut Vec<Section>> {
        if day_index as usize >= WEEKDAY_COUNT {
            return None;
        }
        let row = &mut self.rows[Self::row_index(period, class_number)?];
        Some(&mut row.days[day_index as usize])
    }

    /// Rows in canonical order (M1..M6, T1..T6, N1..N5), for the grid
    /// widget and PNG exporter.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// One over-occupied lattice cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Zero-based weekday column (0=Monday .. 5=Saturday).
    pub day_index: u8,
    pub day_label: String,
    pub period: Period,
    pub class_number: u8,
    /// Cell address code, e.g. `5T2`.
    pub cell_code: String,
    /// Every section occupying the cell, in insertion order.
    pub sections: Vec<Section>,
}

/// Result of one grid build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    pub grid: OccupancyGrid,
    /// Conflicts sorted by weekday, then shift, then class number.
    pub conflicts: Vec<Conflict>,
    /// Sum of every input section's credits, overlaps not deduplicated.
    pub credits_used: u32,
}

/// Total credits of a selection: portal credits when published, weekly
/// slot count otherwise.
pub fn calculate_credits(sections: &[Section]) -> u32 {
    sections.iter().map(Section::estimated_credits).sum()
}

/// Assemble the weekly grid for a selection and detect conflicts.
///
/// Deterministic: identical input sets produce identical conflict lists
/// regardless of section order. Two slots of the same section landing in
/// the same cell are not a conflict; two distinct sections are.
pub fn build_schedule(sections: &[Section]) -> BuildResult {
    let mut grid = OccupancyGrid::new();
    for section in sections {
        for slot in &section.slots {
            match grid.cell_mut(slot.period, slot.class_number, slot.day_index) {
                Some(cell) => cell.push(section.clone()),
                None => log::warn!(
                    "slot outside the grid shape ignored: {} ({})",
                    slot.code,
                    section.uid()
                ),
            }
        }
    }

    let mut conflicts = Vec::new();
    for row in &grid.rows {
        for (day_index, cell) in row.days.iter().enumerate() {
            if cell.len() < 2 {
                continue;
            }
            let distinct: HashSet<String> = cell.iter().map(Section::uid).collect();
            if distinct.len() > 1 {
                let day_number = day_index as u8 + 2;
                conflicts.push(Conflict {
                    day_index: day_index as u8,
                    day_label: WEEKDAY_LABELS[day_index].to_string(),
                    period: row.period,
                    class_number: row.class_number,
                    cell_code: format!("{}{}{}", day_number, row.period.letter(), row.class_number),
                    sections: cell.clone(),
                });
            }
        }
    }
    conflicts.sort_by_key(|c| (c.day_index, c.period, c.class_number));

    BuildResult {
        grid,
        conflicts,
        credits_used: calculate_credits(sections),
    }
}

/// Uids of every section involved in at least one conflict. The GUI uses
/// this to highlight the offending roster rows.
pub fn conflict_uids(result: &BuildResult) -> HashSet<String> {
    let mut uids = HashSet::new();
    for conflict in &result.conflicts {
        uids.extend(conflict.sections.iter().map(Section::uid));
    }
    uids
}

/// Order-preserving filter of the roster down to the selected uids.
pub fn selected_sections(all: &[Section], selected_uids: &HashSet<String>) -> Vec<Section> {
    all.iter()
        .filter(|section| selected_uids.contains(&section.uid()))
        .cloned()
        .collect()
}

/// Plain-text report of a selection: one line per section, then totals.
pub fn summarize_selection(sections: &[Section], result: &BuildResult) -> String {
    let mut lines: Vec<String> = sections
        .iter()
        .map(|section| {
            let schedule: Vec<String> = section
                .slots
                .iter()
                .map(|slot| match &slot.room {
                    Some(room) => format!("{}({})", slot.code, room),
                    None => slot.code.clone(),
                })
                .collect();
            format!(
                "{} - {} | horarios: {} | prof: {}",
                section.course_code,
                section.section_code,
                schedule.join(", "),
                section.professor.as_deref().unwrap_or("-")
            )
        })
        .collect();
    if lines.is_empty() {
        lines.push("Nenhuma turma selecionada.".to_string());
    }
    lines.push(String::new());
    lines.push(format!("Creditos/slots usados: {}", result.credits_used));
    lines.push(format!("Conflitos detectados: {}", result.conflicts.len()));
    lines.join("\n")
}
