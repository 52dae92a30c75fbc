//! Course section records.
//!
//! A [`Section`] is one row of the portal's open-sections table
//! ("turma"): course identity, section code, raw schedule string,
//! professor and seat metadata. The scraping layer fills these in and
//! attaches the parsed slots before they ever reach the grid builder.

use serde::{Deserialize, Serialize};

use crate::models::TimeSlot;

/// One open course section scraped from the portal roster.
///
/// Immutable for the lifetime of a grid build; the GUI may hold many of
/// these in memory across a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub course_code: String,
    pub course_name: String,
    pub section_code: String,
    /// Raw schedule string exactly as scraped, e.g. `5T2(CE-208) - 5T3(CE-208)`.
    pub schedule_raw: String,
    /// Normalized slots parsed from `schedule_raw`.
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats_freshman: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Credit count published by the portal, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
}

impl Section {
    /// Stable identity key: course, section and raw schedule combined.
    ///
    /// Two scraped rows with the same key are the same section; conflict
    /// detection compares sections by this key, never by reference.
    pub fn uid(&self) -> String {
        format!(
            "{}|{}|{}",
            self.course_code, self.section_code, self.schedule_raw
        )
        .trim()
        .to_string()
    }

    /// Portal credits when published, otherwise one credit-equivalent
    /// per weekly slot.
    pub fn estimated_credits(&self) -> u32 {
        self.credits.unwrap_or(self.slots.len() as u32)
    }

    /// Compact schedule rendering, e.g. `5T2(CE-208) 5T3(CE-208)`.
    pub fn compact_schedule(&self) -> String {
        let parts: Vec<String> = self
            .slots
            .iter()
            .map(|slot| match &slot.room {
                Some(room) => format!("{}({})", slot.code, room),
                None => slot.code.clone(),
            })
            .collect();
        parts.join(" ")
    }

    /// One-line roster rendering for lists and logs.
    pub fn summary_line(&self) -> String {
        let professor = self.professor.as_deref().unwrap_or("-");
        let seats = self
            .seats_total
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let status = self.status.as_deref().unwrap_or("-");
        format!(
            "{} - {} - {} - {} - Prof: {} - Vagas: {} - Status: {}",
            self.course_code,
            self.course_name,
            self.section_code,
            self.compact_schedule(),
            professor,
            seats,
            status
        )
    }

    /// Serialize for the application's JSON section cache.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize a cached section row.
    pub fn from_json(data: &str) -> serde_json::Result<Section> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    fn slot(code: &str, period: Period, class_number: u8, room: Option<&str>) -> TimeSlot {
        TimeSlot {
            code: code.to_string(),
            day_number: 5,
            day_index: 3,
            day_label: "Qui".to_string(),
            period,
            class_number,
            room: room.map(str::to_string),
            source: code.to_string(),
        }
    }

    fn sample_section() -> Section {
        Section {
            course_code: "ELT73B".to_string(),
            course_name: "Circuitos Digitais".to_string(),
            section_code: "S01".to_string(),
            schedule_raw: "5T2(CE-208) - 5T3".to_string(),
            slots: vec![
                slot("5T2", Period::Afternoon, 2, Some("CE-208")),
                slot("5T3", Period::Afternoon, 3, None),
            ],
            professor: Some("Silva".to_string()),
            seats_total: Some(40),
            seats_freshman: None,
            status: None,
            priority: None,
            credits: None,
        }
    }

    #[test]
    fn test_uid_combines_identity_fields() {
        let section = sample_section();
        assert_eq!(section.uid(), "ELT73B|S01|5T2(CE-208) - 5T3");
    }

    #[test]
    fn test_uid_distinguishes_sections_of_same_course() {
        let mut other = sample_section();
        other.section_code = "S02".to_string();
        assert_ne!(sample_section().uid(), other.uid());
    }

    #[test]
    fn test_estimated_credits_falls_back_to_slot_count() {
        let section = sample_section();
        assert_eq!(section.estimated_credits(), 2);
    }

    #[test]
    fn test_estimated_credits_prefers_portal_value() {
        let mut section = sample_section();
        section.credits = Some(4);
        assert_eq!(section.estimated_credits(), 4);
    }

    #[test]
    fn test_compact_schedule() {
        let section = sample_section();
        assert_eq!(section.compact_schedule(), "5T2(CE-208) 5T3");
    }

    #[test]
    fn test_summary_line_uses_placeholders() {
        let mut section = sample_section();
        section.professor = None;
        section.seats_total = None;
        let line = section.summary_line();
        assert!(line.contains("Prof: -"));
        assert!(line.contains("Vagas: -"));
        assert!(line.contains("Status: -"));
    }

    #[test]
    fn test_json_roundtrip() {
        let section = sample_section();
        let json = section.to_json().unwrap();
        let back = Section::from_json(&json).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_from_json_tolerates_missing_optional_fields() {
        let json = r#"{
            "course_code": "MAT7AL",
            "course_name": "Algebra Linear",
            "section_code": "S11",
            "schedule_raw": "2M1"
        }"#;
        let section = Section::from_json(json).unwrap();
        assert!(section.slots.is_empty());
        assert_eq!(section.professor, None);
        assert_eq!(section.estimated_credits(), 0);
    }
}
