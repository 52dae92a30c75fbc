//! Public API surface for the schedule engine.
//!
//! This file consolidates the types and functions exchanged with the
//! application shell: the scraper/cache loader (produces [`Section`]
//! rows and calls the parser), the GUI selection panel (calls
//! [`build_schedule`] on every toggle) and the report/PNG exporters
//! (read [`BuildResult`] fields). All types derive Serialize/Deserialize
//! for the JSON section cache.

pub use crate::models::section::Section;
pub use crate::models::slot::{
    weekday_label, weekday_label_long, Period, TimeSlot, WEEKDAY_COUNT, WEEKDAY_LABELS,
    WEEKDAY_LABELS_LONG,
};
pub use crate::services::parser::{
    attach_parsed_slots, parse_schedule_raw, ParseError, ParseResult,
};
pub use crate::services::schedule::{
    build_schedule, calculate_credits, conflict_uids, selected_sections, summarize_selection,
    BuildResult, Conflict, GridRow, OccupancyGrid,
};
