//! Service layer: schedule parsing and grid assembly.
//!
//! Pure functions over the value types in [`crate::models`]. The
//! scraping layer calls the parser once per roster row; the GUI calls
//! the grid builder on every selection change.

pub mod parser;

pub mod schedule;

pub use parser::{attach_parsed_slots, parse_schedule_raw, ParseError, ParseResult};
pub use schedule::{
    build_schedule, calculate_credits, conflict_uids, selected_sections, summarize_selection,
};
