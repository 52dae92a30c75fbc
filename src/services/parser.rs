//! Schedule time-code parser.
//!
//! Decodes the portal's compact schedule strings into normalized
//! [`TimeSlot`] lists. Accepted shapes include:
//!
//! - `5T2(CE-208)` - single class with a parenthesized room
//! - `3T3(*EK-307)` - room flagged with the portal's asterisk marker
//! - `6N1-2(EK-307)` - class range, expanded into individual slots
//! - `5T2(CE-208) - 5T3(CE-208)` - multiple fragments chained with a
//!   spaced hyphen (commas, semicolons and pipes also separate)
//! - `5N3-4 - LAB-INFO` - room after a plain hyphen instead of parens
//!
//! Parsing is a single left-to-right token scan: the text between
//! consecutive tokens must be pure separator characters, apart from an
//! optional plain-hyphen room attaching to the preceding token. Anything
//! else is a hard error, and any error aborts the whole parse.

use std::sync::OnceLock;

use anyhow::Context;
use regex::Regex;
use thiserror::Error;

use crate::models::{weekday_label, Period, Section, TimeSlot};

/// Result type for schedule parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors for malformed schedule strings.
///
/// These indicate a real data-quality problem in the scraped row; the
/// caller decides whether to skip the section or halt the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Non-empty input with no recognizable weekday/shift/class token.
    #[error("no recognizable schedule token in '{raw}'")]
    NoToken { raw: String },

    /// Leftover text between or after tokens that is not a separator.
    #[error("unrecognized schedule fragment: '{fragment}'")]
    UnrecognizedFragment { fragment: String },

    /// Weekday digit outside the portal's 2..7 range.
    #[error("weekday out of range (2..7) in token '{token}': {day}")]
    InvalidWeekday { token: String, day: u8 },

    /// Class value that is not a number, overflows, or is a reversed range.
    #[error("invalid class range in token '{token}': '{range}'")]
    InvalidClassRange { token: String, range: String },

    /// Class number outside the shift's valid range.
    #[error(
        "class number out of bounds for shift {period} in token '{token}': \
         {class_number} (allowed 1..{max})"
    )]
    ClassOutOfBounds {
        token: String,
        period: Period,
        class_number: u8,
        max: u8,
    },
}

/// One regex match of `<day><shift><classes>[(<room>)]` plus its span.
struct RawToken<'t> {
    text: &'t str,
    start: usize,
    end: usize,
    day: &'t str,
    period: char,
    classes: &'t str,
    room: Option<&'t str>,
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?P<day>\d)\s*(?P<period>[MTN])\s*(?P<classes>\d+(?:\s*-\s*\d+)?)(?:\s*\(\s*(?P<room>[^()]+?)\s*\))?",
        )
        .unwrap()
    })
}

fn scan_tokens(text: &str) -> Vec<RawToken<'_>> {
    token_re()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RawToken {
                text: whole.as_str(),
                start: whole.start(),
                end: whole.end(),
                day: caps.name("day")?.as_str(),
                period: caps.name("period")?.as_str().chars().next()?,
                classes: caps.name("classes")?.as_str(),
                room: caps.name("room").map(|m| m.as_str()),
            })
        })
        .collect()
}

/// Separator characters allowed between tokens: whitespace plus the
/// portal's mixed conventions (comma, semicolon, pipe, slash, hyphen).
fn is_separator_only(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || matches!(c, ',' | ';' | '|' | '/' | '-'))
}

/// Extract a plain-hyphen room from the gap after a token, e.g. the
/// ` - LAB-INFO` in `5N3-4 - LAB-INFO`. Returns the room text and the
/// byte length of the gap prefix consumed.
fn take_plain_room(gap: &str) -> Option<(&str, usize)> {
    let after_ws = gap.trim_start();
    let leading_ws = gap.len() - after_ws.len();
    let after_hyphen = after_ws.strip_prefix('-')?;
    let room_part = after_hyphen.trim_start();
    let inner_ws = after_hyphen.len() - room_part.len();
    let end = room_part
        .find(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '|' | '(' | ')'))
        .unwrap_or(room_part.len());
    if end == 0 {
        return None;
    }
    Some((&room_part[..end], leading_ws + 1 + inner_ws + end))
}

/// Normalize a room designator: drop the asterisk note marker and all
/// whitespace. Room codes are space-free tokens in the portal.
fn normalize_room(raw: Option<&str>) -> Option<String> {
    let room: String = raw?
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '*')
        .collect();
    if room.is_empty() {
        None
    } else {
        Some(room)
    }
}

/// Expand the class portion of a token (`2` or `3-4`) into individual
/// class numbers, validated against the shift's range.
fn expand_classes(raw: &str, period: Period, token: &str) -> ParseResult<Vec<u8>> {
    let invalid = || ParseError::InvalidClassRange {
        token: token.to_string(),
        range: raw.to_string(),
    };

    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let classes: Vec<u8> = match compact.split_once('-') {
        None => vec![compact.parse().map_err(|_| invalid())?],
        Some((start, end)) => {
            let start: u8 = start.parse().map_err(|_| invalid())?;
            let end: u8 = end.parse().map_err(|_| invalid())?;
            if end < start {
                return Err(invalid());
            }
            (start..=end).collect()
        }
    };

    let max = period.max_class_number();
    for &class_number in &classes {
        if class_number < 1 || class_number > max {
            return Err(ParseError::ClassOutOfBounds {
                token: token.to_string(),
                period,
                class_number,
                max,
            });
        }
    }
    Ok(classes)
}

/// Parse a raw portal schedule string into normalized slots.
///
/// Empty or whitespace-only input yields an empty list (a section may
/// legitimately have no scheduled meetings). Any malformed content is an
/// error; no partial result is ever returned.
///
/// Slot order follows the source left to right, with class ranges
/// expanded in ascending order.
pub fn parse_schedule_raw(raw: &str) -> ParseResult<Vec<TimeSlot>> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let tokens = scan_tokens(text);
    if tokens.is_empty() {
        return Err(ParseError::NoToken {
            raw: text.to_string(),
        });
    }

    let mut slots = Vec::new();
    let mut cursor = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        let gap = &text[cursor..token.start];
        if !is_separator_only(gap) {
            return Err(ParseError::UnrecognizedFragment {
                fragment: gap.trim().to_string(),
            });
        }
        cursor = token.end;

        let day_number: u8 = token.day.parse().map_err(|_| {
            ParseError::UnrecognizedFragment {
                fragment: token.text.to_string(),
            }
        })?;
        let day_label = weekday_label(day_number).ok_or_else(|| ParseError::InvalidWeekday {
            token: token.text.to_string(),
            day: day_number,
        })?;
        let period = Period::from_letter(token.period).ok_or_else(|| {
            // Unreachable given the token pattern; kept for totality.
            ParseError::UnrecognizedFragment {
                fragment: token.text.to_string(),
            }
        })?;
        let classes = expand_classes(token.classes, period, token.text)?;

        let mut room = normalize_room(token.room);
        if room.is_none() {
            // A room may trail the token after a plain hyphen. Only look
            // as far as the next token; whatever the room does not
            // consume is re-checked as separator text.
            let gap_end = tokens.get(index + 1).map_or(text.len(), |next| next.start);
            let lookahead = &text[token.end..gap_end];
            if !is_separator_only(lookahead) {
                if let Some((plain, consumed)) = take_plain_room(lookahead) {
                    room = normalize_room(Some(plain));
                    cursor = token.end + consumed;
                }
            }
        }

        for class_number in classes {
            let code = format!("{}{}{}", day_number, period.letter(), class_number);
            log::debug!("slot parsed: {} from '{}'", code, token.text);
            slots.push(TimeSlot {
                code,
                day_number,
                day_index: day_number - 2,
                day_label: day_label.to_string(),
                period,
                class_number,
                room: room.clone(),
                source: token.text.to_string(),
            });
        }
    }

    let tail = &text[cursor..];
    if !is_separator_only(tail) {
        return Err(ParseError::UnrecognizedFragment {
            fragment: tail.trim().to_string(),
        });
    }
    Ok(slots)
}

/// Parse `section.schedule_raw` and attach the normalized slots, wrapping
/// any error with the section identity for batch diagnostics.
///
/// This is the per-row entry point for the scraping and cache-loading
/// layers; one bad row fails here without touching the rest of the batch.
pub fn attach_parsed_slots(section: &mut Section) -> anyhow::Result<()> {
    let slots = parse_schedule_raw(&section.schedule_raw).with_context(|| {
        format!(
            "invalid schedule for {} {}",
            section.course_code, section.section_code
        )
    })?;
    section.slots = slots;
    Ok(())
}
