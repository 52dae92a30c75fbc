//! # UTFPR Grade Builder Core
//!
//! Schedule-code parsing and weekly-grid assembly engine.
//!
//! This crate is the core of the grade-builder application: it decodes
//! the compact schedule codes published by the university portal (e.g.
//! `5T2(CE-208)` = Thursday, afternoon shift, second class, room CE-208)
//! and assembles selected course sections into a weekly occupancy grid,
//! reporting every timetable conflict.
//!
//! ## Features
//!
//! - **Schedule Parsing**: Decode raw portal schedule strings into
//!   normalized per-class slots, with strict validation of weekday,
//!   shift, class ranges and room designators
//! - **Grid Assembly**: Place parsed sections into the fixed weekly
//!   lattice (shift x class x weekday)
//! - **Conflict Detection**: Enumerate every cell occupied by more than
//!   one distinct section, in a stable canonical order
//! - **Selection Reporting**: Credit totals and plain-text summaries for
//!   the selection panel
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`api`]: Consolidated public type surface for collaborators
//! - [`models`]: Value types (slots, sections, weekday tables)
//! - [`services`]: Parsing and grid-building logic
//!
//! Everything here is pure and synchronous: no I/O, no shared state.
//! The scraping, GUI and export layers live in the application shell and
//! only exchange the value types defined in [`api`].

pub mod api;

pub mod models;

pub mod services;
