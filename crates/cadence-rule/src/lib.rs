//! Recurrence rules for scheduled tasks.
//!
//! A rule is a short text such as `d 7`, `y`, `w 1,3,5` or `m 1,-1 1,6`.
//! [`rule::parse_rule`] turns it into a [`rule::RecurrenceRule`] and
//! [`rule::next_occurrence`] advances a start date past a reference date.

pub mod error;
pub mod rule;
