//! Core types and rule metadata for catchlint.
//!
//! This crate provides the data structures shared across catchlint crates:
//! - [`types`] — Spans, violations, fix edits, and error types
//! - [`rule`] — The immutable [`RuleConfig`](rule::RuleConfig) describing
//!   the swallowed-exception rule and its synthesis templates

pub mod rule;
pub mod types;
