//! Enforcement of the catchlint swallowed-exception rule.
//!
//! CL001: a catch clause must log the exception it captures. Flags
//! clauses that swallow the error and rewrites a flagged clause to
//! insert a `logger.Error(...)` call, introducing an `ex` binding when
//! the clause had none.

pub mod binding;
pub mod classifier;
pub mod context;
pub mod engine;
pub mod rewrite;
pub mod synthesize;
