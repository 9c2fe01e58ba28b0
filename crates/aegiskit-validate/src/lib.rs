//! Pattern-based validation and sanitization of untrusted text.
//!
//! This crate classifies and rewrites text against a fixed rule set: an
//! anchored email shape check, literal-substring sanitization, and a
//! heuristic detector for injection and script payloads. All rules are
//! compiled once at construction and never mutated, so a single
//! [`PatternValidator`] can serve any number of concurrent callers without
//! synchronization.
//!
//! # Main types
//!
//! - [`PatternValidator`] — Validates, sanitizes, and flags untrusted text.
//! - [`RuleKind`] — Classification tag attached to each detection rule.

/// Compiled rule definitions and the fixed trigger lists.
pub mod rules;
/// The validator over the compiled rule set.
pub mod validator;

pub use rules::RuleKind;
pub use validator::PatternValidator;
