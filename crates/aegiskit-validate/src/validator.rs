use crate::rules::{
    compile, compile_literal, DetectionRule, RuleKind, SanitizationRule, EMAIL_SHAPE, EXEC_CALLS,
    MARKUP_TRIGGERS, SANITIZE_LITERALS, SQL_PROXIMITY,
};
use regex::Regex;

/// Validates and rewrites untrusted text against a fixed rule set.
///
/// The rule set is compiled once at construction and owned exclusively by
/// the validator. Every operation is a pure function over its input, so one
/// instance can serve concurrent callers without locking.
#[derive(Debug)]
pub struct PatternValidator {
    email_shape: Regex,
    sanitization: Vec<SanitizationRule>,
    detection: Vec<DetectionRule>,
}

impl PatternValidator {
    /// Compile the fixed rule set.
    pub fn new() -> Self {
        let sanitization = SANITIZE_LITERALS
            .iter()
            .map(|literal| SanitizationRule {
                pattern: compile_literal(literal),
                replacement: "",
            })
            .collect();

        let detection = vec![
            DetectionRule {
                kind: RuleKind::InjectionSignature,
                pattern: compile(SQL_PROXIMITY),
            },
            DetectionRule {
                kind: RuleKind::ScriptSignature,
                pattern: compile(MARKUP_TRIGGERS),
            },
            DetectionRule {
                kind: RuleKind::ScriptSignature,
                pattern: compile(EXEC_CALLS),
            },
        ];

        Self {
            email_shape: compile(EMAIL_SHAPE),
            sanitization,
            detection,
        }
    }

    /// Returns true iff the entire string has the shape of an email address.
    ///
    /// Shape check only: `local@domain.tld` with a letters-only TLD of
    /// length ≥ 2, matched case-insensitively and anchored at both ends.
    /// Guarantees nothing about whether the mailbox exists. Malformed input
    /// simply returns false.
    pub fn validate_email_shape(&self, text: &str) -> bool {
        self.email_shape.is_match(text)
    }

    /// Strip known attack substrings, then trim surrounding whitespace.
    ///
    /// Removes `<script>`, `javascript:`, and `onerror=` case-insensitively,
    /// one rule at a time in that fixed order — later rules see the output
    /// of earlier ones, which matters on adversarially repeated payloads.
    /// Removal is literal: `</script>` is not on the list and passes
    /// through untouched. Never fails; empty input yields empty output.
    pub fn sanitize(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.sanitization {
            out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
        }
        out.trim().to_string()
    }

    /// Heuristic check for injection and script payloads.
    ///
    /// Returns true iff any pattern class matches, evaluated short-circuit
    /// in order: SQL keyword proximity, markup/script triggers, then
    /// code-execution call patterns. This is a detector, not a parser: it
    /// produces false positives on benign text containing the trigger
    /// substrings and false negatives on obfuscated payloads. Treat it as a
    /// defense-in-depth signal, never the sole line of defense.
    pub fn detect_suspicious_content(&self, text: &str) -> bool {
        self.detection.iter().any(|rule| rule.pattern.is_match(text))
    }

    /// The classification of the first matching detection rule, if any.
    pub fn classify(&self, text: &str) -> Option<RuleKind> {
        self.detection
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.kind)
    }
}

impl Default for PatternValidator {
    fn default() -> Self {
        Self::new()
    }
}
