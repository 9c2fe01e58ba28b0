use regex::Regex;

/// Classification tag attached to each compiled detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Anchored structural check for an email-shaped string.
    EmailShape,
    /// SQL-style control keywords in proximity.
    InjectionSignature,
    /// Markup, script, or code-execution trigger substring.
    ScriptSignature,
}

/// An immutable compiled pattern plus its classification.
#[derive(Debug)]
pub(crate) struct DetectionRule {
    pub(crate) kind: RuleKind,
    pub(crate) pattern: Regex,
}

/// An immutable case-insensitive (pattern, replacement) pair.
#[derive(Debug)]
pub(crate) struct SanitizationRule {
    pub(crate) pattern: Regex,
    pub(crate) replacement: &'static str,
}

/// Anchored email shape. Structure only — says nothing about deliverability.
pub(crate) const EMAIL_SHAPE: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

/// Literal substrings stripped by `sanitize`, applied one at a time in this
/// order. Note `</script>` is deliberately absent.
pub(crate) const SANITIZE_LITERALS: [&str; 3] = ["<script>", "javascript:", "onerror="];

/// SQL control keywords in proximity. `(?s)` lets the gap span newlines.
pub(crate) const SQL_PROXIMITY: &str =
    r"(?is)(union.*select|insert.*into|delete.*from|drop.*table)";

/// Markup and script trigger substrings.
pub(crate) const MARKUP_TRIGGERS: &str = r"(?i)(script|javascript|onerror|onclick)";

/// Code-execution call patterns.
pub(crate) const EXEC_CALLS: &str = r"(?i)(eval\(|exec\(|system\()";

/// Compile one of the hard-coded patterns above.
#[allow(clippy::expect_used)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded pattern is valid")
}

/// Compile a case-insensitive matcher for a literal substring.
pub(crate) fn compile_literal(literal: &str) -> Regex {
    compile(&format!("(?i){}", regex::escape(literal)))
}
