//! Folder-name rule matching.
//!
//! A rule is a single user-configured regex tested against the name of the
//! folder containing a message. Matching is unanchored containment — the
//! pattern may match anywhere in the name — and case sensitivity follows
//! the pattern's own syntax (use `(?i)` for case-insensitive rules).
//!
//! Empty patterns mean the rule is disabled and are never compiled (an
//! empty regex matches everything, which is not what a blank preference
//! field should do). Malformed patterns are logged and treated as
//! non-matching; nothing here panics or propagates errors.

use regex::Regex;
use tracing::{debug, error};

use crate::error::PatternError;

/// How a pattern test resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Empty pattern — rule disabled, regex never compiled.
    Disabled,
    /// Pattern failed to compile; treated as non-matching.
    Invalid,
    /// Pattern compiled and occurs in the folder name.
    Matched,
    /// Pattern compiled but does not occur in the folder name.
    NoMatch,
}

impl MatchOutcome {
    /// Whether this outcome counts as a rule match.
    pub fn is_match(self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Compile a configured pattern.
///
/// `Ok(None)` means the rule is disabled (empty pattern).
pub fn compile(pattern: &str) -> Result<Option<Regex>, PatternError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern)
        .map(Some)
        .map_err(|source| PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        })
}

/// Test a folder name against a configured pattern.
pub fn evaluate(folder_name: &str, pattern: &str) -> MatchOutcome {
    let regex = match compile(pattern) {
        Ok(Some(regex)) => regex,
        Ok(None) => {
            debug!("Pattern is empty, not testing");
            return MatchOutcome::Disabled;
        }
        Err(e) => {
            error!(pattern = %pattern, error = %e, "Invalid pattern");
            return MatchOutcome::Invalid;
        }
    };

    debug!(
        pattern = %pattern,
        folder = %folder_name,
        "Testing pattern against folder name"
    );

    if regex.is_match(folder_name) {
        debug!(pattern = %pattern, folder = %folder_name, "Pattern matched folder name");
        MatchOutcome::Matched
    } else {
        debug!(pattern = %pattern, folder = %folder_name, "Pattern didn't match folder name");
        MatchOutcome::NoMatch
    }
}

/// Boolean view of [`evaluate`] — `true` only for a real match.
pub fn matches(folder_name: &str, pattern: &str) -> bool {
    evaluate(folder_name, pattern).is_match()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_never_matches() {
        assert!(!matches("Inbox", ""));
        assert!(!matches("", ""));
        assert_eq!(evaluate("Newsletters", ""), MatchOutcome::Disabled);
    }

    #[test]
    fn empty_pattern_is_not_compiled() {
        // An empty regex would match everything; a blank preference must not.
        let compiled = compile("").expect("empty pattern is not an error");
        assert!(compiled.is_none());
    }

    #[test]
    fn invalid_pattern_never_matches() {
        assert_eq!(evaluate("Inbox", "["), MatchOutcome::Invalid);
        assert!(!matches("Inbox", "["));
        assert!(!matches("Inbox", "(unclosed"));
    }

    #[test]
    fn invalid_pattern_compile_reports_error() {
        let err = compile("[").expect_err("unterminated class should fail");
        let PatternError::Invalid { pattern, .. } = err;
        assert_eq!(pattern, "[");
    }

    #[test]
    fn pattern_matches_anywhere_in_name() {
        // Containment, not full-string equality.
        assert!(matches("Newsletters", "News.*"));
        assert!(matches("Spam/Promo", "Spam"));
        assert!(matches("My Spam Folder", "Spam"));
        assert_eq!(evaluate("Spam/Promo", "Promo"), MatchOutcome::Matched);
    }

    #[test]
    fn pattern_respects_anchors() {
        assert!(matches("Inbox", "^Inbox$"));
        assert!(!matches("Inbox/Work", "^Work"));
    }

    #[test]
    fn matching_is_case_sensitive_by_default() {
        assert!(!matches("Newsletters", "news"));
        assert!(matches("Newsletters", "(?i)news"));
    }

    #[test]
    fn non_matching_pattern_reports_no_match() {
        assert_eq!(evaluate("Inbox", "Spam"), MatchOutcome::NoMatch);
        assert!(!MatchOutcome::NoMatch.is_match());
        assert!(MatchOutcome::Matched.is_match());
    }
}
