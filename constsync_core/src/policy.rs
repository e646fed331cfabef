//! Naming policy: ignore-list filtering, default value synthesis, and
//! output-name suffixing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Member names dropped from enum output unless the configuration overrides
/// the list. These are the framework's timestamp-tracking column names.
pub const DEFAULT_IGNORE_LIST: &[&str] = &["CREATED_AT", "UPDATED_AT"];

static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z])([A-Z])").expect("Invalid case boundary regex"));

/// Synthesized value for an enumeration case with no explicit backing value.
///
/// A separator is inserted at every adjacent lowercase/uppercase pair, then
/// the whole string is lowercased: `UserActive` becomes `user_active`.
/// Consecutive uppercase runs contain no such pair, so `HTMLParser` becomes
/// `htmlparser`; the adjacent-pair rule is kept as-is for compatibility with
/// already generated files.
pub fn default_case_value(name: &str) -> String {
    CASE_BOUNDARY.replace_all(name, "${1}_${2}").to_lowercase()
}

/// Whether a member name is on the ignore list.
pub fn is_ignored(name: &str, ignore_list: &[String]) -> bool {
    ignore_list.iter().any(|ignored| ignored == name)
}

/// Identifier used for the exported object: short type name plus the
/// configured suffix.
pub fn output_name(short_name: &str, suffix: &str) -> String {
    format!("{short_name}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_inserts_separator_at_case_boundary() {
        assert_eq!(default_case_value("UserActive"), "user_active");
        assert_eq!(default_case_value("Active"), "active");
        assert_eq!(default_case_value("PendingManualReview"), "pending_manual_review");
    }

    #[test]
    fn test_default_value_ignores_acronym_boundaries() {
        // no lowercase-then-uppercase pair inside the acronym
        assert_eq!(default_case_value("HTMLParser"), "htmlparser");
        assert_eq!(default_case_value("ID"), "id");
    }

    #[test]
    fn test_default_value_passes_through_snake_case() {
        assert_eq!(default_case_value("already_snake"), "already_snake");
        assert_eq!(default_case_value("SCREAMING_CASE"), "screaming_case");
    }

    #[test]
    fn test_ignore_list_matches_exact_names() {
        let ignore: Vec<String> = DEFAULT_IGNORE_LIST.iter().map(|s| s.to_string()).collect();
        assert!(is_ignored("CREATED_AT", &ignore));
        assert!(is_ignored("UPDATED_AT", &ignore));
        assert!(!is_ignored("created_at", &ignore));
        assert!(!is_ignored("DELETED_AT", &ignore));
    }

    #[test]
    fn test_output_name_appends_suffix() {
        assert_eq!(output_name("User", "Model"), "UserModel");
        assert_eq!(output_name("Status", ""), "Status");
    }
}
