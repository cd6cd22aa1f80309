//! Wildcard strings for prefix search over catalogs.
//!
//! Backends search with `%` patterns (SQL `LIKE` style). The builder turns
//! optional source/database/table filters into such a pattern, and
//! [`WildcardPattern`] evaluates one in-process.

use std::fmt;

use super::qualified_name::{DELIMITER, QualifiedName};

/// Matches any run of characters, including none.
pub const WILDCARD: char = '%';

const WILDCARD_STR: &str = "%";

/// Creates a wild card string format of the qualified name.
///
/// Missing components become `%` and the whole pattern is `%`-suffixed.
/// Returns `None` when every component is missing, meaning "no filter".
///
/// ```
/// use qname_core::domain::wildcard::to_wildcard_string;
///
/// assert_eq!(to_wildcard_string(Some("c"), None, Some("t")).as_deref(), Some("c/%/t%"));
/// assert_eq!(to_wildcard_string(None, None, None), None);
/// ```
pub fn to_wildcard_string(
    source_name: Option<&str>,
    database_name: Option<&str>,
    table_name: Option<&str>,
) -> Option<String> {
    if source_name.is_none() && database_name.is_none() && table_name.is_none() {
        return None;
    }
    let mut pattern = [source_name, database_name, table_name]
        .map(|component| component.unwrap_or(WILDCARD_STR))
        .join(DELIMITER);
    pattern.push(WILDCARD);
    Some(pattern)
}

/// A `%` pattern matched against canonical name strings.
///
/// Every character other than `%` matches itself; matching is case-sensitive,
/// so patterns should be written against the canonical (lower-cased) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardPattern {
    pattern: String,
}

impl WildcardPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Pattern for the given filters; `None` when no filter applies.
    pub fn for_components(
        source_name: Option<&str>,
        database_name: Option<&str>,
        table_name: Option<&str>,
    ) -> Option<Self> {
        to_wildcard_string(source_name, database_name, table_name).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, name: &QualifiedName) -> bool {
        self.matches_str(name.as_str())
    }

    pub fn matches_str(&self, candidate: &str) -> bool {
        let mut pieces = self.pattern.split(WILDCARD);
        let head = pieces.next().unwrap_or_default();
        let Some(mut rest) = candidate.strip_prefix(head) else {
            return false;
        };

        let tail: Vec<&str> = pieces.collect();
        let Some((last, middle)) = tail.split_last() else {
            // no wildcard at all: exact match
            return rest.is_empty();
        };

        for piece in middle {
            match rest.find(piece) {
                Some(at) => rest = &rest[at + piece.len()..],
                None => return false,
            }
        }
        rest.ends_with(last)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<String> for WildcardPattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::source_and_table(Some("c"), None, Some("t"), Some("c/%/t%"))]
    #[case::source_only(Some("c"), None, None, Some("c/%/%%"))]
    #[case::table_only(None, None, Some("t"), Some("%/%/t%"))]
    #[case::all(Some("c"), Some("d"), Some("t"), Some("c/d/t%"))]
    #[case::none(None, None, None, None)]
    fn builds_wildcard_strings(
        #[case] source: Option<&str>,
        #[case] database: Option<&str>,
        #[case] table: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(to_wildcard_string(source, database, table).as_deref(), expected);
    }

    #[test]
    fn components_are_not_normalized() {
        assert_eq!(
            to_wildcard_string(Some("Prod"), Some(" db"), None).as_deref(),
            Some("Prod/ db/%%")
        );
    }

    #[rstest]
    #[case::prefix("c/%/t%", "c/d/t", true)]
    #[case::prefix_longer_table("c/%/t%", "c/d/tbl", true)]
    #[case::prefix_partition("c/%/t%", "c/d/t/p=1", true)]
    #[case::wrong_catalog("c/%/t%", "x/d/t", false)]
    #[case::missing_table("c/%/t%", "c/d", false)]
    #[case::exact("c/d", "c/d", true)]
    #[case::exact_mismatch("c/d", "c/d/t", false)]
    #[case::only_wildcard("%", "anything", true)]
    #[case::empty_candidate("%", "", true)]
    #[case::suffix("%/t", "c/d/t", true)]
    #[case::suffix_mismatch("%/t", "c/d/tt", false)]
    #[case::case_sensitive("C%", "c/d", false)]
    fn matches_percent_patterns(#[case] pattern: &str, #[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(WildcardPattern::new(pattern).matches_str(candidate), expected);
    }

    #[test]
    fn suffix_piece_does_not_reuse_consumed_text() {
        // "ab" is consumed by the middle piece, leaving nothing for the suffix
        let pattern = WildcardPattern::new("%ab%b");
        assert!(!pattern.matches_str("ab"));
        assert!(pattern.matches_str("abb"));
    }

    #[test]
    fn matches_qualified_names_by_canonical_form() {
        let pattern = WildcardPattern::for_components(Some("prod"), Some("db"), None).unwrap();
        let hit = QualifiedName::of_table("PROD", "DB", "Events").unwrap();
        let miss = QualifiedName::of_table("test", "db", "events").unwrap();
        assert!(pattern.matches(&hit));
        assert!(!pattern.matches(&miss));
        assert_eq!(pattern.to_string(), "prod/db/%%");
    }

    #[test]
    fn no_components_means_no_pattern() {
        assert_eq!(WildcardPattern::for_components(None, None, None), None);
    }
}
