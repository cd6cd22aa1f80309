//! ParseHint - 4 セグメント名の解釈モード

use serde::{Deserialize, Serialize};

/// How the fourth segment of `catalog/database/table/<segment>` is read.
///
/// - `Heuristic`: a segment containing `=` is a partition (partition names
///   conventionally encode `key=value` pairs), anything else is a view.
/// - `PreferView`: the segment is always a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseHint {
    PreferView,
    #[default]
    Heuristic,
}

impl ParseHint {
    /// Returns `true` when `segment` should become a view name.
    pub fn reads_as_view(self, segment: &str) -> bool {
        match self {
            ParseHint::PreferView => true,
            ParseHint::Heuristic => !segment.contains('='),
        }
    }
}

impl From<bool> for ParseHint {
    fn from(is_view: bool) -> Self {
        if is_view {
            ParseHint::PreferView
        } else {
            ParseHint::Heuristic
        }
    }
}
