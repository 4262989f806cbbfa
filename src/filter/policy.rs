//! Per-field match policies

/// Record-side values that are compatible with any concrete selection
pub const WILDCARD_VALUES: &[&str] = &["Multiple", "All"];

/// How a record field is compared against a selected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Field equals the selection
    Exact,
    /// Field equals the selection, or the field is a wildcard value
    ExactOrWildcard,
    /// Field contains the selection as a substring
    Contains,
    /// Lowercased field contains the lowercased selection
    ContainsIgnoreCase,
}

impl MatchPolicy {
    /// Compare a record field against a concrete (non no-op) selection
    pub fn matches(&self, field: &str, selection: &str) -> bool {
        match self {
            MatchPolicy::Exact => field == selection,
            MatchPolicy::ExactOrWildcard => {
                field == selection || WILDCARD_VALUES.contains(&field)
            }
            // Equipment lists are matched as one string, so "Oven" also
            // matches "Steam Oven" and "RTFOT Oven".
            MatchPolicy::Contains => field.contains(selection),
            MatchPolicy::ContainsIgnoreCase => {
                field.to_lowercase().contains(&selection.to_lowercase())
            }
        }
    }
}
