use crate::aggregate::{Group, MatchTypeSet};
use crate::records::MatchType;

/// Decides whether a group qualifies for a filtered view.
///
/// A group qualifies when it has seen at least `min_match_types` distinct match types
/// and one of them is `required`. Note that [`MatchType::BroadLegacy`] does not satisfy a
/// [`MatchType::Broad`] requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    min_match_types: usize,
    required: MatchType,
}

impl ViewFilter {
    #[must_use]
    pub const fn new(min_match_types: usize, required: MatchType) -> Self {
        Self { min_match_types, required }
    }

    #[must_use]
    pub const fn min_match_types(&self) -> usize {
        self.min_match_types
    }

    #[must_use]
    pub const fn required(&self) -> &MatchType {
        &self.required
    }

    #[must_use]
    pub fn qualifies(&self, group: &Group) -> bool {
        self.qualifies_set(&group.match_types)
    }

    #[must_use]
    pub fn qualifies_set(&self, match_types: &MatchTypeSet) -> bool {
        match_types.len() >= self.min_match_types && match_types.contains(&self.required)
    }
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self::new(2, MatchType::Broad)
    }
}
