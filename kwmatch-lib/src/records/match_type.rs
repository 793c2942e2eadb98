use crate::metrics::Slot;
use compact_str::CompactString;
use core::fmt::{Display, Formatter};

/// A keyword match type after normalization.
///
/// Labels outside the known set are kept verbatim in `Other` so they still count as a
/// distinct match type when grouping, even though they own no metric slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchType {
    Exact,
    Phrase,
    Broad,
    BroadLegacy,
    NotAvailable,
    Other(CompactString),
}

impl MatchType {
    /// Interprets a raw match type label as delivered by the report source.
    ///
    /// Known labels must match exactly (`EXACT`, `PHRASE`, `BROAD`, `BROAD_LEGACY`).
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => Self::NotAvailable,
            Some(label) => Self::parse_known(label).unwrap_or_else(|| Self::Other(label.into())),
        }
    }

    /// Parses one of the four known labels.
    #[must_use]
    pub fn parse_known(label: &str) -> Option<Self> {
        match label {
            "EXACT" => Some(Self::Exact),
            "PHRASE" => Some(Self::Phrase),
            "BROAD" => Some(Self::Broad),
            "BROAD_LEGACY" => Some(Self::BroadLegacy),
            _ => None,
        }
    }

    /// The label written to reports, or `None` when no match type was reported.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Exact => Some("EXACT"),
            Self::Phrase => Some("PHRASE"),
            Self::Broad => Some("BROAD"),
            Self::BroadLegacy => Some("BROAD_LEGACY"),
            Self::NotAvailable => None,
            Self::Other(label) => Some(label.as_str()),
        }
    }

    /// The metric slot group this match type writes into, if any.
    ///
    /// The lookup goes through the lower-cased label, so an unrecognized label that
    /// lower-cases to a slot name (e.g. `exact`) still lands in that slot.
    #[must_use]
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Self::Exact => Some(Slot::Exact),
            Self::Phrase => Some(Slot::Phrase),
            Self::Broad => Some(Slot::Broad),
            Self::BroadLegacy => Some(Slot::BroadLegacy),
            Self::NotAvailable => None,
            Self::Other(label) => Slot::from_key(&label.to_ascii_lowercase()),
        }
    }
}

impl Display for MatchType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label().unwrap_or("NOT_AVAILABLE"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(MatchType::from_label(Some("EXACT")), MatchType::Exact);
        assert_eq!(MatchType::from_label(Some("PHRASE")), MatchType::Phrase);
        assert_eq!(MatchType::from_label(Some("BROAD")), MatchType::Broad);
        assert_eq!(MatchType::from_label(Some("BROAD_LEGACY")), MatchType::BroadLegacy);
    }

    #[test]
    fn test_from_label_absent() {
        assert_eq!(MatchType::from_label(None), MatchType::NotAvailable);
        assert_eq!(MatchType::NotAvailable.label(), None);
        assert_eq!(MatchType::NotAvailable.slot(), None);
    }

    #[test]
    fn test_from_label_unknown_is_kept() {
        let mt = MatchType::from_label(Some("UNKNOWN"));
        assert_eq!(mt, MatchType::Other("UNKNOWN".into()));
        assert_eq!(mt.label(), Some("UNKNOWN"));
        assert_eq!(mt.slot(), None);
    }

    #[test]
    fn test_lower_case_label_finds_slot() {
        let mt = MatchType::from_label(Some("exact"));
        assert_eq!(mt, MatchType::Other("exact".into()));
        assert_eq!(mt.slot(), Some(Slot::Exact));
    }

    #[test]
    fn test_slots() {
        assert_eq!(MatchType::Broad.slot(), Some(Slot::Broad));
        assert_eq!(MatchType::BroadLegacy.slot(), Some(Slot::BroadLegacy));
        assert_eq!(MatchType::Exact.slot(), Some(Slot::Exact));
        assert_eq!(MatchType::Phrase.slot(), Some(Slot::Phrase));
    }

    #[test]
    fn test_display() {
        assert_eq!(MatchType::BroadLegacy.to_string(), "BROAD_LEGACY");
        assert_eq!(MatchType::NotAvailable.to_string(), "NOT_AVAILABLE");
    }

    #[test]
    fn test_parse_known_rejects_other() {
        assert_eq!(MatchType::parse_known("broad"), None);
        assert_eq!(MatchType::parse_known("NOT_AVAILABLE"), None);
    }
}
