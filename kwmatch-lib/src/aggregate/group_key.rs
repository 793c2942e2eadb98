use crate::records::EnrichedRecord;
use compact_str::CompactString;

/// A field of a record that can take part in a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Account,
    Campaign,
    Keyword,
    SearchTerm,
}

impl Dimension {
    fn project(self, record: &EnrichedRecord) -> Option<CompactString> {
        match self {
            Self::Account => record.account.clone(),
            Self::Campaign => record.campaign_name.clone(),
            Self::Keyword => record.keyword_text.clone(),
            Self::SearchTerm => record.search_term.clone(),
        }
    }
}

/// The ordered list of dimensions a grouping structure is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyShape {
    dimensions: &'static [Dimension],
}

impl KeyShape {
    pub const CAMPAIGN: Self = Self::new(&[Dimension::Account, Dimension::Campaign]);
    pub const KEYWORD: Self = Self::new(&[Dimension::Account, Dimension::Campaign, Dimension::Keyword]);
    pub const KEYWORD_SEARCH_TERM: Self =
        Self::new(&[Dimension::Account, Dimension::Campaign, Dimension::Keyword, Dimension::SearchTerm]);
    pub const SEARCH_TERM: Self = Self::new(&[Dimension::SearchTerm]);

    #[must_use]
    pub const fn new(dimensions: &'static [Dimension]) -> Self {
        Self { dimensions }
    }

    #[must_use]
    pub const fn dimensions(&self) -> &'static [Dimension] {
        self.dimensions
    }

    /// Projects the record's fields onto this shape.
    #[must_use]
    pub fn key_for(&self, record: &EnrichedRecord) -> GroupKey {
        GroupKey(self.dimensions.iter().map(|dimension| dimension.project(record)).collect())
    }
}

/// The path of one group: one optional value per dimension of its [`KeyShape`].
///
/// An absent field is a key component of its own, so all records missing the same field
/// group together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(Vec<Option<CompactString>>);

impl GroupKey {
    #[must_use]
    pub fn components(&self) -> &[Option<CompactString>] {
        &self.0
    }
}

impl<S: Into<CompactString>> FromIterator<Option<S>> for GroupKey {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self(iter.into_iter().map(|component| component.map(Into::into)).collect())
    }
}
