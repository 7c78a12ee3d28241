//! Posting sets: the documents a term occurs in.
//!
//! On the wire a posting set is either a bare integer (exactly one
//! document) or an array of integers. Both forms are accepted on
//! load and the compact form is always written back.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::types::DocumentId;

/// Ordered set of document ids without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingSet(BTreeSet<DocumentId>);

impl PostingSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a document, returning false if it was already present
    pub fn insert(&mut self, id: DocumentId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.0.iter().copied()
    }

    /// Largest id in the set
    pub fn max_id(&self) -> Option<DocumentId> {
        self.0.last().copied()
    }

    /// Add every id of `other` to this set
    pub fn extend_from(&mut self, other: &PostingSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn intersection(&self, other: &PostingSet) -> PostingSet {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    pub fn difference(&self, other: &PostingSet) -> PostingSet {
        Self(self.0.difference(&other.0).copied().collect())
    }
}

impl FromIterator<DocumentId> for PostingSet {
    fn from_iter<I: IntoIterator<Item = DocumentId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PostingSet {
    type Item = &'a DocumentId;
    type IntoIter = std::collections::btree_set::Iter<'a, DocumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePostings {
    One(u32),
    Many(Vec<u32>),
}

impl Serialize for PostingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.len() == 1 {
            if let Some(id) = self.0.first() {
                return serializer.serialize_u32(id.0);
            }
        }
        serializer.collect_seq(self.0.iter().map(|id| id.0))
    }
}

impl<'de> Deserialize<'de> for PostingSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WirePostings::deserialize(deserializer) {
            Ok(WirePostings::One(id)) => Ok(std::iter::once(DocumentId(id)).collect()),
            Ok(WirePostings::Many(ids)) => Ok(ids.into_iter().map(DocumentId).collect()),
            Err(_) => Err(D::Error::custom(
                "posting set must be a document index or an array of document indices",
            )),
        }
    }
}
