//! Items tagged with the index of the dataset record they come from.

use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, iter::FromIterator, path::PathBuf};

/// A displayed unit carrying its ground-truth record index.
///
/// The label always points back to the originating record, no matter how
/// the item is reordered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item<T> {
    pub data: T,
    pub label: usize,
}

impl<T> Item<T> {
    pub fn new(data: T, label: usize) -> Self {
        Self { data, label }
    }

    /// Returns true if both items originate from the same record.
    pub fn matches<U>(&self, other: &Item<U>) -> bool {
        self.label == other.label
    }
}

/// An image shown to the annotator.
pub type ImageItem = Item<PathBuf>;

/// A caption shown to the annotator.
pub type CaptionItem = Item<String>;

/// An ordered set of record indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet(BTreeSet<usize>);

impl LabelSet {
    /// The labels `0..len`.
    pub fn range(len: usize) -> Self {
        (0..len).collect()
    }

    /// Collects the labels of a list of items.
    pub fn of_items<'a, T, I>(items: I) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = &'a Item<T>>,
    {
        items.into_iter().map(|item| item.label).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Labels in `self` that are not in `other`.
    pub fn difference<'a>(&'a self, other: &'a LabelSet) -> impl Iterator<Item = usize> + 'a {
        self.0.difference(&other.0).copied()
    }
}

impl FromIterator<usize> for LabelSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}
