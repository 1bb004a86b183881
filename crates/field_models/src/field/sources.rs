//! Upstream field storage for composed fields.
//!
//! [`Sources`] holds the exact number of upstream [`SharedField`]s a combiner or
//! transformer declared. The count is checked once at construction so evaluation
//! can index without further checks.
use std::ops::Index;

use crate::error::{Error, Result};
use crate::field::SharedField;

/// Fixed-size list of upstream fields.
#[derive(Clone)]
pub struct Sources {
    fields: Vec<SharedField>,
}

impl Sources {
    /// Creates a source list, failing unless exactly `expected` fields are given.
    pub fn try_new(expected: usize, fields: Vec<SharedField>) -> Result<Self> {
        if fields.len() != expected {
            return Err(Error::SourceCount {
                expected,
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    /// Creates a source list whose length is known at compile time.
    pub(crate) fn from_array<const N: usize>(fields: [SharedField; N]) -> Self {
        Self {
            fields: fields.into(),
        }
    }

    /// Creates an empty source list for leaf fields.
    pub fn none() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns the number of upstream fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no upstream fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Retrieves the upstream field at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SharedField> {
        self.fields.get(index)
    }

    /// Iterates over the upstream fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedField> {
        self.fields.iter()
    }
}

impl Index<usize> for Sources {
    type Output = SharedField;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl std::fmt::Debug for Sources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sources")
            .field("len", &self.fields.len())
            .finish()
    }
}
