//! Pairwise correspondence generation for one message group

use log::debug;

use crate::correspondence::TypeCorrespondence;
use crate::error::GenerateError;
use crate::namespace::{ClassId, HeaderModel, NamespaceId};

/// All `(i, j)` with `i < j < n`, `i` ascending then `j` ascending.
pub fn unordered_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Generates the correspondences of one message group into a target namespace.
pub struct PairwiseGenerator<'a> {
    message: &'a str,
    target: NamespaceId,
}

impl<'a> PairwiseGenerator<'a> {
    pub fn new(message: &'a str, target: NamespaceId) -> Self {
        Self { message, target }
    }

    /// Builds the correspondences for every pair of `classes` without
    /// touching the model.
    pub fn build(
        &self,
        model: &HeaderModel,
        classes: &[ClassId],
    ) -> Result<Vec<TypeCorrespondence>, GenerateError> {
        if self.message.is_empty() {
            return Err(GenerateError::EmptyMessageName);
        }
        if classes.is_empty() {
            return Err(GenerateError::EmptyGroup(self.message.to_string()));
        }
        for (i, j) in unordered_pairs(classes.len()) {
            if classes[i] == classes[j] {
                return Err(GenerateError::SelfPair {
                    group: self.message.to_string(),
                    class: model.class(classes[i])?.name().to_string(),
                });
            }
        }
        if classes.len() == 1 {
            debug!("group {} has a single class, nothing to pair", self.message);
        }

        let mut maps = vec![];
        for (i, j) in unordered_pairs(classes.len()) {
            let (first, second) = (classes[i], classes[j]);
            let stamped = model.class(first)?.compare_stamped(model.class(second)?);
            debug!("group {} pair ({}, {}) -> {:?}", self.message, i, j, stamped);

            if stamped.wants_stamped() {
                maps.push(TypeCorrespondence::new(self.message, first, second, model, true)?);
            }
            if stamped.wants_unstamped() {
                maps.push(TypeCorrespondence::new(self.message, first, second, model, false)?);
            }
        }
        Ok(maps)
    }

    /// Builds and registers the correspondences, returning how many were added.
    pub fn generate(
        &self,
        model: &mut HeaderModel,
        classes: &[ClassId],
    ) -> Result<usize, GenerateError> {
        let maps = self.build(model, classes)?;
        let count = maps.len();
        for map in maps {
            model.register_correspondence(self.target, map)?;
        }
        Ok(count)
    }
}
