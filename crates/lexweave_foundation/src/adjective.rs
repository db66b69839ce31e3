//! The adjective index: surface forms grouped by their lemma.
//!
//! Maps each adjective surface form to the lemma it derives from and
//! supports the reverse lookup (lemma → all surfaces sharing it). The
//! extraction walkers use it to group coordinated adjectives that denote the
//! same descriptive category.

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mapping between adjective surface forms and their lemmas.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdjectiveIndex {
    /// Surface → lemma.
    surface_to_lemma: HashMap<Arc<str>, Arc<str>>,
    /// Lemma → surfaces, in first-seen order.
    lemma_to_surfaces: HashMap<Arc<str>, Vec<Arc<str>>>,
    /// Lemmas in first-seen order.
    lemmas: Vec<Arc<str>>,
}

impl AdjectiveIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adjective surface form under its lemma.
    ///
    /// Re-adding a known surface is a no-op; its original lemma wins.
    pub fn add(&mut self, surface: &str, lemma: &str) {
        if self.surface_to_lemma.contains_key(surface) {
            return;
        }

        let surface_arc: Arc<str> = surface.into();
        let lemma_arc: Arc<str> = match self.lemma_to_surfaces.get_key_value(lemma) {
            Some((existing, _)) => existing.clone(),
            None => {
                let arc: Arc<str> = lemma.into();
                self.lemmas.push(arc.clone());
                self.lemma_to_surfaces.insert(arc.clone(), Vec::new());
                arc
            }
        };

        self.surface_to_lemma
            .insert(surface_arc.clone(), lemma_arc.clone());
        self.lemma_to_surfaces
            .get_mut(&lemma_arc)
            .expect("lemma registered above")
            .push(surface_arc);
    }

    /// Returns true if any surface form maps to this lemma.
    #[must_use]
    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.lemma_to_surfaces.contains_key(lemma)
    }

    /// Returns true if this surface form is registered.
    #[must_use]
    pub fn has_adjective(&self, surface: &str) -> bool {
        self.surface_to_lemma.contains_key(surface)
    }

    /// Lemma for a surface form.
    #[must_use]
    pub fn lemma_of(&self, surface: &str) -> Option<&str> {
        self.surface_to_lemma.get(surface).map(AsRef::as_ref)
    }

    /// All surface forms sharing a lemma, in first-seen order.
    #[must_use]
    pub fn surfaces_of(&self, lemma: &str) -> Vec<&str> {
        self.lemma_to_surfaces
            .get(lemma)
            .map(|surfaces| surfaces.iter().map(AsRef::as_ref).collect())
            .unwrap_or_default()
    }

    /// Number of registered surface forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surface_to_lemma.len()
    }

    /// Returns true if no adjectives are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surface_to_lemma.is_empty()
    }

    /// Unions another index into this one; surfaces already present keep
    /// their existing lemma.
    pub fn merge(&mut self, other: &AdjectiveIndex) {
        for lemma in &other.lemmas {
            for surface in other.surfaces_of(lemma) {
                self.add(surface, lemma);
            }
        }
    }
}
