//! Process-wide registry of the ordinal scales.
//!
//! Built once on first access and never mutated, so any thread can read it
//! without locking.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Category, Mood, ScaleKind, StressLevel, UnknownCategory};
use crate::domain::foundation::ClosedSet;

static REGISTRY: Lazy<ScaleRegistry> = Lazy::new(ScaleRegistry::build);

/// Returns the shared scale registry.
pub fn registry() -> &'static ScaleRegistry {
    &REGISTRY
}

/// Lookup tables for every registered scale.
#[derive(Debug)]
pub struct ScaleRegistry {
    ordered: HashMap<ScaleKind, Vec<Category>>,
    by_label: HashMap<(ScaleKind, &'static str), Category>,
}

impl ScaleRegistry {
    fn build() -> Self {
        let mut registry = Self {
            ordered: HashMap::new(),
            by_label: HashMap::new(),
        };
        registry.register(Mood::ALL.iter().map(|m| Category::Mood(*m)));
        registry.register(StressLevel::ALL.iter().map(|s| Category::Stress(*s)));
        registry
    }

    fn register(&mut self, categories: impl Iterator<Item = Category>) {
        let mut ordered: Vec<Category> = categories.collect();
        // Stable sort keeps declaration order among equal values.
        ordered.sort_by_key(|c| c.value());

        for category in &ordered {
            self.by_label
                .insert((category.scale(), category.label()), *category);
        }
        if let Some(first) = ordered.first() {
            self.ordered.insert(first.scale(), ordered);
        }
    }

    /// Returns the numeric value of a category.
    pub fn value_of(&self, category: Category) -> u8 {
        category.value()
    }

    /// Returns the categories of a scale, ascending by value, ties in
    /// declaration order.
    pub fn categories_of(&self, scale: ScaleKind) -> &[Category] {
        self.ordered.get(&scale).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolves a label on the given scale.
    pub fn parse(&self, scale: ScaleKind, label: &str) -> Result<Category, UnknownCategory> {
        self.by_label
            .get(&(scale, label))
            .copied()
            .ok_or_else(|| UnknownCategory {
                scale,
                label: label.to_string(),
            })
    }

    /// Resolves a label and returns its numeric value.
    pub fn value_of_label(&self, scale: ScaleKind, label: &str) -> Result<u8, UnknownCategory> {
        self.parse(scale, label).map(|c| c.value())
    }

    /// Orders two categories by severity value.
    pub fn compare(&self, a: Category, b: Category) -> Ordering {
        a.value().cmp(&b.value())
    }
}
