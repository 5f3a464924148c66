//! Category → strategy resolution.

use std::collections::HashMap;
use thiserror::Error;

use crate::category::{forms, Category, FormField};
use crate::render::{self, RenderFn};

use super::traits::ToolStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a strategy is already registered for category \"{0}\"")]
    DuplicateCategory(Category),
    #[error("fallback strategies cannot be registered under a category")]
    MissingCategory,
}

/// Resolves a category label to its execution strategy, input form contract,
/// and result layout.
///
/// Lookup normalizes the label first, so `"Web Security"` and `"web security"`
/// hit the same entry. Labels that don't parse resolve to the fallback
/// strategy; that is a soft fallback, not a failure.
pub struct StrategyRegistry {
    strategies: HashMap<Category, Box<dyn ToolStrategy>>,
    fallback: Box<dyn ToolStrategy>,
}

impl StrategyRegistry {
    pub fn new(fallback: Box<dyn ToolStrategy>) -> Self {
        Self {
            strategies: HashMap::new(),
            fallback,
        }
    }

    /// Register a strategy under its own category. A second registration for
    /// the same category is rejected rather than silently replaced.
    pub fn register(&mut self, strategy: Box<dyn ToolStrategy>) -> Result<(), RegistryError> {
        let category = strategy.category().ok_or(RegistryError::MissingCategory)?;
        if self.strategies.contains_key(&category) {
            return Err(RegistryError::DuplicateCategory(category));
        }
        self.strategies.insert(category, strategy);
        Ok(())
    }

    /// The strategy for a raw descriptor label; fallback when unknown.
    pub fn resolve(&self, label: &str) -> &dyn ToolStrategy {
        match Category::parse(label).and_then(|category| self.strategies.get(&category)) {
            Some(strategy) => strategy.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    /// The input form contract for a raw descriptor label; empty when unknown.
    pub fn form_contract(&self, label: &str) -> &'static [FormField] {
        Category::parse(label).map_or(&[], forms::form_contract)
    }

    /// The result layout for a raw descriptor label.
    pub fn layout(&self, label: &str) -> RenderFn {
        render::layout_for(Category::parse(label))
    }

    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.strategies.keys().copied().collect();
        categories.sort_by_key(|c| c.label());
        categories
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
