//! The tool execution engine.
//!
//! Four pieces, wired together by the shells:
//!
//! - [`registry::StrategyRegistry`] resolves a category label to its execution
//!   strategy, input form contract, and result layout (case-insensitively).
//! - [`dispatcher::Dispatcher`] runs a tool through its strategy and commits
//!   the resulting envelope to the cache, discarding stale completions.
//! - [`cache::ResultCache`] keeps the most recent envelope per tool id.
//! - [`envelope`] defines the per-category payload shapes, including each
//!   delegated category's zero-value error shape.
//!
//! Strategies themselves live in [`crate::strategies`], one per category.

pub mod cache;
pub mod dispatcher;
pub mod envelope;
pub mod input;
pub mod registry;
pub mod traits;

pub use cache::ResultCache;
pub use dispatcher::Dispatcher;
pub use envelope::ResultEnvelope;
pub use input::{ExecutionInput, ValidationError};
pub use registry::{RegistryError, StrategyRegistry};
pub use traits::ToolStrategy;
