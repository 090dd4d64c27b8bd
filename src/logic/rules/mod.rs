pub mod adjustment;
pub mod crop;
pub mod engine;
pub mod livestock;
pub mod nvz;
pub mod placement;
pub mod potash;
pub mod sodium;

pub use engine::RulesEngine;

use crate::models::{NutrientRecommendation, RecommendRequest};

/// What an advisory rule can see: the request as given and the numbers
/// already computed for it.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryContext<'a> {
    pub request: &'a RecommendRequest,
    pub recommendation: &'a NutrientRecommendation,
}

impl<'a> AdvisoryContext<'a> {
    pub fn new(request: &'a RecommendRequest, recommendation: &'a NutrientRecommendation) -> Self {
        Self {
            request,
            recommendation,
        }
    }
}

/// Trait for advisory note rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Notes to attach. Rules never change the recommended amounts.
    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String>;
}
