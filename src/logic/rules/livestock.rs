//! Grazing sward warnings.

use super::{AdvisoryContext, Rule};
use crate::models::CropCategory;

/// Potash on low-Mg grassland depresses herbage magnesium.
pub struct HypomagnesaemiaRule;

impl Rule for HypomagnesaemiaRule {
    fn id(&self) -> &'static str {
        "hypomagnesaemia"
    }

    fn name(&self) -> &'static str {
        "Grass Staggers Risk"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        let request = ctx.request;
        if request.crop.category() != CropCategory::Grassland
            || ctx.recommendation.potassium <= 0.0
            || request.mg_index > 1
        {
            return Vec::new();
        }
        vec![format!(
            "Soil Mg Index {} with applied potash increases the risk of hypomagnesaemia (grass \
             staggers). Avoid spring potash where possible and provide magnesium supplements.",
            request.mg_index
        )]
    }
}

pub struct CloverRule;

impl Rule for CloverRule {
    fn id(&self) -> &'static str {
        "clover"
    }

    fn name(&self) -> &'static str {
        "Clover Suppression"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        if !ctx.request.crop.clover_risk() || ctx.recommendation.nitrogen <= 0.0 {
            return Vec::new();
        }
        vec![
            "Fertiliser N reduces clover content. Where the sward has more than 30% clover, \
             reduce or omit N."
                .to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{notes, rec};
    use crate::models::{Crop, RecommendRequest};

    #[test]
    fn hypomagnesaemia_needs_grass_potash_and_low_mg() {
        let low = RecommendRequest::new(Crop::GrassGrazed, 2, 2, 0).with_mg_index(0);
        assert!(notes(&HypomagnesaemiaRule, &low, &rec(180.0, 60.0))[0].contains("hypomagnesaemia"));
        assert!(notes(&HypomagnesaemiaRule, &low, &rec(180.0, 0.0)).is_empty());

        let target = RecommendRequest::new(Crop::GrassGrazed, 2, 2, 0).with_mg_index(2);
        assert!(notes(&HypomagnesaemiaRule, &target, &rec(180.0, 60.0)).is_empty());

        let arable = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 0).with_mg_index(0);
        assert!(notes(&HypomagnesaemiaRule, &arable, &rec(150.0, 105.0)).is_empty());
    }

    #[test]
    fn clover_warning_only_when_n_applied() {
        let grazed = RecommendRequest::new(Crop::GrassGrazed, 2, 2, 2);
        assert!(notes(&CloverRule, &grazed, &rec(180.0, 0.0))[0].contains("clover"));
        assert!(notes(&CloverRule, &grazed, &rec(0.0, 0.0)).is_empty());

        let wheat = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 2);
        assert!(notes(&CloverRule, &wheat, &rec(150.0, 0.0)).is_empty());
    }
}
