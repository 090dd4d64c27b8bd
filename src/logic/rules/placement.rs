use super::{AdvisoryContext, Rule};
use crate::models::{CropCategory, SoilType};

/// Above this combined N + K2O, seed-placed fertiliser can damage
/// germination on light soils.
const COMBINE_DRILL_MAX: f64 = 150.0;

/// Combine-drilling on sandy soils
pub struct CombineDrillRule;

impl Rule for CombineDrillRule {
    fn id(&self) -> &'static str {
        "combine_drill"
    }

    fn name(&self) -> &'static str {
        "Combine-Drilled Fertiliser"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        let rec = ctx.recommendation;
        if ctx.request.crop.category() != CropCategory::Arable
            || ctx.request.soil_type != Some(SoilType::Light)
            || rec.nitrogen + rec.potassium <= COMBINE_DRILL_MAX
        {
            return Vec::new();
        }
        vec![format!(
            "On light soils, do not combine-drill more than {:.0} kg/ha of N + K2O with the \
             seed; broadcast the rest.",
            COMBINE_DRILL_MAX
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{notes, rec};
    use crate::models::{Crop, RecommendRequest};

    #[test]
    fn light_soil_high_n_plus_k() {
        let light = RecommendRequest::new(Crop::WinterWheatFeed, 0, 2, 0).with_soil_type(SoilType::Light);
        assert!(notes(&CombineDrillRule, &light, &rec(180.0, 105.0))[0].contains("combine-drill"));
        assert!(notes(&CombineDrillRule, &light, &rec(60.0, 0.0)).is_empty());
    }

    #[test]
    fn other_soils_and_grassland_skip() {
        let medium =
            RecommendRequest::new(Crop::WinterWheatFeed, 0, 2, 0).with_soil_type(SoilType::Medium);
        assert!(notes(&CombineDrillRule, &medium, &rec(250.0, 105.0)).is_empty());

        let unknown = RecommendRequest::new(Crop::WinterWheatFeed, 0, 2, 0);
        assert!(notes(&CombineDrillRule, &unknown, &rec(250.0, 105.0)).is_empty());

        let silage = RecommendRequest::new(Crop::GrassSilage, 0, 2, 0).with_soil_type(SoilType::Light);
        assert!(notes(&CombineDrillRule, &silage, &rec(320.0, 150.0)).is_empty());
    }
}
