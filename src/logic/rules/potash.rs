//! Large potash dressings that should not go on in one application.

use super::{AdvisoryContext, Rule};
use crate::models::Crop;

const POTATO_SINGLE_DRESSING_MAX: f64 = 300.0;
const SILAGE_SPRING_MAX: f64 = 90.0;

pub struct PotatoPotashRule;

impl Rule for PotatoPotashRule {
    fn id(&self) -> &'static str {
        "potato_potash"
    }

    fn name(&self) -> &'static str {
        "Potato Potash Dressing"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        if !ctx.request.crop.is_potato() || ctx.recommendation.potassium <= POTATO_SINGLE_DRESSING_MAX
        {
            return Vec::new();
        }
        vec![format!(
            "Potash above {:.0} kg K2O/ha: apply at least half in autumn/winter and the \
             remainder in spring, or split the spring dressing to limit salt damage to \
             emerging shoots.",
            POTATO_SINGLE_DRESSING_MAX
        )]
    }
}

/// Grass takes up more potash than it needs in spring.
pub struct SilagePotashRule;

impl Rule for SilagePotashRule {
    fn id(&self) -> &'static str {
        "silage_potash"
    }

    fn name(&self) -> &'static str {
        "Silage Potash Dressing"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        if ctx.request.crop != Crop::GrassSilage || ctx.recommendation.potassium <= SILAGE_SPRING_MAX
        {
            return Vec::new();
        }
        vec![format!(
            "Apply no more than {:.0} kg K2O/ha in spring for the first cut to avoid luxury \
             uptake; apply the balance after cutting.",
            SILAGE_SPRING_MAX
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{notes, rec};
    use crate::models::RecommendRequest;

    #[test]
    fn potato_note_above_300_only() {
        let request = RecommendRequest::new(Crop::PotatoesMaincrop, 2, 2, 0);
        assert!(notes(&PotatoPotashRule, &request, &rec(180.0, 300.0)).is_empty());
        let n = notes(&PotatoPotashRule, &request, &rec(180.0, 348.0));
        assert!(n[0].contains("autumn/winter"));
        assert!(n[0].contains("spring"));
        assert!(n[0].contains("split"));
    }

    #[test]
    fn potato_note_not_for_cereals() {
        let request = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 0);
        assert!(notes(&PotatoPotashRule, &request, &rec(150.0, 400.0)).is_empty());
    }

    #[test]
    fn silage_luxury_uptake() {
        let silage = RecommendRequest::new(Crop::GrassSilage, 2, 2, 0);
        assert!(notes(&SilagePotashRule, &silage, &rec(200.0, 150.0))[0].contains("luxury uptake"));
        assert!(notes(&SilagePotashRule, &silage, &rec(200.0, 60.0)).is_empty());

        let grazed = RecommendRequest::new(Crop::GrassGrazed, 2, 2, 0);
        assert!(notes(&SilagePotashRule, &grazed, &rec(200.0, 150.0)).is_empty());
    }
}
