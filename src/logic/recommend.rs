use super::nutrients;
use super::rules::{AdvisoryContext, RulesEngine};
use crate::error::Result;
use crate::models::{NutrientRecommendation, RecommendRequest};

/// Full N, P2O5, K2O, MgO, SO3 and Na2O recommendation with advisory notes.
///
/// Any invalid input fails the whole request. Notes are added after the
/// numbers are final and never change them.
pub fn recommend_all(request: &RecommendRequest) -> Result<NutrientRecommendation> {
    let crop = request.crop;
    nutrients::reject_fruit(crop)?;

    let mut rec = NutrientRecommendation::new(crop.name());
    rec.nitrogen = nutrients::recommend_nitrogen(
        crop,
        request.sns_index,
        request.soil_type,
        request.expected_yield,
        request.ber,
    )?;
    rec.phosphorus =
        nutrients::recommend_phosphorus(crop, request.p_index, request.expected_yield)?;
    rec.potassium = nutrients::recommend_potassium(
        crop,
        request.k_index,
        request.straw,
        request.k_half,
        request.expected_yield,
    )?;
    rec.magnesium = nutrients::recommend_magnesium(crop, request.mg_index)?;
    rec.sulfur = nutrients::recommend_sulfur(crop)?;
    rec.sodium = nutrients::recommend_sodium(crop, Some(request.k_index))?;

    let notes = RulesEngine::new().evaluate(&AdvisoryContext::new(request, &rec));
    tracing::debug!(
        crop = crop.as_str(),
        n = rec.nitrogen,
        p = rec.phosphorus,
        k = rec.potassium,
        notes = notes.len(),
        "recommendation complete"
    );
    rec.notes = notes;
    Ok(rec)
}
