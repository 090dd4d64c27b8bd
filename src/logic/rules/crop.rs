//! Notes that depend only on which crop is being grown.

use super::{AdvisoryContext, Rule};
use crate::data::crop_notes;

/// States which potash table a cereal was read from.
pub struct StrawRule;

impl Rule for StrawRule {
    fn id(&self) -> &'static str {
        "straw"
    }

    fn name(&self) -> &'static str {
        "Straw Assumption"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        if !ctx.request.crop.has_straw_option() {
            return Vec::new();
        }
        vec![format!(
            "K recommendation assumes straw {}.",
            ctx.request.straw
        )]
    }
}

pub struct CropNotesRule;

impl Rule for CropNotesRule {
    fn id(&self) -> &'static str {
        "crop_notes"
    }

    fn name(&self) -> &'static str {
        "Crop Guidance"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        crop_notes::notes(ctx.request.crop)
            .iter()
            .map(|n| n.to_string())
            .collect()
    }
}

/// Legumes normally fix their own nitrogen.
pub struct NitrogenFixingRule;

impl Rule for NitrogenFixingRule {
    fn id(&self) -> &'static str {
        "nitrogen_fixing"
    }

    fn name(&self) -> &'static str {
        "Nitrogen-Fixing Crop"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        if ctx.recommendation.nitrogen == 0.0 && ctx.request.crop.fixes_nitrogen() {
            vec!["N-fixing crop: no fertiliser nitrogen required.".to_string()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{notes, rec};
    use crate::models::{Crop, RecommendRequest, Straw};

    #[test]
    fn straw_note_for_cereals_only() {
        let wheat = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 2)
            .with_straw(Straw::Incorporated);
        let n = notes(&StrawRule, &wheat, &rec(150.0, 60.0));
        assert_eq!(n, vec!["K recommendation assumes straw incorporated."]);

        let beet = RecommendRequest::new(Crop::SugarBeet, 2, 2, 2);
        assert!(notes(&StrawRule, &beet, &rec(100.0, 80.0)).is_empty());
    }

    #[test]
    fn crop_notes_pass_through() {
        let leeks = RecommendRequest::new(Crop::VegLeeks, 2, 2, 2);
        let n = notes(&CropNotesRule, &leeks, &rec(100.0, 100.0));
        assert_eq!(n.len(), 2);
        assert!(n[0].contains("NVZ"));
    }

    #[test]
    fn nitrogen_fixing_only_when_no_n() {
        let peas = RecommendRequest::new(Crop::Peas, 2, 2, 2);
        assert_eq!(notes(&NitrogenFixingRule, &peas, &rec(0.0, 50.0)).len(), 1);

        let broad = RecommendRequest::new(Crop::VegBeansBroad, 2, 2, 2);
        assert_eq!(notes(&NitrogenFixingRule, &broad, &rec(0.0, 50.0)).len(), 1);

        let wheat = RecommendRequest::new(Crop::WinterWheatFeed, 6, 2, 2);
        assert!(notes(&NitrogenFixingRule, &wheat, &rec(0.0, 50.0)).is_empty());
    }
}
