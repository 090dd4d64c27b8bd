//! Notes describing adjustments made to the table values.

use super::{AdvisoryContext, Rule};
use crate::data::ber::{BerGroup, DEFAULT_BER};
use crate::data::{potassium, yield_adjustments};
use crate::logic::adjust;
use crate::models::{CropCategory, IndexHalf};

pub struct YieldRule;

impl Rule for YieldRule {
    fn id(&self) -> &'static str {
        "yield_adjustment"
    }

    fn name(&self) -> &'static str {
        "Expected Yield"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        let Some(expected) = ctx.request.expected_yield else {
            return Vec::new();
        };
        let Some(record) = yield_adjustments::lookup(ctx.request.crop) else {
            return Vec::new();
        };

        let mut note = format!(
            "Yield adjusted: expected {:.1} t/ha vs baseline {:.1} t/ha.",
            expected, record.baseline
        );
        if let Some(cap) = record.max_yield.filter(|cap| expected > *cap) {
            note.push_str(&format!(" Adjustment capped at {:.1} t/ha.", cap));
        }
        vec![note]
    }
}

/// Only wheat and barley have break-even ratio tables.
pub struct BerRule;

impl Rule for BerRule {
    fn id(&self) -> &'static str {
        "break_even_ratio"
    }

    fn name(&self) -> &'static str {
        "Break-Even Ratio"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        let (Some(ber), Some(group)) = (ctx.request.ber, BerGroup::for_crop(ctx.request.crop))
        else {
            return Vec::new();
        };
        let delta = adjust::interpolate(group.points(), ber);
        vec![format!(
            "N adjusted by {:+.0} kg N/ha for a break-even ratio of {:.1} (table default {:.1}).",
            delta, ber, DEFAULT_BER
        )]
    }
}

/// Vegetables at K Index 2 have separate 2- and 2+ potash values.
pub struct PotashIndexHalfRule;

impl Rule for PotashIndexHalfRule {
    fn id(&self) -> &'static str {
        "potash_index_half"
    }

    fn name(&self) -> &'static str {
        "K Index 2 Half"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        let request = ctx.request;
        if request.crop.category() != CropCategory::Vegetables
            || request.k_index != 2
            || potassium::vegetable_k2_upper(request.crop).is_none()
        {
            return Vec::new();
        }

        let note = match request.k_half {
            IndexHalf::Lower => "K Index 2 read as 2- (lower half). Use the 2+ value if the \
                                 soil analysis is in the upper half of the index.",
            IndexHalf::Upper => "K Index 2 read as 2+ (upper half of the index).",
        };
        vec![note.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{notes, rec};
    use crate::models::{Crop, RecommendRequest};

    #[test]
    fn yield_note_quotes_expected_and_baseline() {
        let request = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 1).with_expected_yield(10.0);
        let n = notes(&YieldRule, &request, &rec(190.0, 96.0));
        assert_eq!(n.len(), 1);
        assert!(n[0].contains("10.0"));
        assert!(n[0].contains("8.0"));
        assert!(!n[0].contains("capped"));
    }

    #[test]
    fn yield_note_mentions_cap() {
        let request = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 1).with_expected_yield(15.0);
        let n = notes(&YieldRule, &request, &rec(250.0, 96.0));
        assert!(n[0].contains("capped at 13.0"));
    }

    #[test]
    fn no_yield_note_without_yield() {
        let request = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 1);
        assert!(notes(&YieldRule, &request, &rec(150.0, 75.0)).is_empty());
    }

    #[test]
    fn ber_note_for_cereals_only() {
        let wheat = RecommendRequest::new(Crop::WinterWheatFeed, 2, 2, 1).with_ber(2.0);
        let n = notes(&BerRule, &wheat, &rec(180.0, 75.0));
        assert!(n[0].to_lowercase().contains("break-even"));
        assert!(n[0].contains("+30"));

        let beet = RecommendRequest::new(Crop::SugarBeet, 2, 2, 1).with_ber(2.0);
        assert!(notes(&BerRule, &beet, &rec(100.0, 75.0)).is_empty());
    }

    #[test]
    fn index_half_note_for_vegetables_at_k2() {
        let beet = RecommendRequest::new(Crop::VegBeetroot, 1, 2, 2);
        let lower = notes(&PotashIndexHalfRule, &beet, &rec(100.0, 100.0));
        assert!(lower[0].contains("2-"));

        let upper = beet.clone().with_k_half(IndexHalf::Upper);
        assert!(notes(&PotashIndexHalfRule, &upper, &rec(100.0, 100.0))[0].contains("2+"));

        let k1 = RecommendRequest::new(Crop::VegBeetroot, 1, 2, 1);
        assert!(notes(&PotashIndexHalfRule, &k1, &rec(100.0, 100.0)).is_empty());

        let wheat = RecommendRequest::new(Crop::WinterWheatFeed, 1, 2, 2);
        assert!(notes(&PotashIndexHalfRule, &wheat, &rec(100.0, 100.0)).is_empty());
    }
}
