use super::{AdvisoryContext, Rule};
use crate::data::nitrogen;

/// NVZ N-max limit check
///
/// The limit is a farm average across the crop area, so exceeding it on one
/// field is allowed as long as others are below. Recommendations at the
/// limit are not flagged.
pub struct NvzLimitRule;

impl Rule for NvzLimitRule {
    fn id(&self) -> &'static str {
        "nvz_nmax"
    }

    fn name(&self) -> &'static str {
        "NVZ N-max Limit"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        let Some(limit) = nitrogen::nvz_nmax(ctx.request.crop) else {
            return Vec::new();
        };
        let n = ctx.recommendation.nitrogen;
        if n <= limit {
            return Vec::new();
        }

        vec![format!(
            "N recommendation ({:.0} kg N/ha) exceeds the NVZ N-max limit for this crop \
             ({:.0} kg N/ha). In an NVZ the limit applies as an average over the farm area \
             of this crop.",
            n, limit
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{notes, rec};
    use crate::models::{Crop, RecommendRequest};

    #[test]
    fn over_limit_quotes_both_values() {
        let request = RecommendRequest::new(Crop::WinterWheatFeed, 0, 2, 2);
        let n = notes(&NvzLimitRule, &request, &rec(250.0, 60.0));
        assert_eq!(n.len(), 1);
        assert!(n[0].contains("N-max"));
        assert!(n[0].contains("250"));
        assert!(n[0].contains("220"));
    }

    #[test]
    fn at_limit_is_not_flagged() {
        let request = RecommendRequest::new(Crop::WinterWheatFeed, 0, 2, 2);
        assert!(notes(&NvzLimitRule, &request, &rec(220.0, 60.0)).is_empty());
    }

    #[test]
    fn crops_without_limit_are_ignored() {
        let request = RecommendRequest::new(Crop::Linseed, 0, 2, 2);
        assert!(notes(&NvzLimitRule, &request, &rec(500.0, 0.0)).is_empty());
    }
}
