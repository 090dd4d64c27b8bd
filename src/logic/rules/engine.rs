use super::{
    adjustment::{BerRule, PotashIndexHalfRule, YieldRule},
    crop::{CropNotesRule, NitrogenFixingRule, StrawRule},
    livestock::{CloverRule, HypomagnesaemiaRule},
    nvz::NvzLimitRule,
    placement::CombineDrillRule,
    potash::{PotatoPotashRule, SilagePotashRule},
    sodium::SodiumNotesRule,
    AdvisoryContext, Rule,
};

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    /// Rules run in this order and notes keep it.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(StrawRule),
            Box::new(CropNotesRule),
            Box::new(NitrogenFixingRule),
            Box::new(YieldRule),
            Box::new(BerRule),
            Box::new(PotashIndexHalfRule),
            Box::new(NvzLimitRule),
            Box::new(PotatoPotashRule),
            Box::new(SilagePotashRule),
            Box::new(HypomagnesaemiaRule),
            Box::new(CloverRule),
            Box::new(CombineDrillRule),
            Box::new(SodiumNotesRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|rule| {
                let notes = rule.evaluate(ctx);
                if !notes.is_empty() {
                    tracing::debug!(rule = rule.id(), count = notes.len(), "advisory notes");
                }
                notes
            })
            .collect()
    }

    pub fn evaluate_rule(&self, rule_id: &str, ctx: &AdvisoryContext<'_>) -> Option<Vec<String>> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .map(|rule| rule.evaluate(ctx))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::rec;
    use crate::models::{Crop, RecommendRequest};

    #[test]
    fn rule_ids_are_unique() {
        let engine = RulesEngine::new();
        let mut ids: Vec<_> = engine.list_rules().into_iter().map(|(id, _)| id).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn evaluate_single_rule_by_id() {
        let engine = RulesEngine::default();
        let request = RecommendRequest::new(Crop::Peas, 2, 2, 2);
        let recommendation = rec(0.0, 0.0);
        let ctx = AdvisoryContext::new(&request, &recommendation);

        let notes = engine.evaluate_rule("nitrogen_fixing", &ctx).unwrap();
        assert_eq!(notes.len(), 1);
        assert!(engine.evaluate_rule("no_such_rule", &ctx).is_none());
    }

    #[test]
    fn straw_note_comes_before_crop_notes() {
        let engine = RulesEngine::new();
        let request = RecommendRequest::new(Crop::WinterWheatMilling, 2, 2, 2);
        let recommendation = rec(190.0, 60.0);
        let notes = engine.evaluate(&AdvisoryContext::new(&request, &recommendation));
        assert!(notes[0].contains("straw"));
        assert!(notes[1].contains("Milling"));
    }
}
