use super::{AdvisoryContext, Rule};
use crate::data::sodium;

pub struct SodiumNotesRule;

impl Rule for SodiumNotesRule {
    fn id(&self) -> &'static str {
        "sodium"
    }

    fn name(&self) -> &'static str {
        "Sodium Guidance"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        sodium::notes(ctx.request.crop)
            .iter()
            .map(|n| n.to_string())
            .collect()
    }
}
