//! Yield adjustment coefficients.
//!
//! Cereals follow Table 4.12, potatoes Section 5, and vegetables Table 6.27
//! (N) with Table 6.8 offtakes (P2O5, K2O). Asparagus, celery, peas, beans,
//! sweetcorn, courgettes and bulbs have no record.

use crate::models::Crop;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldAdjustment {
    /// t/ha assumed by the base table.
    pub baseline: f64,
    pub n_per_t: f64,
    pub p_per_t: f64,
    pub k_per_t: f64,
    /// Yields above this are treated as the cap.
    pub max_yield: Option<f64>,
}

const fn adj(baseline: f64, n_per_t: f64, p_per_t: f64, k_per_t: f64) -> YieldAdjustment {
    YieldAdjustment {
        baseline,
        n_per_t,
        p_per_t,
        k_per_t,
        max_yield: None,
    }
}

const WINTER_WHEAT: YieldAdjustment = YieldAdjustment {
    baseline: 8.0,
    n_per_t: 20.0,
    p_per_t: 7.0,
    k_per_t: 10.5,
    max_yield: Some(13.0),
};

pub fn lookup(crop: Crop) -> Option<YieldAdjustment> {
    use Crop::*;

    let record = match crop {
        WinterWheatFeed | WinterWheatMilling => WINTER_WHEAT,
        WinterOats => adj(6.0, 20.0, 7.0, 12.0),

        PotatoesMaincrop => adj(50.0, 0.0, 0.0, 5.8),
        PotatoesEarly => adj(30.0, 0.0, 0.0, 5.8),

        VegBrusselsSprouts => adj(20.3, 30.2, 2.6, 6.3),
        VegCabbageStorage => adj(110.0, 5.7, 0.9, 3.6),
        VegCabbageHeadPreDec => adj(60.0, 7.5, 0.9, 3.6),
        VegCabbageHeadPostDec => adj(53.0, 6.4, 0.9, 3.6),
        VegCollardsPreDec => adj(20.0, 21.7, 0.9, 3.6),
        VegCollardsPostDec => adj(30.0, 16.7, 0.9, 3.6),
        VegCauliflowerSummer => adj(30.6, 14.1, 1.4, 4.8),
        VegCalabrese => adj(16.3, 23.1, 1.4, 4.8),
        VegLettuceWhole => adj(45.5, 6.0, 0.0, 0.0),
        VegRadish => adj(50.0, 3.3, 0.0, 0.0),
        VegOnionsBulb => adj(60.5, 4.1, 0.7, 1.8),
        VegOnionsSalad => adj(30.0, 6.3, 0.7, 1.8),
        VegLeeks => adj(47.0, 9.9, 0.0, 0.0),
        VegBeetroot => adj(60.0, 7.5, 1.0, 4.5),
        VegSwedes => adj(84.4, 4.4, 0.7, 2.4),
        VegTurnipsParsnips => adj(48.0, 8.4, 0.0, 0.0),
        VegCarrots => adj(150.0, 2.0, 0.7, 3.0),
        VegCoriander => adj(48.0, 4.5, 0.8, 5.5),
        VegMint => adj(25.0, 10.2, 1.0, 3.9),

        _ => return None,
    };
    Some(record)
}

/// Crops with a yield record, in catalogue order.
pub fn supported_crops() -> impl Iterator<Item = Crop> {
    Crop::ALL.into_iter().filter(|c| lookup(*c).is_some())
}
