//! Nitrogen application timing rules (RB209 Sections 3-6).
//!
//! Rules are evaluated in declaration order and the first match wins. A rule
//! matches when total N falls inside `[min_n, max_n]` and the soil condition
//! accepts the requested soil type.

use crate::models::{Crop, SoilType};

/// Closed set of soil predicates a rule can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilCondition {
    Any,
    Light,
}

impl SoilCondition {
    pub fn accepts(&self, soil: Option<SoilType>) -> bool {
        match self {
            SoilCondition::Any => true,
            SoilCondition::Light => soil == Some(SoilType::Light),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Portion {
    /// Share of total N.
    Fraction(f64),
    /// Fixed kg N/ha, capped at whatever is still unallocated.
    Fixed(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSpec {
    pub portion: Portion,
    pub timing: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRule {
    pub min_n: f64,
    pub max_n: f64,
    pub soil: SoilCondition,
    pub splits: &'static [SplitSpec],
    pub notes: &'static [&'static str],
}

impl TimingRule {
    const fn new(splits: &'static [SplitSpec]) -> Self {
        Self {
            min_n: 0.0,
            max_n: f64::INFINITY,
            soil: SoilCondition::Any,
            splits,
            notes: &[],
        }
    }

    const fn range(mut self, min_n: f64, max_n: f64) -> Self {
        self.min_n = min_n;
        self.max_n = max_n;
        self
    }

    const fn soil(mut self, soil: SoilCondition) -> Self {
        self.soil = soil;
        self
    }

    const fn notes(mut self, notes: &'static [&'static str]) -> Self {
        self.notes = notes;
        self
    }

    pub fn matches(&self, total_n: f64, soil: Option<SoilType>) -> bool {
        total_n >= self.min_n && total_n <= self.max_n && self.soil.accepts(soil)
    }
}

const fn frac(fraction: f64, timing: &'static str) -> SplitSpec {
    SplitSpec {
        portion: Portion::Fraction(fraction),
        timing,
    }
}

const fn fixed(amount: f64, timing: &'static str) -> SplitSpec {
    SplitSpec {
        portion: Portion::Fixed(amount),
        timing,
    }
}

const INF: f64 = f64::INFINITY;

// Arable

const WW_EARLY: &str = "GS25-GS30 (February-March)";
const WW_LATE: &str = "GS31-GS32 (late March-April)";
const MILLING_NOTE: &str =
    "Consider a late protein dressing (GS32-GS39) to increase grain N content for milling quality.";
const RYE_NOTE: &str =
    "Winter rye is susceptible to lodging. Reduce N rate by 25-30 kg/ha if lodging risk is high.";

static WINTER_WHEAT_FEED: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, WW_EARLY)]).range(0.0, 120.0),
    TimingRule::new(&[frac(0.5, WW_EARLY), frac(0.5, WW_LATE)]).range(121.0, INF),
];

static WINTER_WHEAT_MILLING: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, WW_EARLY)])
        .range(0.0, 120.0)
        .notes(&[MILLING_NOTE]),
    TimingRule::new(&[frac(0.5, WW_EARLY), frac(0.5, WW_LATE)])
        .range(121.0, INF)
        .notes(&[MILLING_NOTE]),
];

const SW_DRILLING: &str = "At drilling or immediately after (March-April)";

static SPRING_WHEAT: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, SW_DRILLING)]).range(0.0, 100.0),
    TimingRule::new(&[
        frac(0.5, SW_DRILLING),
        frac(0.5, "GS30-GS31 (4-6 weeks after drilling)"),
    ])
    .range(101.0, INF),
];

const WB_TILLERING: &str = "Late tillering (mid-February/early March)";

static WINTER_BARLEY: [TimingRule; 3] = [
    TimingRule::new(&[frac(1.0, "GS30-31 (late February/early March)")]).range(0.0, 99.0),
    TimingRule::new(&[frac(0.5, WB_TILLERING), frac(0.5, "GS30-31")]).range(100.0, 199.0),
    TimingRule::new(&[
        frac(0.4, WB_TILLERING),
        frac(0.4, "GS30-31"),
        frac(0.2, "GS32"),
    ])
    .range(200.0, INF)
    .notes(&["Consider reducing by 25 kg N/ha if lodging risk is high."]),
];

const SB_DRILLING: &str = "At drilling or immediately after (February-April)";

static SPRING_BARLEY: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, SB_DRILLING)]).range(0.0, 99.0),
    TimingRule::new(&[
        frac(1.0 / 3.0, SB_DRILLING),
        frac(2.0 / 3.0, "GS25-GS30 (4-6 weeks after drilling)"),
    ])
    .range(100.0, INF),
];

static WINTER_RYE: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, WW_EARLY)])
        .range(0.0, 120.0)
        .notes(&[RYE_NOTE]),
    TimingRule::new(&[frac(0.5, WW_EARLY), frac(0.5, WW_LATE)])
        .range(121.0, INF)
        .notes(&[RYE_NOTE]),
];

// Potatoes: light soils split to limit leaching, everything else goes in the seedbed.

const POTATO_SEEDBED: &str = "Seedbed (before planting)";

static POTATOES: [TimingRule; 2] = [
    TimingRule::new(&[
        frac(2.0 / 3.0, POTATO_SEEDBED),
        frac(1.0 / 3.0, "Post-emergence (when shoots emerge)"),
    ])
    .soil(SoilCondition::Light)
    .notes(&["On light soils, split to reduce N leaching risk."]),
    TimingRule::new(&[frac(1.0, POTATO_SEEDBED)]),
];

// Grassland

const BEFORE_FIRST_CUT: &str = "Before 1st cut (January-February)";
const AFTER_FIRST_CUT: &str = "After 1st cut (May-June)";
const AFTER_SECOND_CUT: &str = "After 2nd cut (July-August)";

static GRASS_SILAGE: [TimingRule; 4] = [
    TimingRule::new(&[frac(1.0, BEFORE_FIRST_CUT)]).range(0.0, 80.0),
    TimingRule::new(&[frac(0.5, BEFORE_FIRST_CUT), frac(0.5, AFTER_FIRST_CUT)])
        .range(81.0, 180.0),
    TimingRule::new(&[
        frac(0.4, BEFORE_FIRST_CUT),
        frac(0.3, AFTER_FIRST_CUT),
        frac(0.3, AFTER_SECOND_CUT),
    ])
    .range(181.0, 280.0),
    TimingRule::new(&[
        frac(0.3, BEFORE_FIRST_CUT),
        frac(0.25, AFTER_FIRST_CUT),
        frac(0.25, AFTER_SECOND_CUT),
        frac(0.2, "After 3rd cut (September)"),
    ])
    .range(281.0, INF)
    .notes(&["Limit spring K2O for 1st cut to 80-90 kg/ha to minimise luxury uptake."]),
];

static GRASS_GRAZED: [TimingRule; 3] = [
    TimingRule::new(&[
        frac(0.5, "Early spring (March-April)"),
        frac(0.5, "Mid-season (June)"),
    ])
    .range(0.0, 100.0),
    TimingRule::new(&[
        frac(0.4, "Early spring (March-April)"),
        frac(0.3, "After 1st rotation (May-June)"),
        frac(0.3, "After 2nd rotation (July-August)"),
    ])
    .range(101.0, 200.0),
    TimingRule::new(&[
        frac(0.2, "Early spring (March)"),
        frac(0.2, "After 1st rotation (April-May)"),
        frac(0.2, "After 2nd rotation (June)"),
        frac(0.2, "After 3rd rotation (July)"),
        frac(0.2, "After 4th rotation (August)"),
    ])
    .range(201.0, INF)
    .notes(&["Apply before each grazing rotation; avoid applications in drought."]),
];

static GRASS_GRAZED_ONE_CUT: [TimingRule; 2] = [
    TimingRule::new(&[
        frac(0.5, "Early spring (February-March)"),
        frac(0.5, "After silage cut (May-June)"),
    ])
    .range(0.0, 120.0),
    TimingRule::new(&[
        frac(0.4, "Early spring (February-March)"),
        frac(0.3, "After silage cut (May-June)"),
        frac(0.3, "Late summer (August)"),
    ])
    .range(121.0, INF),
];

static GRASS_HAY: [TimingRule; 1] = [TimingRule::new(&[frac(
    1.0,
    "Early February to mid-March (before growth starts)",
)])];

// Vegetables

const SEEDBED: &str = "Seedbed (before or at sowing/planting)";
const TOP_DRESSING: &str = "Top dressing (after establishment)";

/// No more than 100 kg N/ha in the seedbed; the balance is top-dressed.
static SEEDBED_CAP: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, SEEDBED)]).range(0.0, 100.0),
    TimingRule::new(&[fixed(100.0, SEEDBED), frac(1.0, TOP_DRESSING)]).range(100.0, INF),
];

const LEEK_NVZ: &str = "In NVZs, observe the closed period for manufactured N; leeks \
                        overwintering in the field may need a top dressing in early spring.";

static LEEKS: [TimingRule; 2] = [
    TimingRule::new(&[frac(1.0, SEEDBED)])
        .range(0.0, 100.0)
        .notes(&[LEEK_NVZ]),
    TimingRule::new(&[fixed(100.0, SEEDBED), frac(1.0, TOP_DRESSING)])
        .range(100.0, INF)
        .notes(&[LEEK_NVZ]),
];

static ASPARAGUS_EST: [TimingRule; 1] = [TimingRule::new(&[
    frac(1.0 / 3.0, "Before sowing or planting"),
    frac(1.0 / 3.0, "When crop is established (May-June)"),
    frac(1.0 / 3.0, "Early August"),
])];

static ASPARAGUS: [TimingRule; 1] = [TimingRule::new(&[frac(
    1.0,
    "February (before spear emergence)",
)])
.notes(&["From Year 3 onwards, apply N after harvest to support fern growth."])];

static CAULIFLOWER_WINTER_SEEDBED: [TimingRule; 1] = [TimingRule::new(&[frac(1.0, SEEDBED)])];

static CAULIFLOWER_WINTER_TOPDRESS: [TimingRule; 1] = [TimingRule::new(&[frac(
    1.0,
    "Top dressing (early spring, as growth restarts)",
)])];

static CELERY: [TimingRule; 1] = [TimingRule::new(&[frac(1.0, SEEDBED)])
    .notes(&["Follow with top dressings during growth; seedbed N alone is rarely sufficient."])];

static BULBS: [TimingRule; 1] = [TimingRule::new(&[frac(1.0, "Before emergence (spring)")])];

static SINGLE_SEEDBED: [TimingRule; 1] = [TimingRule::new(&[frac(1.0, SEEDBED)])];

const NITRATE_NOTE: &str = "Avoid late N applications to limit nitrate concentrations in \
                            leaves; observe statutory nitrate limits for leafy salads.";

static LEAFY_SALAD: [TimingRule; 1] =
    [TimingRule::new(&[frac(1.0, SEEDBED)]).notes(&[NITRATE_NOTE])];

static N_FIXING: [TimingRule; 1] = [TimingRule::new(&[frac(1.0, "Not applicable (N-fixing crop)")])
    .notes(&["Peas and beans fix their own nitrogen; no fertiliser N is required."])];

static COURGETTES_TOPDRESS: [TimingRule; 1] = [TimingRule::new(&[frac(1.0, TOP_DRESSING)])];

/// Ordered timing rules for a crop, or `None` when RB209 gives no timing guidance.
pub fn rules(crop: Crop) -> Option<&'static [TimingRule]> {
    use Crop::*;

    let rules: &'static [TimingRule] = match crop {
        WinterWheatFeed => &WINTER_WHEAT_FEED,
        WinterWheatMilling => &WINTER_WHEAT_MILLING,
        SpringWheat => &SPRING_WHEAT,
        WinterBarley => &WINTER_BARLEY,
        SpringBarley => &SPRING_BARLEY,
        WinterRye => &WINTER_RYE,
        PotatoesMaincrop | PotatoesEarly | PotatoesSeed => &POTATOES,
        GrassSilage => &GRASS_SILAGE,
        GrassGrazed => &GRASS_GRAZED,
        GrassGrazedOneCut => &GRASS_GRAZED_ONE_CUT,
        GrassHay => &GRASS_HAY,
        VegAsparagusEst => &ASPARAGUS_EST,
        VegAsparagus => &ASPARAGUS,
        VegBrusselsSprouts
        | VegCabbageStorage
        | VegCabbageHeadPreDec
        | VegCabbageHeadPostDec
        | VegCollardsPreDec
        | VegCollardsPostDec
        | VegCauliflowerSummer
        | VegCalabrese
        | VegSweetcorn
        | VegCarrots
        | VegBeetroot
        | VegSwedes
        | VegTurnipsParsnips
        | VegRadish
        | VegBeansDwarf
        | VegCourgettesSeedbed
        | VegCoriander
        | VegMintEst
        | VegMint
        | VegOnionsBulb => &SEEDBED_CAP,
        VegLeeks => &LEEKS,
        VegCauliflowerWinterSeedbed => &CAULIFLOWER_WINTER_SEEDBED,
        VegCauliflowerWinterTopdress => &CAULIFLOWER_WINTER_TOPDRESS,
        VegCelerySeedbed => &CELERY,
        VegBulbs => &BULBS,
        VegOnionsSalad => &SINGLE_SEEDBED,
        VegLettuceWhole | VegLettuceBaby | VegRocket => &LEAFY_SALAD,
        VegPeasMarket | VegBeansBroad => &N_FIXING,
        VegCourgettesTopdress => &COURGETTES_TOPDRESS,
        _ => return None,
    };
    Some(rules)
}
