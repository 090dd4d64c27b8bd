//! Fixed advisory text attached to individual crops.

use crate::models::Crop;

const SEEDBED_CAP: &str =
    "Apply no more than 100 kg N/ha in the seedbed; top-dress the balance after establishment.";

pub fn notes(crop: Crop) -> &'static [&'static str] {
    use Crop::*;

    match crop {
        WinterWheatMilling => &[
            "Milling wheat N includes an allowance for grain protein; a late foliar urea \
             dressing may be needed to reach 13% protein.",
        ],
        WinterOilseedRape => &[
            "Autumn N is only justified where SNS is very low; most N should be applied in \
             spring.",
        ],
        SugarBeet => &["Avoid N in the seedbed above 40 kg N/ha to protect emergence."],
        ForageMaize => &["Manure and slurry often supply most of the N needed by forage maize."],
        PotatoesSeed => &["Seed crops need less N to keep tuber size within grade."],

        VegAsparagusEst => &[
            "Establishment year: split N between planting, establishment and early August.",
        ],
        VegAsparagus => &[
            "Year 2 onwards: apply N in February before spear emergence. Cut crops from \
             Year 3 receive N after harvest.",
        ],
        VegLeeks => &[
            "Leeks standing over winter fall within the NVZ closed period; plan top dressings \
             around it.",
            SEEDBED_CAP,
        ],
        VegCelerySeedbed => &[
            "Seedbed N only. Follow with top dressing during growth as required.",
        ],
        VegLettuceWhole | VegLettuceBaby | VegRocket => &[
            "Leafy salads accumulate nitrate; avoid excessive or late N to stay within \
             statutory nitrate limits.",
        ],
        VegCauliflowerWinterSeedbed => &[
            "Winter cauliflower: seedbed N only. The top dressing is recommended separately \
             as veg-cauliflower-winter-topdress.",
        ],
        VegCourgettesSeedbed => &[
            "Courgettes: seedbed N only. Top dressing is recommended separately as \
             veg-courgettes-topdress.",
            SEEDBED_CAP,
        ],
        VegBulbs => &["Bulbs: apply N before emergence; excess N encourages disease."],
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
        | VegCoriander
        | VegMintEst
        | VegMint
        | VegOnionsBulb => &[SEEDBED_CAP],

        FruitPreplant | HopsPreplant => &[
            "Incorporate P, K and Mg thoroughly before planting; no N is needed at planting.",
        ],
        FruitCulinaryApple => &[
            "Culinary and cider apples: potash needs are higher where fruit is sold for \
             cider; monitor leaf K.",
        ],
        FruitBlackcurrant => &[
            "Ben-series blackcurrant varieties are vigorous; reduce N where shoot growth is \
             excessive.",
        ],
        FruitHops => &[
            "High N increases the risk of Verticillium wilt in hops.",
            "Split N between late April and June to limit leaching.",
        ],
        FruitStrawberryMain | FruitStrawberryEver => &[
            "Nitrogen rates assume the SNS Index was measured before planting.",
            "Keep the soil K:Mg ratio below 3:1 to avoid induced magnesium deficiency.",
        ],
        _ => &[],
    }
}
