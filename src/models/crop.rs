use crate::error::{unknown_option, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    Arable,
    Potatoes,
    Grassland,
    Vegetables,
    Fruit,
}

impl CropCategory {
    pub const ALL: [CropCategory; 5] = [
        CropCategory::Arable,
        CropCategory::Potatoes,
        CropCategory::Grassland,
        CropCategory::Vegetables,
        CropCategory::Fruit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Arable => "arable",
            CropCategory::Potatoes => "potatoes",
            CropCategory::Grassland => "grassland",
            CropCategory::Vegetables => "vegetables",
            CropCategory::Fruit => "fruit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arable" => Some(CropCategory::Arable),
            "potatoes" | "potato" => Some(CropCategory::Potatoes),
            "grassland" | "grass" => Some(CropCategory::Grassland),
            "vegetables" | "veg" => Some(CropCategory::Vegetables),
            "fruit" => Some(CropCategory::Fruit),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("crop category", s, Self::ALL.iter().map(|c| c.as_str()))
        })
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every crop with at least one RB209 table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    // Arable (Section 4)
    WinterWheatFeed,
    WinterWheatMilling,
    SpringWheat,
    WinterBarley,
    SpringBarley,
    WinterOats,
    SpringOats,
    WinterRye,
    WinterOilseedRape,
    SpringOilseedRape,
    Linseed,
    Peas,
    FieldBeans,
    SugarBeet,
    ForageMaize,
    // Potatoes (Section 5)
    PotatoesMaincrop,
    PotatoesEarly,
    PotatoesSeed,
    // Grassland (Section 3)
    GrassGrazed,
    GrassSilage,
    GrassHay,
    GrassGrazedOneCut,
    // Vegetables (Section 6)
    VegAsparagusEst,
    VegAsparagus,
    VegBrusselsSprouts,
    VegCabbageStorage,
    VegCabbageHeadPreDec,
    VegCabbageHeadPostDec,
    VegCollardsPreDec,
    VegCollardsPostDec,
    VegCauliflowerSummer,
    VegCauliflowerWinterSeedbed,
    VegCauliflowerWinterTopdress,
    VegCalabrese,
    VegCelerySeedbed,
    VegPeasMarket,
    VegBeansBroad,
    VegBeansDwarf,
    VegRadish,
    VegSweetcorn,
    VegLettuceWhole,
    VegLettuceBaby,
    VegRocket,
    VegOnionsBulb,
    VegOnionsSalad,
    VegLeeks,
    VegBeetroot,
    VegSwedes,
    VegTurnipsParsnips,
    VegCarrots,
    VegBulbs,
    VegCoriander,
    VegMintEst,
    VegMint,
    VegCourgettesSeedbed,
    VegCourgettesTopdress,
    // Fruit, vines and hops (Section 7)
    FruitPreplant,
    HopsPreplant,
    FruitDessertApple,
    FruitCulinaryApple,
    FruitPear,
    FruitCherry,
    FruitPlum,
    FruitBlackcurrant,
    FruitRedcurrant,
    FruitGooseberry,
    FruitRaspberry,
    FruitLoganberry,
    FruitTayberry,
    FruitBlackberry,
    FruitStrawberryMain,
    FruitStrawberryEver,
    FruitVine,
    FruitHops,
}

impl Crop {
    pub const ALL: [Crop; 74] = [
        Crop::WinterWheatFeed,
        Crop::WinterWheatMilling,
        Crop::SpringWheat,
        Crop::WinterBarley,
        Crop::SpringBarley,
        Crop::WinterOats,
        Crop::SpringOats,
        Crop::WinterRye,
        Crop::WinterOilseedRape,
        Crop::SpringOilseedRape,
        Crop::Linseed,
        Crop::Peas,
        Crop::FieldBeans,
        Crop::SugarBeet,
        Crop::ForageMaize,
        Crop::PotatoesMaincrop,
        Crop::PotatoesEarly,
        Crop::PotatoesSeed,
        Crop::GrassGrazed,
        Crop::GrassSilage,
        Crop::GrassHay,
        Crop::GrassGrazedOneCut,
        Crop::VegAsparagusEst,
        Crop::VegAsparagus,
        Crop::VegBrusselsSprouts,
        Crop::VegCabbageStorage,
        Crop::VegCabbageHeadPreDec,
        Crop::VegCabbageHeadPostDec,
        Crop::VegCollardsPreDec,
        Crop::VegCollardsPostDec,
        Crop::VegCauliflowerSummer,
        Crop::VegCauliflowerWinterSeedbed,
        Crop::VegCauliflowerWinterTopdress,
        Crop::VegCalabrese,
        Crop::VegCelerySeedbed,
        Crop::VegPeasMarket,
        Crop::VegBeansBroad,
        Crop::VegBeansDwarf,
        Crop::VegRadish,
        Crop::VegSweetcorn,
        Crop::VegLettuceWhole,
        Crop::VegLettuceBaby,
        Crop::VegRocket,
        Crop::VegOnionsBulb,
        Crop::VegOnionsSalad,
        Crop::VegLeeks,
        Crop::VegBeetroot,
        Crop::VegSwedes,
        Crop::VegTurnipsParsnips,
        Crop::VegCarrots,
        Crop::VegBulbs,
        Crop::VegCoriander,
        Crop::VegMintEst,
        Crop::VegMint,
        Crop::VegCourgettesSeedbed,
        Crop::VegCourgettesTopdress,
        Crop::FruitPreplant,
        Crop::HopsPreplant,
        Crop::FruitDessertApple,
        Crop::FruitCulinaryApple,
        Crop::FruitPear,
        Crop::FruitCherry,
        Crop::FruitPlum,
        Crop::FruitBlackcurrant,
        Crop::FruitRedcurrant,
        Crop::FruitGooseberry,
        Crop::FruitRaspberry,
        Crop::FruitLoganberry,
        Crop::FruitTayberry,
        Crop::FruitBlackberry,
        Crop::FruitStrawberryMain,
        Crop::FruitStrawberryEver,
        Crop::FruitVine,
        Crop::FruitHops,
    ];

    /// Kebab-case slug used on the command line and in lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::WinterWheatFeed => "winter-wheat-feed",
            Crop::WinterWheatMilling => "winter-wheat-milling",
            Crop::SpringWheat => "spring-wheat",
            Crop::WinterBarley => "winter-barley",
            Crop::SpringBarley => "spring-barley",
            Crop::WinterOats => "winter-oats",
            Crop::SpringOats => "spring-oats",
            Crop::WinterRye => "winter-rye",
            Crop::WinterOilseedRape => "winter-oilseed-rape",
            Crop::SpringOilseedRape => "spring-oilseed-rape",
            Crop::Linseed => "linseed",
            Crop::Peas => "peas",
            Crop::FieldBeans => "field-beans",
            Crop::SugarBeet => "sugar-beet",
            Crop::ForageMaize => "forage-maize",
            Crop::PotatoesMaincrop => "potatoes-maincrop",
            Crop::PotatoesEarly => "potatoes-early",
            Crop::PotatoesSeed => "potatoes-seed",
            Crop::GrassGrazed => "grass-grazed",
            Crop::GrassSilage => "grass-silage",
            Crop::GrassHay => "grass-hay",
            Crop::GrassGrazedOneCut => "grass-grazed-one-cut",
            Crop::VegAsparagusEst => "veg-asparagus-est",
            Crop::VegAsparagus => "veg-asparagus",
            Crop::VegBrusselsSprouts => "veg-brussels-sprouts",
            Crop::VegCabbageStorage => "veg-cabbage-storage",
            Crop::VegCabbageHeadPreDec => "veg-cabbage-head-pre-dec",
            Crop::VegCabbageHeadPostDec => "veg-cabbage-head-post-dec",
            Crop::VegCollardsPreDec => "veg-collards-pre-dec",
            Crop::VegCollardsPostDec => "veg-collards-post-dec",
            Crop::VegCauliflowerSummer => "veg-cauliflower-summer",
            Crop::VegCauliflowerWinterSeedbed => "veg-cauliflower-winter-seedbed",
            Crop::VegCauliflowerWinterTopdress => "veg-cauliflower-winter-topdress",
            Crop::VegCalabrese => "veg-calabrese",
            Crop::VegCelerySeedbed => "veg-celery-seedbed",
            Crop::VegPeasMarket => "veg-peas-market",
            Crop::VegBeansBroad => "veg-beans-broad",
            Crop::VegBeansDwarf => "veg-beans-dwarf",
            Crop::VegRadish => "veg-radish",
            Crop::VegSweetcorn => "veg-sweetcorn",
            Crop::VegLettuceWhole => "veg-lettuce-whole",
            Crop::VegLettuceBaby => "veg-lettuce-baby",
            Crop::VegRocket => "veg-rocket",
            Crop::VegOnionsBulb => "veg-onions-bulb",
            Crop::VegOnionsSalad => "veg-onions-salad",
            Crop::VegLeeks => "veg-leeks",
            Crop::VegBeetroot => "veg-beetroot",
            Crop::VegSwedes => "veg-swedes",
            Crop::VegTurnipsParsnips => "veg-turnips-parsnips",
            Crop::VegCarrots => "veg-carrots",
            Crop::VegBulbs => "veg-bulbs",
            Crop::VegCoriander => "veg-coriander",
            Crop::VegMintEst => "veg-mint-est",
            Crop::VegMint => "veg-mint",
            Crop::VegCourgettesSeedbed => "veg-courgettes-seedbed",
            Crop::VegCourgettesTopdress => "veg-courgettes-topdress",
            Crop::FruitPreplant => "fruit-preplant",
            Crop::HopsPreplant => "hops-preplant",
            Crop::FruitDessertApple => "fruit-dessert-apple",
            Crop::FruitCulinaryApple => "fruit-culinary-apple",
            Crop::FruitPear => "fruit-pear",
            Crop::FruitCherry => "fruit-cherry",
            Crop::FruitPlum => "fruit-plum",
            Crop::FruitBlackcurrant => "fruit-blackcurrant",
            Crop::FruitRedcurrant => "fruit-redcurrant",
            Crop::FruitGooseberry => "fruit-gooseberry",
            Crop::FruitRaspberry => "fruit-raspberry",
            Crop::FruitLoganberry => "fruit-loganberry",
            Crop::FruitTayberry => "fruit-tayberry",
            Crop::FruitBlackberry => "fruit-blackberry",
            Crop::FruitStrawberryMain => "fruit-strawberry-main",
            Crop::FruitStrawberryEver => "fruit-strawberry-ever",
            Crop::FruitVine => "fruit-vine",
            Crop::FruitHops => "fruit-hops",
        }
    }

    /// Display name shown in results.
    pub fn name(&self) -> &'static str {
        match self {
            Crop::WinterWheatFeed => "Winter Wheat (feed)",
            Crop::WinterWheatMilling => "Winter Wheat (milling)",
            Crop::SpringWheat => "Spring Wheat",
            Crop::WinterBarley => "Winter Barley",
            Crop::SpringBarley => "Spring Barley",
            Crop::WinterOats => "Winter Oats",
            Crop::SpringOats => "Spring Oats",
            Crop::WinterRye => "Winter Rye",
            Crop::WinterOilseedRape => "Winter Oilseed Rape",
            Crop::SpringOilseedRape => "Spring Oilseed Rape",
            Crop::Linseed => "Linseed",
            Crop::Peas => "Peas (combining)",
            Crop::FieldBeans => "Field Beans",
            Crop::SugarBeet => "Sugar Beet",
            Crop::ForageMaize => "Forage Maize",
            Crop::PotatoesMaincrop => "Potatoes (maincrop)",
            Crop::PotatoesEarly => "Potatoes (early)",
            Crop::PotatoesSeed => "Potatoes (seed)",
            Crop::GrassGrazed => "Grass (grazed)",
            Crop::GrassSilage => "Grass (silage)",
            Crop::GrassHay => "Grass (hay)",
            Crop::GrassGrazedOneCut => "Grass (grazed + 1 silage cut)",
            Crop::VegAsparagusEst => "Asparagus (establishment year)",
            Crop::VegAsparagus => "Asparagus (year 2 onwards)",
            Crop::VegBrusselsSprouts => "Brussels Sprouts",
            Crop::VegCabbageStorage => "Cabbage (storage)",
            Crop::VegCabbageHeadPreDec => "Cabbage (head, pre-December)",
            Crop::VegCabbageHeadPostDec => "Cabbage (head, post-December)",
            Crop::VegCollardsPreDec => "Collards (pre-December)",
            Crop::VegCollardsPostDec => "Collards (post-December)",
            Crop::VegCauliflowerSummer => "Cauliflower (summer/autumn)",
            Crop::VegCauliflowerWinterSeedbed => "Cauliflower (winter, seedbed)",
            Crop::VegCauliflowerWinterTopdress => "Cauliflower (winter, top dressing)",
            Crop::VegCalabrese => "Calabrese",
            Crop::VegCelerySeedbed => "Celery (seedbed)",
            Crop::VegPeasMarket => "Peas (market pick)",
            Crop::VegBeansBroad => "Broad Beans",
            Crop::VegBeansDwarf => "Dwarf/Runner Beans",
            Crop::VegRadish => "Radish",
            Crop::VegSweetcorn => "Sweetcorn",
            Crop::VegLettuceWhole => "Lettuce (whole head)",
            Crop::VegLettuceBaby => "Lettuce (baby leaf)",
            Crop::VegRocket => "Wild Rocket",
            Crop::VegOnionsBulb => "Bulb Onions",
            Crop::VegOnionsSalad => "Salad Onions",
            Crop::VegLeeks => "Leeks",
            Crop::VegBeetroot => "Beetroot",
            Crop::VegSwedes => "Swedes",
            Crop::VegTurnipsParsnips => "Turnips & Parsnips",
            Crop::VegCarrots => "Carrots",
            Crop::VegBulbs => "Bulbs & Bulb Flowers",
            Crop::VegCoriander => "Coriander",
            Crop::VegMintEst => "Mint (establishment year)",
            Crop::VegMint => "Mint (subsequent years)",
            Crop::VegCourgettesSeedbed => "Courgettes (seedbed)",
            Crop::VegCourgettesTopdress => "Courgettes (top dressing)",
            Crop::FruitPreplant => "Fruit (pre-planting)",
            Crop::HopsPreplant => "Hops (pre-planting)",
            Crop::FruitDessertApple => "Dessert Apple",
            Crop::FruitCulinaryApple => "Culinary Apple",
            Crop::FruitPear => "Pear",
            Crop::FruitCherry => "Cherry",
            Crop::FruitPlum => "Plum",
            Crop::FruitBlackcurrant => "Blackcurrant",
            Crop::FruitRedcurrant => "Redcurrant",
            Crop::FruitGooseberry => "Gooseberry",
            Crop::FruitRaspberry => "Raspberry",
            Crop::FruitLoganberry => "Loganberry",
            Crop::FruitTayberry => "Tayberry",
            Crop::FruitBlackberry => "Blackberry",
            Crop::FruitStrawberryMain => "Strawberry (main season)",
            Crop::FruitStrawberryEver => "Strawberry (everbearer)",
            Crop::FruitVine => "Grapevine",
            Crop::FruitHops => "Hops",
        }
    }

    pub fn category(&self) -> CropCategory {
        use Crop::*;
        match self {
            WinterWheatFeed | WinterWheatMilling | SpringWheat | WinterBarley | SpringBarley
            | WinterOats | SpringOats | WinterRye | WinterOilseedRape | SpringOilseedRape
            | Linseed | Peas | FieldBeans | SugarBeet | ForageMaize => CropCategory::Arable,
            PotatoesMaincrop | PotatoesEarly | PotatoesSeed => CropCategory::Potatoes,
            GrassGrazed | GrassSilage | GrassHay | GrassGrazedOneCut => CropCategory::Grassland,
            FruitPreplant | HopsPreplant | FruitDessertApple | FruitCulinaryApple | FruitPear
            | FruitCherry | FruitPlum | FruitBlackcurrant | FruitRedcurrant | FruitGooseberry
            | FruitRaspberry | FruitLoganberry | FruitTayberry | FruitBlackberry
            | FruitStrawberryMain | FruitStrawberryEver | FruitVine | FruitHops => {
                CropCategory::Fruit
            }
            _ => CropCategory::Vegetables,
        }
    }

    /// Cereals whose potash need depends on whether straw is baled off.
    pub fn has_straw_option(&self) -> bool {
        matches!(
            self,
            Crop::WinterWheatFeed
                | Crop::WinterWheatMilling
                | Crop::SpringWheat
                | Crop::WinterBarley
                | Crop::SpringBarley
                | Crop::WinterOats
                | Crop::SpringOats
                | Crop::WinterRye
        )
    }

    /// Legumes that normally need no fertiliser nitrogen.
    pub fn fixes_nitrogen(&self) -> bool {
        matches!(
            self,
            Crop::Peas | Crop::FieldBeans | Crop::VegPeasMarket | Crop::VegBeansBroad
        )
    }

    /// Grazed swards where fertiliser N competes with clover.
    pub fn clover_risk(&self) -> bool {
        matches!(self, Crop::GrassGrazed | Crop::GrassGrazedOneCut)
    }

    pub fn is_potato(&self) -> bool {
        self.category() == CropCategory::Potatoes
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Crop::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Parse a slug, listing every valid crop on failure.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            let mut valid: Vec<&str> = Crop::ALL.iter().map(|c| c.as_str()).collect();
            valid.sort_unstable();
            unknown_option("crop", s, valid)
        })
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
