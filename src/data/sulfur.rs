//! Sulfur for S-responsive situations, kg SO3/ha.

use crate::models::{Crop, CropCategory};

pub fn recommendation(crop: Crop) -> f64 {
    use Crop::*;

    if crop.category() == CropCategory::Fruit {
        return 0.0;
    }

    match crop {
        WinterWheatFeed => 30.0,
        WinterWheatMilling => 40.0,
        SpringWheat => 25.0,
        WinterBarley => 30.0,
        SpringBarley => 25.0,
        WinterOats => 25.0,
        SpringOats => 20.0,
        WinterRye => 25.0,
        WinterOilseedRape => 75.0,
        SpringOilseedRape => 50.0,
        Linseed => 25.0,
        Peas | FieldBeans => 0.0,
        SugarBeet => 35.0,
        ForageMaize => 25.0,
        PotatoesMaincrop => 35.0,
        PotatoesEarly => 30.0,
        PotatoesSeed => 25.0,
        GrassGrazed => 30.0,
        GrassSilage => 40.0,
        GrassHay => 30.0,
        GrassGrazedOneCut => 35.0,
        // Brassicas, including swedes and turnips
        VegBrusselsSprouts
        | VegCabbageStorage
        | VegCabbageHeadPreDec
        | VegCabbageHeadPostDec
        | VegCollardsPreDec
        | VegCollardsPostDec
        | VegCauliflowerSummer
        | VegCauliflowerWinterSeedbed
        | VegCauliflowerWinterTopdress
        | VegCalabrese
        | VegSwedes
        | VegTurnipsParsnips => 50.0,
        VegCourgettesTopdress | VegPeasMarket | VegBeansBroad | VegBeansDwarf => 0.0,
        _ => 25.0,
    }
}
