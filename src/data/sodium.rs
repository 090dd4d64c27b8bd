//! Sodium (Na2O) rates and advisory text.

use crate::models::{Crop, CropCategory};

/// Table 4.36: sugar beet sodium by K Index 0-4.
pub const SUGAR_BEET_BY_K_INDEX: [f64; 5] = [200.0, 200.0, 100.0, 0.0, 0.0];

pub const SUGAR_BEET_MAX_K_INDEX: u8 = 4;

pub const ASPARAGUS_RATE: f64 = 500.0;

/// Herbage mineral balance rate for grassland.
pub const GRASSLAND_RATE: f64 = 140.0;

pub fn notes(crop: Crop) -> &'static [&'static str] {
    match crop {
        Crop::SugarBeet => &[
            "Sodium can partly replace potash in sugar beet nutrition when soils contain too \
             little crop-available potash.",
            "On K Index 2 soils, only apply sodium if soil Na < 25 mg/l. Fen peats, silts and \
             clays usually contain sufficient sodium.",
            "Apply inorganic fertilisers containing sodium at least two weeks before sowing and \
             incorporate into the soil to avoid reducing plant populations in dry conditions, \
             especially on sandy soils.",
        ],
        Crop::VegAsparagus => &[
            "Asparagus can respond to applied sodium. Apply up to 500 kg Na2O/ha per year at the \
             end of June.",
            "Do not apply sodium in the establishment year.",
        ],
        Crop::VegAsparagusEst => &["Do not apply sodium in the asparagus establishment year."],
        Crop::VegCelerySeedbed => &[
            "Celery is responsive to sodium on all soils except peaty and some Fen silt soils, \
             which generally contain adequate sodium. Consult a FACTS Qualified Adviser for rate \
             guidance.",
        ],
        c if c.category() == CropCategory::Grassland => &[
            "Sodium has no effect on grass growth but is essential for livestock health \
             (minimum 0.15% Na in diet, dry matter basis).",
            "Apply 140 kg Na2O/ha in early spring where herbage Na is low (<0.15%) or the K:Na \
             ratio exceeds 20:1.",
            "For palatability, apply regular dressings of 10 kg Na2O/ha throughout the season.",
        ],
        _ => &[],
    }
}
