//! Break-even ratio adjustments to cereal N (Tables 4.25 and 4.26).
//!
//! BER = fertiliser N cost (£/kg) / grain value (£/kg). The tables are
//! relative to the default ratio of 5.0.

use crate::models::Crop;

pub const DEFAULT_BER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BerGroup {
    Wheat,
    Barley,
}

impl BerGroup {
    pub fn for_crop(crop: Crop) -> Option<Self> {
        match crop {
            Crop::WinterWheatFeed | Crop::WinterWheatMilling | Crop::SpringWheat => {
                Some(BerGroup::Wheat)
            }
            Crop::WinterBarley | Crop::SpringBarley => Some(BerGroup::Barley),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BerGroup::Wheat => "wheat",
            BerGroup::Barley => "barley",
        }
    }

    /// (ratio, kg N/ha delta) sorted by ratio.
    pub fn points(&self) -> &'static [(f64, f64)] {
        match self {
            BerGroup::Wheat => &[
                (2.0, 30.0),
                (3.0, 20.0),
                (4.0, 10.0),
                (5.0, 0.0),
                (6.0, -10.0),
                (7.0, -15.0),
                (8.0, -20.0),
                (10.0, -30.0),
            ],
            BerGroup::Barley => &[
                (2.0, 25.0),
                (3.0, 15.0),
                (4.0, 10.0),
                (5.0, 0.0),
                (6.0, -10.0),
                (7.0, -15.0),
                (8.0, -20.0),
                (10.0, -25.0),
            ],
        }
    }
}
