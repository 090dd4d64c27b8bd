pub mod adjust;
pub mod fruit;
pub mod index;
pub mod lime;
pub mod nutrients;
pub mod organic;
pub mod recommend;
pub mod rules;
pub mod sns;
pub mod timing;

pub use fruit::{recommend_fruit_all, recommend_fruit_nitrogen, recommend_fruit_pkm};
pub use lime::calculate_lime;
pub use nutrients::{
    recommend_magnesium, recommend_nitrogen, recommend_phosphorus, recommend_potassium,
    recommend_sodium, recommend_sulfur,
};
pub use organic::calculate_organic;
pub use recommend::recommend_all;
pub use rules::RulesEngine;
pub use sns::{
    calculate_grass_ley_sns, calculate_smn_sns, calculate_sns, calculate_veg_smn_sns,
    calculate_veg_sns, combine_sns, smn_to_sns_index_veg, sns_value_to_index,
};
pub use timing::nitrogen_timing;
