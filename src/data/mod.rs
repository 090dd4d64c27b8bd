//! RB209 reference tables.
//!
//! Everything here is immutable data keyed by the model enums. Lookups return
//! `Option` and leave validation and error text to `crate::logic`.

pub mod ber;
pub mod crop_notes;
pub mod fruit;
pub mod lime;
pub mod magnesium;
pub mod nitrogen;
pub mod organic;
pub mod phosphorus;
pub mod potassium;
pub mod sns;
pub mod sodium;
pub mod sulfur;
pub mod timing;
pub mod yield_adjustments;
