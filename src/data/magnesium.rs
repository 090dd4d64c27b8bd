//! Magnesium tables, kg MgO/ha by Mg Index 0-4.

pub const MAX_INDEX: u8 = 4;

pub const ARABLE: [f64; 5] = [90.0, 60.0, 0.0, 0.0, 0.0];

/// Vegetables take higher rates at low Mg Index.
pub const VEGETABLE: [f64; 5] = [150.0, 100.0, 0.0, 0.0, 0.0];
