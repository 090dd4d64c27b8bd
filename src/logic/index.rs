use crate::error::{Rb209Error, Result};

/// Highest SNS Index any table uses.
pub const MAX_SNS_INDEX: u8 = 6;

/// Largest soil P/K/Mg index accepted on input. Lookups clamp well below this.
pub const MAX_SOIL_INDEX: u8 = 9;

/// Check that an index lies in `[min, max]` and narrow it for table lookups.
pub fn validate_index(name: &str, value: i32, min: u8, max: u8) -> Result<u8> {
    if value < i32::from(min) || value > i32::from(max) {
        return Err(Rb209Error::invalid(format!(
            "{} must be an integer between {} and {}, got {}",
            name, min, max, value
        )));
    }
    // In range of u8 after the bounds check above.
    Ok(value as u8)
}

/// Indices above the last table key read the "and above" column.
pub fn clamp_index(value: u8, max_key: u8) -> u8 {
    if value > max_key {
        tracing::debug!(value, max_key, "clamped index to table maximum");
    }
    value.min(max_key)
}

/// Validate a soil P/K/Mg index (0-9) and clamp it to `max_key`.
pub fn soil_index(name: &str, value: i32, max_key: u8) -> Result<u8> {
    let index = validate_index(name, value, 0, MAX_SOIL_INDEX)?;
    Ok(clamp_index(index, max_key))
}

pub fn sns_index(value: i32) -> Result<u8> {
    validate_index("SNS index", value, 0, MAX_SNS_INDEX)
}
