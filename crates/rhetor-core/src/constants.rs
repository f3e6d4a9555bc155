//! Shared numeric constants.

/// Earliest delivery year accepted for a corpus speech.
pub const YEAR_MIN: u16 = 1900;

/// Latest delivery year accepted for a corpus speech.
pub const YEAR_MAX: u16 = 2100;

/// Lower bound of the sentiment score scale (VADER compound).
pub const SCORE_MIN: f64 = -1.0;

/// Upper bound of the sentiment score scale (VADER compound).
pub const SCORE_MAX: f64 = 1.0;

/// Density metrics are expressed per this many words.
pub const DENSITY_WORDS: f64 = 1000.0;
